use std::sync::Arc;

use tf_api::resources::bugs::{BugFilter, CreateBugRequest, UpdateBugRequest};
use tf_api::resources::tasks::UpdateTaskRequest;
use tf_core::{Bug, Task};
use tf_data::{BugRepository, TaskRepository};

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskDetailUiState {
    pub loading: bool,
    pub task: Option<Task>,
    pub bugs: Vec<Bug>,
    pub error: Option<String>,
}

/// Backs the task detail screen: one task plus the bugs filed against it.
pub struct TaskDetailViewModel {
    tasks: Arc<TaskRepository>,
    bugs: Arc<BugRepository>,
    state: Arc<RwLock<TaskDetailUiState>>,
}

impl TaskDetailViewModel {
    pub fn new(tasks: Arc<TaskRepository>, bugs: Arc<BugRepository>) -> Self {
        Self {
            tasks,
            bugs,
            state: Arc::new(RwLock::new(TaskDetailUiState::default())),
        }
    }

    pub async fn state(&self) -> TaskDetailUiState {
        self.state.read().await.clone()
    }

    /// Open a task: cached copy first, then the fresh one if reachable.
    pub async fn open(&self, task_id: Uuid) {
        let cached = self.tasks.cached_by_id(task_id).await.unwrap_or_default();
        let cached_bugs = self.bugs.cached_by_task(task_id).await.unwrap_or_default();
        *self.state.write().await = TaskDetailUiState {
            loading: true,
            task: cached,
            bugs: cached_bugs,
            error: None,
        };

        let envelope = self.tasks.fetch_by_id(task_id).await;
        let fresh_task = envelope.success.then_some(envelope.data).flatten();

        // The bug list rides along when the task itself is reachable
        let fresh_bugs = match &fresh_task {
            Some(task) => {
                let filter = BugFilter {
                    task_id: Some(task_id),
                    ..BugFilter::default()
                };
                let bugs = self.bugs.fetch(task.workspace_id, &filter).await;
                bugs.success.then_some(bugs.data)
            }
            None => None,
        };

        let mut state = self.state.write().await;
        state.loading = false;
        match fresh_task {
            Some(task) => state.task = Some(task),
            None if state.task.is_none() => {
                state.error = Some("Task not available offline".to_string());
            }
            None => {}
        }
        if let Some(bugs) = fresh_bugs {
            state.bugs = bugs;
        }
    }

    pub async fn update(&self, task_id: Uuid, body: UpdateTaskRequest) {
        let envelope = self.tasks.update(task_id, &body).await;
        let mut state = self.state.write().await;
        if envelope.success {
            state.task = envelope.data;
            state.error = None;
        } else {
            state.error = Some("Couldn't update task".to_string());
        }
    }

    pub async fn report_bug(&self, mut body: CreateBugRequest, task_id: Uuid) {
        body.task_id = Some(task_id);
        let envelope = self.bugs.create(&body).await;
        if envelope.success {
            self.reload_bugs(task_id).await;
        } else {
            self.state.write().await.error = Some("Couldn't report bug".to_string());
        }
    }

    pub async fn update_bug(&self, bug_id: Uuid, task_id: Uuid, body: UpdateBugRequest) {
        let envelope = self.bugs.update(bug_id, &body).await;
        if envelope.success {
            self.reload_bugs(task_id).await;
        } else {
            self.state.write().await.error = Some("Couldn't update bug".to_string());
        }
    }

    pub async fn delete_bug(&self, bug_id: Uuid, task_id: Uuid) {
        let envelope = self.bugs.delete(bug_id).await;
        if envelope.success {
            self.reload_bugs(task_id).await;
        } else {
            self.state.write().await.error = Some("Couldn't delete bug".to_string());
        }
    }

    async fn reload_bugs(&self, task_id: Uuid) {
        let bugs = self.bugs.cached_by_task(task_id).await.unwrap_or_default();
        let mut state = self.state.write().await;
        state.bugs = bugs;
        state.error = None;
    }
}
