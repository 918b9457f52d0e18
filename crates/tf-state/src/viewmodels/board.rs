use std::sync::Arc;

use tf_api::resources::epics::EpicFilter;
use tf_api::resources::tasks::{CreateTaskRequest, TaskFilter, UpdateTaskRequest};
use tf_core::{Epic, Task, TaskStatus};
use tf_data::{EpicRepository, TaskRepository};

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BoardUiState {
    pub loading: bool,
    pub workspace_id: Option<Uuid>,
    pub columns: Vec<BoardColumn>,
    pub epics: Vec<Epic>,
    pub error: Option<String>,
}

/// Backs the kanban board screen: tasks grouped into status columns plus
/// the workspace's epics for the filter rail.
pub struct BoardViewModel {
    tasks: Arc<TaskRepository>,
    epics: Arc<EpicRepository>,
    state: Arc<RwLock<BoardUiState>>,
}

impl BoardViewModel {
    pub fn new(tasks: Arc<TaskRepository>, epics: Arc<EpicRepository>) -> Self {
        Self {
            tasks,
            epics,
            state: Arc::new(RwLock::new(BoardUiState::default())),
        }
    }

    pub async fn state(&self) -> BoardUiState {
        self.state.read().await.clone()
    }

    /// Build the board from cached rows only.
    pub async fn load_cached(&self, workspace_id: Uuid) {
        let tasks = self
            .tasks
            .cached_by_workspace(workspace_id)
            .await
            .unwrap_or_default();
        let epics = self
            .epics
            .cached_by_workspace(workspace_id)
            .await
            .unwrap_or_default();

        *self.state.write().await = BoardUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            columns: group_into_columns(tasks),
            epics,
            error: None,
        };
    }

    /// Refresh both lists from the server; on failure the board falls back
    /// to cached rows and carries an error.
    pub async fn refresh(&self, workspace_id: Uuid) {
        self.state.write().await.loading = true;

        let task_envelope = self.tasks.fetch(workspace_id, &TaskFilter::default()).await;
        let epic_envelope = self.epics.fetch(workspace_id, &EpicFilter::default()).await;

        let failed = !task_envelope.success || !epic_envelope.success;
        let tasks = if task_envelope.success {
            task_envelope.data
        } else {
            self.tasks
                .cached_by_workspace(workspace_id)
                .await
                .unwrap_or_default()
        };
        let epics = if epic_envelope.success {
            epic_envelope.data
        } else {
            self.epics
                .cached_by_workspace(workspace_id)
                .await
                .unwrap_or_default()
        };

        *self.state.write().await = BoardUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            columns: group_into_columns(tasks),
            epics,
            error: failed.then(|| "Couldn't refresh the board".to_string()),
        };
    }

    pub async fn create_task(&self, body: CreateTaskRequest) {
        let workspace_id = body.workspace_id;
        let envelope = self.tasks.create(&body).await;
        if envelope.success {
            self.refresh(workspace_id).await;
        } else {
            self.state.write().await.error = Some("Couldn't create task".to_string());
        }
    }

    pub async fn update_task(&self, id: Uuid, body: UpdateTaskRequest) {
        let envelope = self.tasks.update(id, &body).await;
        match (envelope.success, self.current_workspace().await) {
            (true, Some(workspace_id)) => self.refresh(workspace_id).await,
            _ => self.state.write().await.error = Some("Couldn't update task".to_string()),
        }
    }

    /// Drag a task into another column.
    pub async fn move_task(&self, id: Uuid, status: TaskStatus) {
        let body = UpdateTaskRequest {
            status: Some(status),
            ..UpdateTaskRequest::default()
        };
        self.update_task(id, body).await;
    }

    pub async fn delete_task(&self, id: Uuid) {
        let envelope = self.tasks.delete(id).await;
        match (envelope.success, self.current_workspace().await) {
            (true, Some(workspace_id)) => self.refresh(workspace_id).await,
            _ => self.state.write().await.error = Some("Couldn't delete task".to_string()),
        }
    }

    async fn current_workspace(&self) -> Option<Uuid> {
        self.state.read().await.workspace_id
    }
}

fn group_into_columns(tasks: Vec<Task>) -> Vec<BoardColumn> {
    TaskStatus::all()
        .into_iter()
        .map(|status| {
            let tasks = tasks
                .iter()
                .filter(|t| t.status == status)
                .cloned()
                .collect();
            BoardColumn { status, tasks }
        })
        .collect()
}
