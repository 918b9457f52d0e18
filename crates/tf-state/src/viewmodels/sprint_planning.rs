use std::sync::Arc;

use tf_api::resources::sprints::{CreateSprintRequest, SprintFilter, UpdateSprintRequest};
use tf_api::resources::tasks::UpdateTaskRequest;
use tf_core::{Sprint, SprintStatus, Task};
use tf_data::{SprintRepository, TaskRepository};

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SprintPlanningUiState {
    pub loading: bool,
    pub workspace_id: Option<Uuid>,
    pub sprints: Vec<Sprint>,
    /// The sprint currently running, if any
    pub active_sprint: Option<Sprint>,
    /// Tasks committed to the sprint selected in the UI
    pub selected_sprint: Option<Uuid>,
    pub sprint_tasks: Vec<Task>,
    pub error: Option<String>,
}

/// Backs the sprint planning screen: the workspace's sprints and the tasks
/// committed to the selected one.
pub struct SprintPlanningViewModel {
    sprints: Arc<SprintRepository>,
    tasks: Arc<TaskRepository>,
    state: Arc<RwLock<SprintPlanningUiState>>,
}

impl SprintPlanningViewModel {
    pub fn new(sprints: Arc<SprintRepository>, tasks: Arc<TaskRepository>) -> Self {
        Self {
            sprints,
            tasks,
            state: Arc::new(RwLock::new(SprintPlanningUiState::default())),
        }
    }

    pub async fn state(&self) -> SprintPlanningUiState {
        self.state.read().await.clone()
    }

    pub async fn load_cached(&self, workspace_id: Uuid) {
        let sprints = self
            .sprints
            .cached_by_workspace(workspace_id)
            .await
            .unwrap_or_default();
        let active_sprint = self
            .sprints
            .cached_active(workspace_id)
            .await
            .unwrap_or_default();
        *self.state.write().await = SprintPlanningUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            sprints,
            active_sprint,
            ..SprintPlanningUiState::default()
        };
    }

    pub async fn refresh(&self, workspace_id: Uuid) {
        self.state.write().await.loading = true;

        let envelope = self
            .sprints
            .fetch(workspace_id, &SprintFilter::default())
            .await;
        let (sprints, error) = if envelope.success {
            (envelope.data, None)
        } else {
            (
                self.sprints
                    .cached_by_workspace(workspace_id)
                    .await
                    .unwrap_or_default(),
                Some("Couldn't refresh sprints".to_string()),
            )
        };

        let active_sprint = self
            .sprints
            .cached_active(workspace_id)
            .await
            .unwrap_or_default();
        *self.state.write().await = SprintPlanningUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            sprints,
            active_sprint,
            error,
            ..SprintPlanningUiState::default()
        };
    }

    /// Select a sprint and load its committed tasks from the cache.
    pub async fn select(&self, sprint_id: Uuid) {
        let tasks = self
            .tasks
            .cached_by_sprint(sprint_id)
            .await
            .unwrap_or_default();
        let mut state = self.state.write().await;
        state.selected_sprint = Some(sprint_id);
        state.sprint_tasks = tasks;
    }

    pub async fn create(&self, body: CreateSprintRequest) {
        let workspace_id = body.workspace_id;
        let envelope = self.sprints.create(&body).await;
        if envelope.success {
            self.refresh(workspace_id).await;
        } else {
            self.state.write().await.error = Some("Couldn't create sprint".to_string());
        }
    }

    pub async fn start(&self, id: Uuid) {
        self.set_status(id, SprintStatus::Active).await;
    }

    pub async fn complete(&self, id: Uuid) {
        self.set_status(id, SprintStatus::Completed).await;
    }

    pub async fn update(&self, id: Uuid, body: UpdateSprintRequest) {
        let envelope = self.sprints.update(id, &body).await;
        let workspace_id = self.state.read().await.workspace_id;
        match (envelope.success, workspace_id) {
            (true, Some(workspace_id)) => self.refresh(workspace_id).await,
            _ => self.state.write().await.error = Some("Couldn't update sprint".to_string()),
        }
    }

    pub async fn delete(&self, id: Uuid) {
        let envelope = self.sprints.delete(id).await;
        let workspace_id = self.state.read().await.workspace_id;
        match (envelope.success, workspace_id) {
            (true, Some(workspace_id)) => self.refresh(workspace_id).await,
            _ => self.state.write().await.error = Some("Couldn't delete sprint".to_string()),
        }
    }

    /// Commit a task to the selected sprint (or pull it out with None).
    pub async fn assign_task(&self, task_id: Uuid, sprint_id: Option<Uuid>) {
        let body = UpdateTaskRequest {
            sprint_id,
            ..UpdateTaskRequest::default()
        };
        let envelope = self.tasks.update(task_id, &body).await;
        let selected_sprint = self.state.read().await.selected_sprint;
        match (envelope.success, selected_sprint) {
            (true, Some(selected)) => self.select(selected).await,
            (true, None) => {}
            _ => self.state.write().await.error = Some("Couldn't move task".to_string()),
        }
    }

    async fn set_status(&self, id: Uuid, status: SprintStatus) {
        let body = UpdateSprintRequest {
            status: Some(status),
            ..UpdateSprintRequest::default()
        };
        self.update(id, body).await;
    }
}
