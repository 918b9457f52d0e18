use std::sync::Arc;

use tf_api::resources::epics::{CreateEpicRequest, EpicFilter, UpdateEpicRequest};
use tf_core::{Epic, Task};
use tf_data::{EpicRepository, TaskRepository};

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize)]
pub struct EpicsUiState {
    pub loading: bool,
    pub workspace_id: Option<Uuid>,
    pub epics: Vec<Epic>,
    /// Tasks of the epic expanded in the UI, if any
    pub expanded_epic: Option<Uuid>,
    pub expanded_tasks: Vec<Task>,
    pub error: Option<String>,
}

/// Backs the epic list screen with one expandable epic row.
pub struct EpicsViewModel {
    epics: Arc<EpicRepository>,
    tasks: Arc<TaskRepository>,
    state: Arc<RwLock<EpicsUiState>>,
}

impl EpicsViewModel {
    pub fn new(epics: Arc<EpicRepository>, tasks: Arc<TaskRepository>) -> Self {
        Self {
            epics,
            tasks,
            state: Arc::new(RwLock::new(EpicsUiState::default())),
        }
    }

    pub async fn state(&self) -> EpicsUiState {
        self.state.read().await.clone()
    }

    pub async fn load_cached(&self, workspace_id: Uuid) {
        let epics = self
            .epics
            .cached_by_workspace(workspace_id)
            .await
            .unwrap_or_default();
        *self.state.write().await = EpicsUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            epics,
            ..EpicsUiState::default()
        };
    }

    pub async fn refresh(&self, workspace_id: Uuid) {
        self.state.write().await.loading = true;

        let envelope = self.epics.fetch(workspace_id, &EpicFilter::default()).await;
        let (epics, error) = if envelope.success {
            (envelope.data, None)
        } else {
            (
                self.epics
                    .cached_by_workspace(workspace_id)
                    .await
                    .unwrap_or_default(),
                Some("Couldn't refresh epics".to_string()),
            )
        };

        *self.state.write().await = EpicsUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            epics,
            error,
            ..EpicsUiState::default()
        };
    }

    /// Expand one epic and pull its tasks from the server.
    pub async fn expand(&self, epic_id: Uuid) {
        let workspace_id = self.state.read().await.workspace_id;
        let tasks = match workspace_id {
            Some(workspace_id) => {
                let filter = tf_api::resources::tasks::TaskFilter {
                    epic_id: Some(epic_id),
                    ..Default::default()
                };
                let envelope = self.tasks.fetch(workspace_id, &filter).await;
                if envelope.success {
                    envelope.data
                } else {
                    self.tasks.cached_by_epic(epic_id).await.unwrap_or_default()
                }
            }
            None => self.tasks.cached_by_epic(epic_id).await.unwrap_or_default(),
        };

        let mut state = self.state.write().await;
        state.expanded_epic = Some(epic_id);
        state.expanded_tasks = tasks;
    }

    pub async fn create(&self, body: CreateEpicRequest) {
        let workspace_id = body.workspace_id;
        let envelope = self.epics.create(&body).await;
        if envelope.success {
            self.refresh(workspace_id).await;
        } else {
            self.state.write().await.error = Some("Couldn't create epic".to_string());
        }
    }

    pub async fn update(&self, id: Uuid, body: UpdateEpicRequest) {
        let envelope = self.epics.update(id, &body).await;
        let workspace_id = self.state.read().await.workspace_id;
        match (envelope.success, workspace_id) {
            (true, Some(workspace_id)) => self.refresh(workspace_id).await,
            _ => self.state.write().await.error = Some("Couldn't update epic".to_string()),
        }
    }

    pub async fn delete(&self, id: Uuid) {
        let envelope = self.epics.delete(id).await;
        let workspace_id = self.state.read().await.workspace_id;
        match (envelope.success, workspace_id) {
            (true, Some(workspace_id)) => self.refresh(workspace_id).await,
            _ => self.state.write().await.error = Some("Couldn't delete epic".to_string()),
        }
    }
}
