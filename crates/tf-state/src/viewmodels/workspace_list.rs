use std::sync::Arc;

use tf_api::resources::workspaces::{
    CreateWorkspaceRequest, UpdateWorkspaceRequest, WorkspaceFilter,
};
use tf_core::Workspace;
use tf_data::WorkspaceRepository;

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkspaceListUiState {
    pub loading: bool,
    pub workspaces: Vec<Workspace>,
    pub error: Option<String>,
}

/// Backs the workspace picker screen.
pub struct WorkspaceListViewModel {
    repo: Arc<WorkspaceRepository>,
    state: Arc<RwLock<WorkspaceListUiState>>,
}

impl WorkspaceListViewModel {
    pub fn new(repo: Arc<WorkspaceRepository>) -> Self {
        Self {
            repo,
            state: Arc::new(RwLock::new(WorkspaceListUiState::default())),
        }
    }

    pub async fn state(&self) -> WorkspaceListUiState {
        self.state.read().await.clone()
    }

    /// Show whatever the cache has, without touching the network.
    pub async fn load_cached(&self) {
        let workspaces = self.repo.cached_all().await.unwrap_or_default();
        *self.state.write().await = WorkspaceListUiState {
            loading: false,
            workspaces,
            error: None,
        };
    }

    /// Refresh from the server, falling back to cached rows on failure.
    pub async fn refresh(&self) {
        self.state.write().await.loading = true;

        let envelope = self.repo.fetch(&WorkspaceFilter::default()).await;
        let new_state = if envelope.success {
            WorkspaceListUiState {
                loading: false,
                workspaces: envelope.data,
                error: None,
            }
        } else {
            WorkspaceListUiState {
                loading: false,
                workspaces: self.repo.cached_all().await.unwrap_or_default(),
                error: Some("Couldn't refresh workspaces".to_string()),
            }
        };

        *self.state.write().await = new_state;
    }

    pub async fn create(&self, name: String, description: Option<String>) {
        let body = CreateWorkspaceRequest { name, description };
        let envelope = self.repo.create(&body).await;
        if envelope.success {
            self.refresh().await;
        } else {
            self.state.write().await.error = Some("Couldn't create workspace".to_string());
        }
    }

    pub async fn rename(&self, id: Uuid, name: String) {
        let body = UpdateWorkspaceRequest {
            name: Some(name),
            ..UpdateWorkspaceRequest::default()
        };
        let envelope = self.repo.update(id, &body).await;
        if envelope.success {
            self.refresh().await;
        } else {
            self.state.write().await.error = Some("Couldn't update workspace".to_string());
        }
    }

    pub async fn delete(&self, id: Uuid) {
        let envelope = self.repo.delete(id).await;
        if envelope.success {
            self.refresh().await;
        } else {
            self.state.write().await.error = Some("Couldn't delete workspace".to_string());
        }
    }
}
