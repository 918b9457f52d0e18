use std::sync::Arc;

use tf_api::resources::invitations::CreateInvitationRequest;
use tf_core::{Invitation, User};
use tf_data::{InvitationRepository, WorkspaceRepository};

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MembersUiState {
    pub loading: bool,
    pub workspace_id: Option<Uuid>,
    pub members: Vec<User>,
    pub invitations: Vec<Invitation>,
    pub error: Option<String>,
}

/// Backs the member management screen: current members plus the outstanding
/// invitations of a workspace.
pub struct MembersViewModel {
    workspaces: Arc<WorkspaceRepository>,
    invitations: Arc<InvitationRepository>,
    state: Arc<RwLock<MembersUiState>>,
}

impl MembersViewModel {
    pub fn new(
        workspaces: Arc<WorkspaceRepository>,
        invitations: Arc<InvitationRepository>,
    ) -> Self {
        Self {
            workspaces,
            invitations,
            state: Arc::new(RwLock::new(MembersUiState::default())),
        }
    }

    pub async fn state(&self) -> MembersUiState {
        self.state.read().await.clone()
    }

    pub async fn load_cached(&self, workspace_id: Uuid) {
        let members = self
            .workspaces
            .cached_members(workspace_id)
            .await
            .unwrap_or_default();
        let invitations = self
            .invitations
            .cached_by_workspace(workspace_id)
            .await
            .unwrap_or_default();
        *self.state.write().await = MembersUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            members,
            invitations,
            error: None,
        };
    }

    pub async fn refresh(&self, workspace_id: Uuid) {
        self.state.write().await.loading = true;

        let member_envelope = self.workspaces.fetch_members(workspace_id).await;
        let invitation_envelope = self.invitations.fetch_for_workspace(workspace_id).await;

        let failed = !member_envelope.success || !invitation_envelope.success;
        let members = if member_envelope.success {
            member_envelope.data
        } else {
            self.workspaces
                .cached_members(workspace_id)
                .await
                .unwrap_or_default()
        };
        let invitations = if invitation_envelope.success {
            invitation_envelope.data
        } else {
            self.invitations
                .cached_by_workspace(workspace_id)
                .await
                .unwrap_or_default()
        };

        *self.state.write().await = MembersUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            members,
            invitations,
            error: failed.then(|| "Couldn't refresh members".to_string()),
        };
    }

    /// Invitations addressed to the current user, across workspaces.
    pub async fn load_inbox(&self) {
        self.state.write().await.loading = true;

        let envelope = self.invitations.fetch_mine().await;
        let (invitations, error) = if envelope.success {
            (envelope.data, None)
        } else {
            (
                self.invitations.cached_all().await.unwrap_or_default(),
                Some("Couldn't refresh invitations".to_string()),
            )
        };

        *self.state.write().await = MembersUiState {
            loading: false,
            workspace_id: None,
            members: Vec::new(),
            invitations,
            error,
        };
    }

    pub async fn invite(&self, workspace_id: Uuid, invitee_email: String) {
        let body = CreateInvitationRequest {
            workspace_id,
            invitee_email,
        };
        let envelope = self.invitations.create(&body).await;
        if envelope.success {
            self.refresh(workspace_id).await;
        } else {
            self.state.write().await.error = Some("Couldn't send invitation".to_string());
        }
    }

    pub async fn accept_invitation(&self, id: Uuid) {
        let envelope = self.invitations.accept(id).await;
        if !envelope.success {
            self.state.write().await.error = Some("Couldn't accept invitation".to_string());
        } else if let Some(workspace_id) = self.state.read().await.workspace_id {
            self.refresh(workspace_id).await;
        }
    }

    pub async fn decline_invitation(&self, id: Uuid) {
        let envelope = self.invitations.decline(id).await;
        if !envelope.success {
            self.state.write().await.error = Some("Couldn't decline invitation".to_string());
        } else if let Some(workspace_id) = self.state.read().await.workspace_id {
            self.refresh(workspace_id).await;
        }
    }

    pub async fn withdraw_invitation(&self, id: Uuid) {
        let envelope = self.invitations.delete(id).await;
        let workspace_id = self.state.read().await.workspace_id;
        match (envelope.success, workspace_id) {
            (true, Some(workspace_id)) => self.refresh(workspace_id).await,
            _ => self.state.write().await.error = Some("Couldn't withdraw invitation".to_string()),
        }
    }

    pub async fn add_member(&self, workspace_id: Uuid, user_id: Uuid) {
        let envelope = self.workspaces.add_member(workspace_id, user_id).await;
        if envelope.success {
            self.refresh(workspace_id).await;
        } else {
            self.state.write().await.error = Some("Couldn't add member".to_string());
        }
    }

    pub async fn remove_member(&self, workspace_id: Uuid, user_id: Uuid) {
        let envelope = self.workspaces.remove_member(workspace_id, user_id).await;
        if envelope.success {
            self.refresh(workspace_id).await;
        } else {
            self.state.write().await.error = Some("Couldn't remove member".to_string());
        }
    }
}
