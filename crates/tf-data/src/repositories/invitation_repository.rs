use std::sync::Arc;

use tf_api::resources::invitations::CreateInvitationRequest;
use tf_api::{ApiClient, ItemEnvelope, ListEnvelope};
use tf_cache::InvitationTable;
use tf_core::Invitation;

use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct InvitationRepository {
    api: Arc<ApiClient>,
    table: InvitationTable,
}

impl InvitationRepository {
    pub fn new(api: Arc<ApiClient>, pool: SqlitePool) -> Self {
        Self {
            api,
            table: InvitationTable::new(pool),
        }
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    pub async fn cached_by_workspace(
        &self,
        workspace_id: Uuid,
    ) -> tf_cache::Result<Vec<Invitation>> {
        self.table.get_by_workspace(workspace_id).await
    }

    pub async fn cached_all(&self) -> tf_cache::Result<Vec<Invitation>> {
        self.table.get_all().await
    }

    // =========================================================================
    // Remote operations, mirrored into the cache on success
    // =========================================================================

    pub async fn fetch_for_workspace(&self, workspace_id: Uuid) -> ListEnvelope<Invitation> {
        match self.api.invitations().list_for_workspace(workspace_id).await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Invitation list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    /// Invitations addressed to the current user.
    pub async fn fetch_mine(&self) -> ListEnvelope<Invitation> {
        match self.api.invitations().list_mine().await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Invitation list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn create(&self, body: &CreateInvitationRequest) -> ItemEnvelope<Invitation> {
        match self.api.invitations().create(body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Invitation create failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn accept(&self, id: Uuid) -> ItemEnvelope<Invitation> {
        match self.api.invitations().accept(id).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Invitation accept failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn decline(&self, id: Uuid) -> ItemEnvelope<Invitation> {
        match self.api.invitations().decline(id).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Invitation decline failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> ItemEnvelope<Invitation> {
        match self.api.invitations().delete(id).await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.delete(id).await
                {
                    warn!("Invitation cache delete failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Invitation delete failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    async fn mirror(&self, invitation: Option<&Invitation>) {
        if let Some(invitation) = invitation
            && let Err(e) = self.table.upsert(invitation).await
        {
            warn!("Invitation cache write failed: {}", e);
        }
    }

    async fn mirror_all(&self, invitations: &[Invitation]) {
        if let Err(e) = self.table.upsert_all(invitations).await {
            warn!("Invitation cache write failed: {}", e);
        }
    }
}
