use std::sync::Arc;

use tf_api::resources::sprints::{CreateSprintRequest, SprintFilter, UpdateSprintRequest};
use tf_api::{ApiClient, ItemEnvelope, ListEnvelope};
use tf_cache::SprintTable;
use tf_core::Sprint;

use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SprintRepository {
    api: Arc<ApiClient>,
    table: SprintTable,
}

impl SprintRepository {
    pub fn new(api: Arc<ApiClient>, pool: SqlitePool) -> Self {
        Self {
            api,
            table: SprintTable::new(pool),
        }
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    pub async fn cached_by_workspace(&self, workspace_id: Uuid) -> tf_cache::Result<Vec<Sprint>> {
        self.table.get_by_workspace(workspace_id).await
    }

    pub async fn cached_active(&self, workspace_id: Uuid) -> tf_cache::Result<Option<Sprint>> {
        self.table.get_active(workspace_id).await
    }

    // =========================================================================
    // Remote operations, mirrored into the cache on success
    // =========================================================================

    pub async fn fetch(&self, workspace_id: Uuid, filter: &SprintFilter) -> ListEnvelope<Sprint> {
        match self.api.sprints().list(workspace_id, filter).await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Sprint list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn create(&self, body: &CreateSprintRequest) -> ItemEnvelope<Sprint> {
        match self.api.sprints().create(body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Sprint create failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn update(&self, id: Uuid, body: &UpdateSprintRequest) -> ItemEnvelope<Sprint> {
        match self.api.sprints().update(id, body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Sprint update failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> ItemEnvelope<Sprint> {
        match self.api.sprints().delete(id).await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.delete(id).await
                {
                    warn!("Sprint cache delete failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Sprint delete failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    async fn mirror(&self, sprint: Option<&Sprint>) {
        if let Some(sprint) = sprint
            && let Err(e) = self.table.upsert(sprint).await
        {
            warn!("Sprint cache write failed: {}", e);
        }
    }

    async fn mirror_all(&self, sprints: &[Sprint]) {
        if let Err(e) = self.table.upsert_all(sprints).await {
            warn!("Sprint cache write failed: {}", e);
        }
    }
}
