use std::sync::Arc;

use tf_api::resources::bugs::{BugFilter, CreateBugRequest, UpdateBugRequest};
use tf_api::{ApiClient, ItemEnvelope, ListEnvelope};
use tf_cache::BugTable;
use tf_core::Bug;

use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct BugRepository {
    api: Arc<ApiClient>,
    table: BugTable,
}

impl BugRepository {
    pub fn new(api: Arc<ApiClient>, pool: SqlitePool) -> Self {
        Self {
            api,
            table: BugTable::new(pool),
        }
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    pub async fn cached_by_task(&self, task_id: Uuid) -> tf_cache::Result<Vec<Bug>> {
        self.table.get_by_task(task_id).await
    }

    // =========================================================================
    // Remote operations, mirrored into the cache on success
    // =========================================================================

    pub async fn fetch(&self, workspace_id: Uuid, filter: &BugFilter) -> ListEnvelope<Bug> {
        match self.api.bugs().list(workspace_id, filter).await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Bug list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn create(&self, body: &CreateBugRequest) -> ItemEnvelope<Bug> {
        match self.api.bugs().create(body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Bug create failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn update(&self, id: Uuid, body: &UpdateBugRequest) -> ItemEnvelope<Bug> {
        match self.api.bugs().update(id, body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Bug update failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> ItemEnvelope<Bug> {
        match self.api.bugs().delete(id).await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.delete(id).await
                {
                    warn!("Bug cache delete failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Bug delete failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    async fn mirror(&self, bug: Option<&Bug>) {
        if let Some(bug) = bug
            && let Err(e) = self.table.upsert(bug).await
        {
            warn!("Bug cache write failed: {}", e);
        }
    }

    async fn mirror_all(&self, bugs: &[Bug]) {
        if let Err(e) = self.table.upsert_all(bugs).await {
            warn!("Bug cache write failed: {}", e);
        }
    }
}
