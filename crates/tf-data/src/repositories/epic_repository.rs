use std::sync::Arc;

use tf_api::resources::epics::{CreateEpicRequest, EpicFilter, UpdateEpicRequest};
use tf_api::{ApiClient, ItemEnvelope, ListEnvelope};
use tf_cache::EpicTable;
use tf_core::Epic;

use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct EpicRepository {
    api: Arc<ApiClient>,
    table: EpicTable,
}

impl EpicRepository {
    pub fn new(api: Arc<ApiClient>, pool: SqlitePool) -> Self {
        Self {
            api,
            table: EpicTable::new(pool),
        }
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    pub async fn cached_by_workspace(&self, workspace_id: Uuid) -> tf_cache::Result<Vec<Epic>> {
        self.table.get_by_workspace(workspace_id).await
    }

    pub async fn cached_by_id(&self, id: Uuid) -> tf_cache::Result<Option<Epic>> {
        self.table.get_by_id(id).await
    }

    pub async fn cached_by_sprint(&self, sprint_id: Uuid) -> tf_cache::Result<Vec<Epic>> {
        self.table.get_by_sprint(sprint_id).await
    }

    // =========================================================================
    // Remote operations, mirrored into the cache on success
    // =========================================================================

    pub async fn fetch(&self, workspace_id: Uuid, filter: &EpicFilter) -> ListEnvelope<Epic> {
        match self.api.epics().list(workspace_id, filter).await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Epic list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn fetch_by_id(&self, id: Uuid) -> ItemEnvelope<Epic> {
        match self.api.epics().get(id).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Epic fetch failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn create(&self, body: &CreateEpicRequest) -> ItemEnvelope<Epic> {
        match self.api.epics().create(body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Epic create failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn update(&self, id: Uuid, body: &UpdateEpicRequest) -> ItemEnvelope<Epic> {
        match self.api.epics().update(id, body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Epic update failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> ItemEnvelope<Epic> {
        match self.api.epics().delete(id).await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.delete(id).await
                {
                    warn!("Epic cache delete failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Epic delete failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    async fn mirror(&self, epic: Option<&Epic>) {
        if let Some(epic) = epic
            && let Err(e) = self.table.upsert(epic).await
        {
            warn!("Epic cache write failed: {}", e);
        }
    }

    async fn mirror_all(&self, epics: &[Epic]) {
        if let Err(e) = self.table.upsert_all(epics).await {
            warn!("Epic cache write failed: {}", e);
        }
    }
}
