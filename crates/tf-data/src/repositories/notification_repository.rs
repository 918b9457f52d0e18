use std::sync::Arc;

use tf_api::resources::notifications::NotificationFilter;
use tf_api::{ApiClient, ItemEnvelope, ListEnvelope};
use tf_cache::NotificationTable;
use tf_core::Notification;

use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct NotificationRepository {
    api: Arc<ApiClient>,
    table: NotificationTable,
}

impl NotificationRepository {
    pub fn new(api: Arc<ApiClient>, pool: SqlitePool) -> Self {
        Self {
            api,
            table: NotificationTable::new(pool),
        }
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    pub async fn cached_all(&self, user_id: Uuid) -> tf_cache::Result<Vec<Notification>> {
        self.table.get_all(user_id).await
    }

    pub async fn cached_unread(&self, user_id: Uuid) -> tf_cache::Result<Vec<Notification>> {
        self.table.get_unread(user_id).await
    }

    pub async fn cached_unread_count(&self, user_id: Uuid) -> tf_cache::Result<i64> {
        self.table.unread_count(user_id).await
    }

    // =========================================================================
    // Remote operations, mirrored into the cache on success
    // =========================================================================

    pub async fn fetch(&self, filter: &NotificationFilter) -> ListEnvelope<Notification> {
        match self.api.notifications().list(filter).await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Notification list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn mark_read(&self, id: Uuid) -> ItemEnvelope<Notification> {
        match self.api.notifications().mark_read(id).await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.mark_read(id).await
                {
                    warn!("Notification cache write failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Notification mark read failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> ListEnvelope<Notification> {
        match self.api.notifications().mark_all_read().await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.mark_all_read(user_id).await
                {
                    warn!("Notification cache write failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Notification mark all read failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> ItemEnvelope<Notification> {
        match self.api.notifications().delete(id).await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.delete(id).await
                {
                    warn!("Notification cache delete failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Notification delete failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    async fn mirror_all(&self, notifications: &[Notification]) {
        if let Err(e) = self.table.upsert_all(notifications).await {
            warn!("Notification cache write failed: {}", e);
        }
    }
}
