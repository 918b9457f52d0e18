use std::sync::Arc;

use tf_api::resources::channels::{CreateChannelRequest, UpdateChannelRequest};
use tf_api::{ApiClient, ItemEnvelope, ListEnvelope};
use tf_cache::ChannelTable;
use tf_core::Channel;

use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ChannelRepository {
    api: Arc<ApiClient>,
    table: ChannelTable,
}

impl ChannelRepository {
    pub fn new(api: Arc<ApiClient>, pool: SqlitePool) -> Self {
        Self {
            api,
            table: ChannelTable::new(pool),
        }
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    pub async fn cached_by_workspace(&self, workspace_id: Uuid) -> tf_cache::Result<Vec<Channel>> {
        self.table.get_by_workspace(workspace_id).await
    }

    // =========================================================================
    // Remote operations, mirrored into the cache on success
    // =========================================================================

    pub async fn fetch(&self, workspace_id: Uuid) -> ListEnvelope<Channel> {
        match self.api.channels().list(workspace_id).await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Channel list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn create(&self, body: &CreateChannelRequest) -> ItemEnvelope<Channel> {
        match self.api.channels().create(body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Channel create failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn update(&self, id: Uuid, body: &UpdateChannelRequest) -> ItemEnvelope<Channel> {
        match self.api.channels().update(id, body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Channel update failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> ItemEnvelope<Channel> {
        match self.api.channels().delete(id).await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.delete(id).await
                {
                    warn!("Channel cache delete failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Channel delete failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    async fn mirror(&self, channel: Option<&Channel>) {
        if let Some(channel) = channel
            && let Err(e) = self.table.upsert(channel).await
        {
            warn!("Channel cache write failed: {}", e);
        }
    }

    async fn mirror_all(&self, channels: &[Channel]) {
        if let Err(e) = self.table.upsert_all(channels).await {
            warn!("Channel cache write failed: {}", e);
        }
    }
}
