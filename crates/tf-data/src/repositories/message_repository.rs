use std::sync::Arc;

use tf_api::resources::messages::{EditMessageRequest, MessageFilter, SendMessageRequest};
use tf_api::{ApiClient, ItemEnvelope, ListEnvelope};
use tf_cache::MessageTable;
use tf_core::Message;

use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct MessageRepository {
    api: Arc<ApiClient>,
    table: MessageTable,
}

impl MessageRepository {
    pub fn new(api: Arc<ApiClient>, pool: SqlitePool) -> Self {
        Self {
            api,
            table: MessageTable::new(pool),
        }
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    pub async fn cached_by_channel(&self, channel_id: Uuid) -> tf_cache::Result<Vec<Message>> {
        self.table.get_by_channel(channel_id).await
    }

    pub async fn cached_replies(&self, parent_id: Uuid) -> tf_cache::Result<Vec<Message>> {
        self.table.get_replies(parent_id).await
    }

    // =========================================================================
    // Remote operations, mirrored into the cache on success
    // =========================================================================

    pub async fn fetch(&self, channel_id: Uuid, filter: &MessageFilter) -> ListEnvelope<Message> {
        match self.api.messages().list(channel_id, filter).await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Message list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn fetch_replies(&self, parent_id: Uuid) -> ListEnvelope<Message> {
        match self.api.messages().replies(parent_id).await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Reply list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn send(&self, body: &SendMessageRequest) -> ItemEnvelope<Message> {
        match self.api.messages().send(body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Message send failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn edit(&self, id: Uuid, body: &EditMessageRequest) -> ItemEnvelope<Message> {
        match self.api.messages().edit(id, body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Message edit failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> ItemEnvelope<Message> {
        match self.api.messages().delete(id).await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.delete(id).await
                {
                    warn!("Message cache delete failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Message delete failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    async fn mirror(&self, message: Option<&Message>) {
        if let Some(message) = message
            && let Err(e) = self.table.upsert(message).await
        {
            warn!("Message cache write failed: {}", e);
        }
    }

    async fn mirror_all(&self, messages: &[Message]) {
        if let Err(e) = self.table.upsert_all(messages).await {
            warn!("Message cache write failed: {}", e);
        }
    }
}
