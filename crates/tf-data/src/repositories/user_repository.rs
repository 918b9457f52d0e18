use std::sync::Arc;

use tf_api::resources::users::UpdateProfileRequest;
use tf_api::{ApiClient, ItemEnvelope};
use tf_cache::UserTable;
use tf_core::User;

use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct UserRepository {
    api: Arc<ApiClient>,
    table: UserTable,
}

impl UserRepository {
    pub fn new(api: Arc<ApiClient>, pool: SqlitePool) -> Self {
        Self {
            api,
            table: UserTable::new(pool),
        }
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    pub async fn cached_by_id(&self, id: Uuid) -> tf_cache::Result<Option<User>> {
        self.table.get_by_id(id).await
    }

    // =========================================================================
    // Remote operations, mirrored into the cache on success
    // =========================================================================

    pub async fn fetch_me(&self) -> ItemEnvelope<User> {
        match self.api.users().me().await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Current user fetch failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn update_me(&self, body: &UpdateProfileRequest) -> ItemEnvelope<User> {
        match self.api.users().update_me(body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Profile update failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    async fn mirror(&self, user: Option<&User>) {
        if let Some(user) = user
            && let Err(e) = self.table.upsert(user).await
        {
            warn!("User cache write failed: {}", e);
        }
    }
}
