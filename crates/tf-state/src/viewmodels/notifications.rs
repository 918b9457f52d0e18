use std::sync::Arc;

use tf_api::resources::notifications::NotificationFilter;
use tf_core::Notification;
use tf_data::NotificationRepository;

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationsUiState {
    pub loading: bool,
    pub notifications: Vec<Notification>,
    pub unread_count: i64,
    pub error: Option<String>,
}

/// Backs the notification inbox and the unread badge.
pub struct NotificationsViewModel {
    repo: Arc<NotificationRepository>,
    user_id: Uuid,
    state: Arc<RwLock<NotificationsUiState>>,
}

impl NotificationsViewModel {
    pub fn new(repo: Arc<NotificationRepository>, user_id: Uuid) -> Self {
        Self {
            repo,
            user_id,
            state: Arc::new(RwLock::new(NotificationsUiState::default())),
        }
    }

    pub async fn state(&self) -> NotificationsUiState {
        self.state.read().await.clone()
    }

    pub async fn load_cached(&self) {
        let notifications = self.repo.cached_all(self.user_id).await.unwrap_or_default();
        let unread_count = self
            .repo
            .cached_unread_count(self.user_id)
            .await
            .unwrap_or_default();
        *self.state.write().await = NotificationsUiState {
            loading: false,
            notifications,
            unread_count,
            error: None,
        };
    }

    pub async fn refresh(&self) {
        self.state.write().await.loading = true;

        let envelope = self.repo.fetch(&NotificationFilter::default()).await;
        if envelope.success {
            self.reload_from_cache(None).await;
        } else {
            self.reload_from_cache(Some("Couldn't refresh notifications".to_string()))
                .await;
        }
    }

    pub async fn mark_read(&self, id: Uuid) {
        let envelope = self.repo.mark_read(id).await;
        if envelope.success {
            self.reload_from_cache(None).await;
        } else {
            self.state.write().await.error = Some("Couldn't mark notification read".to_string());
        }
    }

    pub async fn mark_all_read(&self) {
        let envelope = self.repo.mark_all_read(self.user_id).await;
        if envelope.success {
            self.reload_from_cache(None).await;
        } else {
            self.state.write().await.error = Some("Couldn't mark notifications read".to_string());
        }
    }

    pub async fn dismiss(&self, id: Uuid) {
        let envelope = self.repo.delete(id).await;
        if envelope.success {
            self.reload_from_cache(None).await;
        } else {
            self.state.write().await.error = Some("Couldn't dismiss notification".to_string());
        }
    }

    async fn reload_from_cache(&self, error: Option<String>) {
        let notifications = self.repo.cached_all(self.user_id).await.unwrap_or_default();
        let unread_count = self
            .repo
            .cached_unread_count(self.user_id)
            .await
            .unwrap_or_default();
        *self.state.write().await = NotificationsUiState {
            loading: false,
            notifications,
            unread_count,
            error,
        };
    }
}
