use crate::models::notification_type::NotificationType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub notification_type: NotificationType,
    pub content: String,
    pub read: bool,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(user_id: Uuid, notification_type: NotificationType, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            notification_type,
            content,
            read: false,
            created_at: Utc::now(),
        }
    }
}
