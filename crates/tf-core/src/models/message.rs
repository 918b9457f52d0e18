use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Channel message. `parent_id` points at the message this one replies to;
/// top-level messages carry `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub channel_id: Uuid,
    pub sender_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
    pub edited: bool,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    pub fn new(channel_id: Uuid, sender_id: Uuid, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            channel_id,
            sender_id,
            parent_id: None,
            content,
            edited: false,
            created_at: now,
            updated_at: now,
        }
    }
}
