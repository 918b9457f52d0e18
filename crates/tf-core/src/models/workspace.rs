use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-level collaboration container owning members, channels, epics and
/// tasks. `members` carries the user ids the server returns; the leader is
/// always one of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub leader_id: Uuid,
    #[serde(default)]
    pub members: Vec<Uuid>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    pub fn new(name: String, description: Option<String>, leader_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            leader_id,
            members: vec![leader_id],
            created_at: now,
            updated_at: now,
        }
    }
}
