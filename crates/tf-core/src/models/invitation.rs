use crate::models::invitation_status::InvitationStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub inviter_id: Uuid,
    pub invitee_email: String,
    pub status: InvitationStatus,
    pub responded_at: Option<DateTime<Utc>>,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    pub fn new(workspace_id: Uuid, inviter_id: Uuid, invitee_email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            workspace_id,
            inviter_id,
            invitee_email,
            status: InvitationStatus::Pending,
            responded_at: None,
            created_at: Utc::now(),
        }
    }
}
