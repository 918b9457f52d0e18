use crate::models::epic_status::EpicStatus;
use crate::models::priority::Priority;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Large unit of work grouping multiple tasks within a workspace, optionally
/// scheduled into a sprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Epic {
    pub id: Uuid,

    // Hierarchy
    pub workspace_id: Uuid,
    pub sprint_id: Option<Uuid>,

    // Core fields
    pub title: String,
    pub description: Option<String>,

    // Workflow
    pub status: EpicStatus,
    pub priority: Priority,

    // Assignment
    pub assignee_id: Option<Uuid>,

    // Schedule
    pub start_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
}

impl Epic {
    pub fn new(
        workspace_id: Uuid,
        title: String,
        description: Option<String>,
        created_by: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            workspace_id,
            sprint_id: None,
            title,
            description,
            status: EpicStatus::Planned,
            priority: Priority::Medium,
            assignee_id: None,
            start_date: None,
            due_date: None,
            created_at: now,
            updated_at: now,
            created_by,
        }
    }
}
