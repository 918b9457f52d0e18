use crate::models::bug_severity::BugSeverity;
use crate::models::bug_status::BugStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Defect report, optionally attached to the task it was found in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bug {
    pub id: Uuid,

    // Hierarchy
    pub workspace_id: Uuid,
    pub task_id: Option<Uuid>,

    // Core fields
    pub title: String,
    pub description: Option<String>,

    // Workflow
    pub status: BugStatus,
    pub severity: BugSeverity,

    // Assignment
    pub assignee_id: Option<Uuid>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
}

impl Bug {
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
            task_id: None,
            title,
            description,
            status: BugStatus::Open,
            severity: BugSeverity::Minor,
            assignee_id: None,
            created_at: now,
            updated_at: now,
            created_by,
        }
    }
}
