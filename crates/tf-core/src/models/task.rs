use crate::models::priority::Priority;
use crate::models::task_status::TaskStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,

    // Hierarchy
    pub workspace_id: Uuid,
    pub epic_id: Option<Uuid>,
    pub sprint_id: Option<Uuid>,

    // Core fields
    pub title: String,
    pub description: Option<String>,

    // Workflow
    pub status: TaskStatus,
    pub priority: Priority,

    // Assignment
    pub assignee_id: Option<Uuid>,
    pub due_date: Option<DateTime<Utc>>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
}

impl Task {
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
            epic_id: None,
            sprint_id: None,
            title,
            description,
            status: TaskStatus::Backlog,
            priority: Priority::Medium,
            assignee_id: None,
            due_date: None,
            created_at: now,
            updated_at: now,
            created_by,
        }
    }
}
