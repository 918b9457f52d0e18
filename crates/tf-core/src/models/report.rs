use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Daily standup note: one per author per workspace per day by convention
/// (the server owns that rule, the client does not enforce it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub author_id: Uuid,
    pub report_date: NaiveDate,

    // Structured note body
    pub done: String,
    pub planned: String,
    pub blockers: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(
        workspace_id: Uuid,
        author_id: Uuid,
        report_date: NaiveDate,
        done: String,
        planned: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            workspace_id,
            author_id,
            report_date,
            done,
            planned,
            blockers: None,
            created_at: now,
            updated_at: now,
        }
    }
}
