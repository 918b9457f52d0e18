use crate::Result;
use crate::tables::row::{col_enum, col_timestamp, col_timestamp_opt, col_uuid, col_uuid_opt};

use tf_core::{Epic, EpicStatus};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const COLUMNS: &str = "id, workspace_id, sprint_id, title, description, status, priority, \
                       assignee_id, start_date, due_date, created_at, updated_at, created_by";

pub struct EpicTable {
    pool: SqlitePool,
}

impl EpicTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, epic: &Epic) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO epics (id, workspace_id, sprint_id, title, description,
                                   status, priority, assignee_id, start_date, due_date,
                                   created_at, updated_at, created_by)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    workspace_id = excluded.workspace_id,
                    sprint_id = excluded.sprint_id,
                    title = excluded.title,
                    description = excluded.description,
                    status = excluded.status,
                    priority = excluded.priority,
                    assignee_id = excluded.assignee_id,
                    start_date = excluded.start_date,
                    due_date = excluded.due_date,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at,
                    created_by = excluded.created_by
            "#,
        )
        .bind(epic.id.to_string())
        .bind(epic.workspace_id.to_string())
        .bind(epic.sprint_id.map(|id| id.to_string()))
        .bind(&epic.title)
        .bind(&epic.description)
        .bind(epic.status.as_str())
        .bind(epic.priority.as_str())
        .bind(epic.assignee_id.map(|id| id.to_string()))
        .bind(epic.start_date.map(|dt| dt.timestamp()))
        .bind(epic.due_date.map(|dt| dt.timestamp()))
        .bind(epic.created_at.timestamp())
        .bind(epic.updated_at.timestamp())
        .bind(epic.created_by.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn upsert_all(&self, epics: &[Epic]) -> Result<()> {
        for epic in epics {
            self.upsert(epic).await?;
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Epic>> {
        let row = sqlx::query(&format!("SELECT {} FROM epics WHERE id = ?", COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_row(&r)).transpose()
    }

    pub async fn get_by_workspace(&self, workspace_id: Uuid) -> Result<Vec<Epic>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM epics WHERE workspace_id = ? ORDER BY updated_at DESC",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_by_sprint(&self, sprint_id: Uuid) -> Result<Vec<Epic>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM epics WHERE sprint_id = ? ORDER BY updated_at DESC",
            COLUMNS
        ))
        .bind(sprint_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_by_status(
        &self,
        workspace_id: Uuid,
        status: &EpicStatus,
    ) -> Result<Vec<Epic>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM epics WHERE workspace_id = ? AND status = ? ORDER BY updated_at DESC",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM epics WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear_workspace(&self, workspace_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM epics WHERE workspace_id = ?")
            .bind(workspace_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_row(row: &SqliteRow) -> Result<Epic> {
    Ok(Epic {
        id: col_uuid(row, "id")?,
        workspace_id: col_uuid(row, "workspace_id")?,
        sprint_id: col_uuid_opt(row, "sprint_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: col_enum(row, "status")?,
        priority: col_enum(row, "priority")?,
        assignee_id: col_uuid_opt(row, "assignee_id")?,
        start_date: col_timestamp_opt(row, "start_date")?,
        due_date: col_timestamp_opt(row, "due_date")?,
        created_at: col_timestamp(row, "created_at")?,
        updated_at: col_timestamp(row, "updated_at")?,
        created_by: col_uuid(row, "created_by")?,
    })
}
