use crate::Result;
use crate::tables::row::{col_enum, col_timestamp, col_uuid, col_uuid_opt};

use tf_core::{Bug, BugStatus};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const COLUMNS: &str = "id, workspace_id, task_id, title, description, status, severity, \
                       assignee_id, created_at, updated_at, created_by";

pub struct BugTable {
    pool: SqlitePool,
}

impl BugTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, bug: &Bug) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO bugs (id, workspace_id, task_id, title, description,
                                  status, severity, assignee_id,
                                  created_at, updated_at, created_by)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    workspace_id = excluded.workspace_id,
                    task_id = excluded.task_id,
                    title = excluded.title,
                    description = excluded.description,
                    status = excluded.status,
                    severity = excluded.severity,
                    assignee_id = excluded.assignee_id,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at,
                    created_by = excluded.created_by
            "#,
        )
        .bind(bug.id.to_string())
        .bind(bug.workspace_id.to_string())
        .bind(bug.task_id.map(|id| id.to_string()))
        .bind(&bug.title)
        .bind(&bug.description)
        .bind(bug.status.as_str())
        .bind(bug.severity.as_str())
        .bind(bug.assignee_id.map(|id| id.to_string()))
        .bind(bug.created_at.timestamp())
        .bind(bug.updated_at.timestamp())
        .bind(bug.created_by.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn upsert_all(&self, bugs: &[Bug]) -> Result<()> {
        for bug in bugs {
            self.upsert(bug).await?;
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Bug>> {
        let row = sqlx::query(&format!("SELECT {} FROM bugs WHERE id = ?", COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_row(&r)).transpose()
    }

    pub async fn get_by_workspace(&self, workspace_id: Uuid) -> Result<Vec<Bug>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM bugs WHERE workspace_id = ? ORDER BY updated_at DESC",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_by_task(&self, task_id: Uuid) -> Result<Vec<Bug>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM bugs WHERE task_id = ? ORDER BY updated_at DESC",
            COLUMNS
        ))
        .bind(task_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_by_status(&self, workspace_id: Uuid, status: &BugStatus) -> Result<Vec<Bug>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM bugs WHERE workspace_id = ? AND status = ? ORDER BY updated_at DESC",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM bugs WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear_workspace(&self, workspace_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM bugs WHERE workspace_id = ?")
            .bind(workspace_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_row(row: &SqliteRow) -> Result<Bug> {
    Ok(Bug {
        id: col_uuid(row, "id")?,
        workspace_id: col_uuid(row, "workspace_id")?,
        task_id: col_uuid_opt(row, "task_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: col_enum(row, "status")?,
        severity: col_enum(row, "severity")?,
        assignee_id: col_uuid_opt(row, "assignee_id")?,
        created_at: col_timestamp(row, "created_at")?,
        updated_at: col_timestamp(row, "updated_at")?,
        created_by: col_uuid(row, "created_by")?,
    })
}
