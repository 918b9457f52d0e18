use crate::Result;
use crate::tables::row::{col_enum, col_timestamp, col_timestamp_opt, col_uuid, col_uuid_opt};

use tf_core::{Task, TaskStatus};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const COLUMNS: &str = "id, workspace_id, epic_id, sprint_id, title, description, \
                       status, priority, assignee_id, due_date, \
                       created_at, updated_at, created_by";

pub struct TaskTable {
    pool: SqlitePool,
}

impl TaskTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or overwrite the cached copy of a task.
    pub async fn upsert(&self, task: &Task) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO tasks (id, workspace_id, epic_id, sprint_id, title, description,
                                   status, priority, assignee_id, due_date,
                                   created_at, updated_at, created_by)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    workspace_id = excluded.workspace_id,
                    epic_id = excluded.epic_id,
                    sprint_id = excluded.sprint_id,
                    title = excluded.title,
                    description = excluded.description,
                    status = excluded.status,
                    priority = excluded.priority,
                    assignee_id = excluded.assignee_id,
                    due_date = excluded.due_date,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at,
                    created_by = excluded.created_by
            "#,
        )
        .bind(task.id.to_string())
        .bind(task.workspace_id.to_string())
        .bind(task.epic_id.map(|id| id.to_string()))
        .bind(task.sprint_id.map(|id| id.to_string()))
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(task.assignee_id.map(|id| id.to_string()))
        .bind(task.due_date.map(|dt| dt.timestamp()))
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp())
        .bind(task.created_by.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn upsert_all(&self, tasks: &[Task]) -> Result<()> {
        for task in tasks {
            self.upsert(task).await?;
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        let row = sqlx::query(&format!("SELECT {} FROM tasks WHERE id = ?", COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_row(&r)).transpose()
    }

    pub async fn get_by_workspace(&self, workspace_id: Uuid) -> Result<Vec<Task>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM tasks WHERE workspace_id = ? ORDER BY updated_at DESC",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_by_epic(&self, epic_id: Uuid) -> Result<Vec<Task>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM tasks WHERE epic_id = ? ORDER BY updated_at DESC",
            COLUMNS
        ))
        .bind(epic_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_by_sprint(&self, sprint_id: Uuid) -> Result<Vec<Task>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM tasks WHERE sprint_id = ? ORDER BY updated_at DESC",
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
        status: &TaskStatus,
    ) -> Result<Vec<Task>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM tasks WHERE workspace_id = ? AND status = ? ORDER BY updated_at DESC",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear_workspace(&self, workspace_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM tasks WHERE workspace_id = ?")
            .bind(workspace_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_row(row: &SqliteRow) -> Result<Task> {
    Ok(Task {
        id: col_uuid(row, "id")?,
        workspace_id: col_uuid(row, "workspace_id")?,
        epic_id: col_uuid_opt(row, "epic_id")?,
        sprint_id: col_uuid_opt(row, "sprint_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: col_enum(row, "status")?,
        priority: col_enum(row, "priority")?,
        assignee_id: col_uuid_opt(row, "assignee_id")?,
        due_date: col_timestamp_opt(row, "due_date")?,
        created_at: col_timestamp(row, "created_at")?,
        updated_at: col_timestamp(row, "updated_at")?,
        created_by: col_uuid(row, "created_by")?,
    })
}
