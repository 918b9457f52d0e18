use crate::Result;
use crate::tables::row::{col_enum, col_timestamp, col_uuid};

use tf_core::{Sprint, SprintStatus};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const COLUMNS: &str = "id, workspace_id, name, goal, start_date, end_date, status, \
                       created_at, updated_at";

pub struct SprintTable {
    pool: SqlitePool,
}

impl SprintTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, sprint: &Sprint) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO sprints (id, workspace_id, name, goal,
                                     start_date, end_date, status,
                                     created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    workspace_id = excluded.workspace_id,
                    name = excluded.name,
                    goal = excluded.goal,
                    start_date = excluded.start_date,
                    end_date = excluded.end_date,
                    status = excluded.status,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(sprint.id.to_string())
        .bind(sprint.workspace_id.to_string())
        .bind(&sprint.name)
        .bind(&sprint.goal)
        .bind(sprint.start_date.timestamp())
        .bind(sprint.end_date.timestamp())
        .bind(sprint.status.as_str())
        .bind(sprint.created_at.timestamp())
        .bind(sprint.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn upsert_all(&self, sprints: &[Sprint]) -> Result<()> {
        for sprint in sprints {
            self.upsert(sprint).await?;
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Sprint>> {
        let row = sqlx::query(&format!("SELECT {} FROM sprints WHERE id = ?", COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_row(&r)).transpose()
    }

    pub async fn get_by_workspace(&self, workspace_id: Uuid) -> Result<Vec<Sprint>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sprints WHERE workspace_id = ? ORDER BY start_date DESC",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_active(&self, workspace_id: Uuid) -> Result<Option<Sprint>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM sprints WHERE workspace_id = ? AND status = ?",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .bind(SprintStatus::Active.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_row(&r)).transpose()
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM sprints WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear_workspace(&self, workspace_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM sprints WHERE workspace_id = ?")
            .bind(workspace_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_row(row: &SqliteRow) -> Result<Sprint> {
    Ok(Sprint {
        id: col_uuid(row, "id")?,
        workspace_id: col_uuid(row, "workspace_id")?,
        name: row.try_get("name")?,
        goal: row.try_get("goal")?,
        start_date: col_timestamp(row, "start_date")?,
        end_date: col_timestamp(row, "end_date")?,
        status: col_enum(row, "status")?,
        created_at: col_timestamp(row, "created_at")?,
        updated_at: col_timestamp(row, "updated_at")?,
    })
}
