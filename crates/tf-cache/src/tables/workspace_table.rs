use crate::Result;
use crate::tables::row::{col_timestamp, col_uuid};

use tf_core::Workspace;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const COLUMNS: &str = "id, name, description, leader_id, created_at, updated_at";

pub struct WorkspaceTable {
    pool: SqlitePool,
}

impl WorkspaceTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or overwrite a workspace row and replace its member rows.
    pub async fn upsert(&self, workspace: &Workspace) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO workspaces (id, name, description, leader_id, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    description = excluded.description,
                    leader_id = excluded.leader_id,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(workspace.id.to_string())
        .bind(&workspace.name)
        .bind(&workspace.description)
        .bind(workspace.leader_id.to_string())
        .bind(workspace.created_at.timestamp())
        .bind(workspace.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        self.replace_members(workspace.id, &workspace.members).await
    }

    pub async fn upsert_all(&self, workspaces: &[Workspace]) -> Result<()> {
        for workspace in workspaces {
            self.upsert(workspace).await?;
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Workspace>> {
        let row = sqlx::query(&format!("SELECT {} FROM workspaces WHERE id = ?", COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => {
                let mut workspace = map_row(&r)?;
                workspace.members = self.members(workspace.id).await?;
                Ok(Some(workspace))
            }
            None => Ok(None),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Workspace>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM workspaces ORDER BY name",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        let mut workspaces = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut workspace = map_row(row)?;
            workspace.members = self.members(workspace.id).await?;
            workspaces.push(workspace);
        }

        Ok(workspaces)
    }

    /// Member ids of one workspace.
    pub async fn members(&self, workspace_id: Uuid) -> Result<Vec<Uuid>> {
        let rows = sqlx::query("SELECT user_id FROM workspace_members WHERE workspace_id = ?")
            .bind(workspace_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(|r| col_uuid(r, "user_id")).collect()
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        // Member rows cascade
        sqlx::query("DELETE FROM workspaces WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM workspaces")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn replace_members(&self, workspace_id: Uuid, members: &[Uuid]) -> Result<()> {
        sqlx::query("DELETE FROM workspace_members WHERE workspace_id = ?")
            .bind(workspace_id.to_string())
            .execute(&self.pool)
            .await?;

        for user_id in members {
            sqlx::query("INSERT INTO workspace_members (workspace_id, user_id) VALUES (?, ?)")
                .bind(workspace_id.to_string())
                .bind(user_id.to_string())
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }
}

fn map_row(row: &SqliteRow) -> Result<Workspace> {
    Ok(Workspace {
        id: col_uuid(row, "id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        leader_id: col_uuid(row, "leader_id")?,
        members: Vec::new(),
        created_at: col_timestamp(row, "created_at")?,
        updated_at: col_timestamp(row, "updated_at")?,
    })
}
