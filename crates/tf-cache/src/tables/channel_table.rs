use crate::Result;
use crate::tables::row::{col_timestamp, col_uuid};

use tf_core::Channel;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const COLUMNS: &str = "id, workspace_id, name, description, direct, \
                       created_at, updated_at, created_by";

pub struct ChannelTable {
    pool: SqlitePool,
}

impl ChannelTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, channel: &Channel) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO channels (id, workspace_id, name, description, direct,
                                      created_at, updated_at, created_by)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    workspace_id = excluded.workspace_id,
                    name = excluded.name,
                    description = excluded.description,
                    direct = excluded.direct,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at,
                    created_by = excluded.created_by
            "#,
        )
        .bind(channel.id.to_string())
        .bind(channel.workspace_id.to_string())
        .bind(&channel.name)
        .bind(&channel.description)
        .bind(channel.direct)
        .bind(channel.created_at.timestamp())
        .bind(channel.updated_at.timestamp())
        .bind(channel.created_by.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn upsert_all(&self, channels: &[Channel]) -> Result<()> {
        for channel in channels {
            self.upsert(channel).await?;
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Channel>> {
        let row = sqlx::query(&format!("SELECT {} FROM channels WHERE id = ?", COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_row(&r)).transpose()
    }

    pub async fn get_by_workspace(&self, workspace_id: Uuid) -> Result<Vec<Channel>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM channels WHERE workspace_id = ? ORDER BY name",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM channels WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear_workspace(&self, workspace_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM channels WHERE workspace_id = ?")
            .bind(workspace_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_row(row: &SqliteRow) -> Result<Channel> {
    Ok(Channel {
        id: col_uuid(row, "id")?,
        workspace_id: col_uuid(row, "workspace_id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        direct: row.try_get("direct")?,
        created_at: col_timestamp(row, "created_at")?,
        updated_at: col_timestamp(row, "updated_at")?,
        created_by: col_uuid(row, "created_by")?,
    })
}
