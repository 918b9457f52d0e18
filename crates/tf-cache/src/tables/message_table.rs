use crate::Result;
use crate::tables::row::{col_timestamp, col_uuid, col_uuid_opt};

use tf_core::Message;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const COLUMNS: &str = "id, channel_id, sender_id, parent_id, content, edited, \
                       created_at, updated_at";

pub struct MessageTable {
    pool: SqlitePool,
}

impl MessageTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, message: &Message) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO messages (id, channel_id, sender_id, parent_id, content, edited,
                                      created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    channel_id = excluded.channel_id,
                    sender_id = excluded.sender_id,
                    parent_id = excluded.parent_id,
                    content = excluded.content,
                    edited = excluded.edited,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(message.id.to_string())
        .bind(message.channel_id.to_string())
        .bind(message.sender_id.to_string())
        .bind(message.parent_id.map(|id| id.to_string()))
        .bind(&message.content)
        .bind(message.edited)
        .bind(message.created_at.timestamp())
        .bind(message.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn upsert_all(&self, messages: &[Message]) -> Result<()> {
        for message in messages {
            self.upsert(message).await?;
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Message>> {
        let row = sqlx::query(&format!("SELECT {} FROM messages WHERE id = ?", COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_row(&r)).transpose()
    }

    /// Top-level messages of a channel, newest first.
    pub async fn get_by_channel(&self, channel_id: Uuid) -> Result<Vec<Message>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM messages WHERE channel_id = ? AND parent_id IS NULL \
             ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(channel_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    /// Replies under one message, oldest first.
    pub async fn get_replies(&self, parent_id: Uuid) -> Result<Vec<Message>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM messages WHERE parent_id = ? ORDER BY created_at",
            COLUMNS
        ))
        .bind(parent_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear_channel(&self, channel_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM messages WHERE channel_id = ?")
            .bind(channel_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_row(row: &SqliteRow) -> Result<Message> {
    Ok(Message {
        id: col_uuid(row, "id")?,
        channel_id: col_uuid(row, "channel_id")?,
        sender_id: col_uuid(row, "sender_id")?,
        parent_id: col_uuid_opt(row, "parent_id")?,
        content: row.try_get("content")?,
        edited: row.try_get("edited")?,
        created_at: col_timestamp(row, "created_at")?,
        updated_at: col_timestamp(row, "updated_at")?,
    })
}
