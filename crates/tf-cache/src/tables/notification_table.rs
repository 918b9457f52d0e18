use crate::Result;
use crate::tables::row::{col_enum, col_timestamp, col_uuid};

use tf_core::Notification;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const COLUMNS: &str = "id, user_id, notification_type, content, read, created_at";

pub struct NotificationTable {
    pool: SqlitePool,
}

impl NotificationTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, notification: &Notification) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO notifications (id, user_id, notification_type, content, read, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    user_id = excluded.user_id,
                    notification_type = excluded.notification_type,
                    content = excluded.content,
                    read = excluded.read,
                    created_at = excluded.created_at
            "#,
        )
        .bind(notification.id.to_string())
        .bind(notification.user_id.to_string())
        .bind(notification.notification_type.as_str())
        .bind(&notification.content)
        .bind(notification.read)
        .bind(notification.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn upsert_all(&self, notifications: &[Notification]) -> Result<()> {
        for notification in notifications {
            self.upsert(notification).await?;
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Notification>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM notifications WHERE id = ?",
            COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_row(&r)).transpose()
    }

    pub async fn get_all(&self, user_id: Uuid) -> Result<Vec<Notification>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM notifications WHERE user_id = ? ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_unread(&self, user_id: Uuid) -> Result<Vec<Notification>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM notifications WHERE user_id = ? AND read = 0 \
             ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn unread_count(&self, user_id: Uuid) -> Result<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS unread FROM notifications WHERE user_id = ? AND read = 0",
        )
        .bind(user_id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.try_get("unread")?)
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<()> {
        sqlx::query("UPDATE notifications SET read = 1 WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE notifications SET read = 1 WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM notifications WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear_user(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM notifications WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_row(row: &SqliteRow) -> Result<Notification> {
    Ok(Notification {
        id: col_uuid(row, "id")?,
        user_id: col_uuid(row, "user_id")?,
        notification_type: col_enum(row, "notification_type")?,
        content: row.try_get("content")?,
        read: row.try_get("read")?,
        created_at: col_timestamp(row, "created_at")?,
    })
}
