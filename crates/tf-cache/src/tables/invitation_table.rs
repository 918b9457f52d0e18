use crate::Result;
use crate::tables::row::{col_enum, col_timestamp, col_timestamp_opt, col_uuid};

use tf_core::{Invitation, InvitationStatus};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const COLUMNS: &str = "id, workspace_id, inviter_id, invitee_email, status, responded_at, \
                       created_at";

pub struct InvitationTable {
    pool: SqlitePool,
}

impl InvitationTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, invitation: &Invitation) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO invitations (id, workspace_id, inviter_id, invitee_email,
                                         status, responded_at, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    workspace_id = excluded.workspace_id,
                    inviter_id = excluded.inviter_id,
                    invitee_email = excluded.invitee_email,
                    status = excluded.status,
                    responded_at = excluded.responded_at,
                    created_at = excluded.created_at
            "#,
        )
        .bind(invitation.id.to_string())
        .bind(invitation.workspace_id.to_string())
        .bind(invitation.inviter_id.to_string())
        .bind(&invitation.invitee_email)
        .bind(invitation.status.as_str())
        .bind(invitation.responded_at.map(|dt| dt.timestamp()))
        .bind(invitation.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn upsert_all(&self, invitations: &[Invitation]) -> Result<()> {
        for invitation in invitations {
            self.upsert(invitation).await?;
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Invitation>> {
        let row = sqlx::query(&format!("SELECT {} FROM invitations WHERE id = ?", COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_row(&r)).transpose()
    }

    pub async fn get_all(&self) -> Result<Vec<Invitation>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM invitations ORDER BY created_at DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_by_workspace(&self, workspace_id: Uuid) -> Result<Vec<Invitation>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM invitations WHERE workspace_id = ? ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_pending(&self, workspace_id: Uuid) -> Result<Vec<Invitation>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM invitations WHERE workspace_id = ? AND status = ? \
             ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .bind(InvitationStatus::Pending.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM invitations WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear_workspace(&self, workspace_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM invitations WHERE workspace_id = ?")
            .bind(workspace_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_row(row: &SqliteRow) -> Result<Invitation> {
    Ok(Invitation {
        id: col_uuid(row, "id")?,
        workspace_id: col_uuid(row, "workspace_id")?,
        inviter_id: col_uuid(row, "inviter_id")?,
        invitee_email: row.try_get("invitee_email")?,
        status: col_enum(row, "status")?,
        responded_at: col_timestamp_opt(row, "responded_at")?,
        created_at: col_timestamp(row, "created_at")?,
    })
}
