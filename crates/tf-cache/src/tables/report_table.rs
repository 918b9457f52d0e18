use crate::Result;
use crate::tables::row::{col_date, col_timestamp, col_uuid};

use tf_core::Report;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const COLUMNS: &str = "id, workspace_id, author_id, report_date, done, planned, blockers, \
                       created_at, updated_at";

pub struct ReportTable {
    pool: SqlitePool,
}

impl ReportTable {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn upsert(&self, report: &Report) -> Result<()> {
        sqlx::query(
            r#"
                INSERT INTO reports (id, workspace_id, author_id, report_date,
                                     done, planned, blockers, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    workspace_id = excluded.workspace_id,
                    author_id = excluded.author_id,
                    report_date = excluded.report_date,
                    done = excluded.done,
                    planned = excluded.planned,
                    blockers = excluded.blockers,
                    created_at = excluded.created_at,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(report.id.to_string())
        .bind(report.workspace_id.to_string())
        .bind(report.author_id.to_string())
        .bind(report.report_date.to_string())
        .bind(&report.done)
        .bind(&report.planned)
        .bind(&report.blockers)
        .bind(report.created_at.timestamp())
        .bind(report.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn upsert_all(&self, reports: &[Report]) -> Result<()> {
        for report in reports {
            self.upsert(report).await?;
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Report>> {
        let row = sqlx::query(&format!("SELECT {} FROM reports WHERE id = ?", COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| map_row(&r)).transpose()
    }

    pub async fn get_by_workspace(&self, workspace_id: Uuid) -> Result<Vec<Report>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM reports WHERE workspace_id = ? ORDER BY report_date DESC",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_by_author(&self, workspace_id: Uuid, author_id: Uuid) -> Result<Vec<Report>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM reports WHERE workspace_id = ? AND author_id = ? \
             ORDER BY report_date DESC",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .bind(author_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn get_by_date(&self, workspace_id: Uuid, date: NaiveDate) -> Result<Vec<Report>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM reports WHERE workspace_id = ? AND report_date = ?",
            COLUMNS
        ))
        .bind(workspace_id.to_string())
        .bind(date.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row).collect()
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM reports WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn clear_workspace(&self, workspace_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM reports WHERE workspace_id = ?")
            .bind(workspace_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_row(row: &SqliteRow) -> Result<Report> {
    Ok(Report {
        id: col_uuid(row, "id")?,
        workspace_id: col_uuid(row, "workspace_id")?,
        author_id: col_uuid(row, "author_id")?,
        report_date: col_date(row, "report_date")?,
        done: row.try_get("done")?,
        planned: row.try_get("planned")?,
        blockers: row.try_get("blockers")?,
        created_at: col_timestamp(row, "created_at")?,
        updated_at: col_timestamp(row, "updated_at")?,
    })
}
