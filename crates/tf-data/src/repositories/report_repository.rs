use std::sync::Arc;

use tf_api::resources::reports::{CreateReportRequest, ReportFilter, UpdateReportRequest};
use tf_api::{ApiClient, ItemEnvelope, ListEnvelope};
use tf_cache::ReportTable;
use tf_core::Report;

use chrono::NaiveDate;
use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ReportRepository {
    api: Arc<ApiClient>,
    table: ReportTable,
}

impl ReportRepository {
    pub fn new(api: Arc<ApiClient>, pool: SqlitePool) -> Self {
        Self {
            api,
            table: ReportTable::new(pool),
        }
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    pub async fn cached_by_workspace(&self, workspace_id: Uuid) -> tf_cache::Result<Vec<Report>> {
        self.table.get_by_workspace(workspace_id).await
    }

    pub async fn cached_by_date(
        &self,
        workspace_id: Uuid,
        date: NaiveDate,
    ) -> tf_cache::Result<Vec<Report>> {
        self.table.get_by_date(workspace_id, date).await
    }

    // =========================================================================
    // Remote operations, mirrored into the cache on success
    // =========================================================================

    pub async fn fetch(&self, workspace_id: Uuid, filter: &ReportFilter) -> ListEnvelope<Report> {
        match self.api.reports().list(workspace_id, filter).await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Report list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn create(&self, body: &CreateReportRequest) -> ItemEnvelope<Report> {
        match self.api.reports().create(body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Report create failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn update(&self, id: Uuid, body: &UpdateReportRequest) -> ItemEnvelope<Report> {
        match self.api.reports().update(id, body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Report update failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> ItemEnvelope<Report> {
        match self.api.reports().delete(id).await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.delete(id).await
                {
                    warn!("Report cache delete failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Report delete failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    async fn mirror(&self, report: Option<&Report>) {
        if let Some(report) = report
            && let Err(e) = self.table.upsert(report).await
        {
            warn!("Report cache write failed: {}", e);
        }
    }

    async fn mirror_all(&self, reports: &[Report]) {
        if let Err(e) = self.table.upsert_all(reports).await {
            warn!("Report cache write failed: {}", e);
        }
    }
}
