use std::sync::Arc;

use tf_api::resources::reports::{CreateReportRequest, ReportFilter, UpdateReportRequest};
use tf_core::Report;
use tf_data::ReportRepository;

use chrono::NaiveDate;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportsUiState {
    pub loading: bool,
    pub workspace_id: Option<Uuid>,
    pub reports: Vec<Report>,
    pub error: Option<String>,
}

/// Backs the daily standup screen.
pub struct ReportsViewModel {
    repo: Arc<ReportRepository>,
    state: Arc<RwLock<ReportsUiState>>,
}

impl ReportsViewModel {
    pub fn new(repo: Arc<ReportRepository>) -> Self {
        Self {
            repo,
            state: Arc::new(RwLock::new(ReportsUiState::default())),
        }
    }

    pub async fn state(&self) -> ReportsUiState {
        self.state.read().await.clone()
    }

    pub async fn load_cached(&self, workspace_id: Uuid, date: Option<NaiveDate>) {
        let reports = match date {
            Some(date) => self
                .repo
                .cached_by_date(workspace_id, date)
                .await
                .unwrap_or_default(),
            None => self
                .repo
                .cached_by_workspace(workspace_id)
                .await
                .unwrap_or_default(),
        };
        *self.state.write().await = ReportsUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            reports,
            error: None,
        };
    }

    pub async fn refresh(&self, workspace_id: Uuid, date: Option<NaiveDate>) {
        self.state.write().await.loading = true;

        let filter = ReportFilter {
            report_date: date,
            ..ReportFilter::default()
        };
        let envelope = self.repo.fetch(workspace_id, &filter).await;
        let (reports, error) = if envelope.success {
            (envelope.data, None)
        } else {
            (
                self.repo
                    .cached_by_workspace(workspace_id)
                    .await
                    .unwrap_or_default(),
                Some("Couldn't refresh reports".to_string()),
            )
        };

        *self.state.write().await = ReportsUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            reports,
            error,
        };
    }

    pub async fn submit(&self, body: CreateReportRequest) {
        let workspace_id = body.workspace_id;
        let envelope = self.repo.create(&body).await;
        if envelope.success {
            self.refresh(workspace_id, None).await;
        } else {
            self.state.write().await.error = Some("Couldn't submit report".to_string());
        }
    }

    pub async fn update(&self, id: Uuid, body: UpdateReportRequest) {
        let envelope = self.repo.update(id, &body).await;
        let workspace_id = self.state.read().await.workspace_id;
        match (envelope.success, workspace_id) {
            (true, Some(workspace_id)) => self.refresh(workspace_id, None).await,
            _ => self.state.write().await.error = Some("Couldn't update report".to_string()),
        }
    }

    pub async fn delete(&self, id: Uuid) {
        let envelope = self.repo.delete(id).await;
        let workspace_id = self.state.read().await.workspace_id;
        match (envelope.success, workspace_id) {
            (true, Some(workspace_id)) => self.refresh(workspace_id, None).await,
            _ => self.state.write().await.error = Some("Couldn't delete report".to_string()),
        }
    }
}
