use crate::{ApiResult, HttpClient, ItemEnvelope, ListEnvelope};

use tf_core::Report;

use chrono::NaiveDate;
use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

pub struct ReportsApi<'a> {
    http: &'a HttpClient,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateReportRequest {
    pub workspace_id: Uuid,
    pub report_date: NaiveDate,
    pub done: String,
    pub planned: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockers: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateReportRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockers: Option<String>,
}

impl<'a> ReportsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List daily reports in a workspace
    pub async fn list(
        &self,
        workspace_id: Uuid,
        filter: &ReportFilter,
    ) -> ApiResult<ListEnvelope<Report>> {
        let req = self
            .http
            .request(
                Method::GET,
                &format!("/api/v1/workspaces/{}/reports", workspace_id),
            )
            .query(filter);
        self.http.execute(req).await
    }

    /// Get a report by ID
    pub async fn get(&self, id: Uuid) -> ApiResult<ItemEnvelope<Report>> {
        let req = self
            .http
            .request(Method::GET, &format!("/api/v1/reports/{}", id));
        self.http.execute(req).await
    }

    /// Submit a daily report
    pub async fn create(&self, body: &CreateReportRequest) -> ApiResult<ItemEnvelope<Report>> {
        let req = self.http.request(Method::POST, "/api/v1/reports").json(body);
        self.http.execute(req).await
    }

    /// Update a report
    pub async fn update(
        &self,
        id: Uuid,
        body: &UpdateReportRequest,
    ) -> ApiResult<ItemEnvelope<Report>> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/v1/reports/{}", id))
            .json(body);
        self.http.execute(req).await
    }

    /// Delete a report
    pub async fn delete(&self, id: Uuid) -> ApiResult<ItemEnvelope<Report>> {
        let req = self
            .http
            .request(Method::DELETE, &format!("/api/v1/reports/{}", id));
        self.http.execute(req).await
    }
}
