use crate::{ApiResult, HttpClient, ItemEnvelope, ListEnvelope};

use tf_core::{Sprint, SprintStatus};

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

pub struct SprintsApi<'a> {
    http: &'a HttpClient,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SprintFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SprintStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSprintRequest {
    pub workspace_id: Uuid,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSprintRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SprintStatus>,
}

impl<'a> SprintsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List sprints in a workspace
    pub async fn list(
        &self,
        workspace_id: Uuid,
        filter: &SprintFilter,
    ) -> ApiResult<ListEnvelope<Sprint>> {
        let req = self
            .http
            .request(
                Method::GET,
                &format!("/api/v1/workspaces/{}/sprints", workspace_id),
            )
            .query(filter);
        self.http.execute(req).await
    }

    /// Get a sprint by ID
    pub async fn get(&self, id: Uuid) -> ApiResult<ItemEnvelope<Sprint>> {
        let req = self
            .http
            .request(Method::GET, &format!("/api/v1/sprints/{}", id));
        self.http.execute(req).await
    }

    /// Create a new sprint
    pub async fn create(&self, body: &CreateSprintRequest) -> ApiResult<ItemEnvelope<Sprint>> {
        let req = self.http.request(Method::POST, "/api/v1/sprints").json(body);
        self.http.execute(req).await
    }

    /// Update a sprint
    pub async fn update(
        &self,
        id: Uuid,
        body: &UpdateSprintRequest,
    ) -> ApiResult<ItemEnvelope<Sprint>> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/v1/sprints/{}", id))
            .json(body);
        self.http.execute(req).await
    }

    /// Delete a sprint
    pub async fn delete(&self, id: Uuid) -> ApiResult<ItemEnvelope<Sprint>> {
        let req = self
            .http
            .request(Method::DELETE, &format!("/api/v1/sprints/{}", id));
        self.http.execute(req).await
    }
}
