use crate::{ApiResult, HttpClient, ItemEnvelope, ListEnvelope};

use tf_core::{Epic, EpicStatus, Priority};

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

pub struct EpicsApi<'a> {
    http: &'a HttpClient,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EpicFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EpicStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateEpicRequest {
    pub workspace_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl CreateEpicRequest {
    pub fn new(workspace_id: Uuid, title: String) -> Self {
        Self {
            workspace_id,
            title,
            description: None,
            sprint_id: None,
            priority: None,
            assignee_id: None,
            start_date: None,
            due_date: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEpicRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EpicStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl<'a> EpicsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List epics in a workspace
    pub async fn list(
        &self,
        workspace_id: Uuid,
        filter: &EpicFilter,
    ) -> ApiResult<ListEnvelope<Epic>> {
        let req = self
            .http
            .request(
                Method::GET,
                &format!("/api/v1/workspaces/{}/epics", workspace_id),
            )
            .query(filter);
        self.http.execute(req).await
    }

    /// Get an epic by ID
    pub async fn get(&self, id: Uuid) -> ApiResult<ItemEnvelope<Epic>> {
        let req = self.http.request(Method::GET, &format!("/api/v1/epics/{}", id));
        self.http.execute(req).await
    }

    /// Create a new epic
    pub async fn create(&self, body: &CreateEpicRequest) -> ApiResult<ItemEnvelope<Epic>> {
        let req = self.http.request(Method::POST, "/api/v1/epics").json(body);
        self.http.execute(req).await
    }

    /// Update an epic
    pub async fn update(
        &self,
        id: Uuid,
        body: &UpdateEpicRequest,
    ) -> ApiResult<ItemEnvelope<Epic>> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/v1/epics/{}", id))
            .json(body);
        self.http.execute(req).await
    }

    /// Delete an epic
    pub async fn delete(&self, id: Uuid) -> ApiResult<ItemEnvelope<Epic>> {
        let req = self
            .http
            .request(Method::DELETE, &format!("/api/v1/epics/{}", id));
        self.http.execute(req).await
    }
}
