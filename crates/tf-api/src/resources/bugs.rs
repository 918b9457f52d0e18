use crate::{ApiResult, HttpClient, ItemEnvelope, ListEnvelope};

use tf_core::{Bug, BugSeverity, BugStatus};

use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

pub struct BugsApi<'a> {
    http: &'a HttpClient,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BugFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BugStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<BugSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateBugRequest {
    pub workspace_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<BugSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Uuid>,
}

impl CreateBugRequest {
    pub fn new(workspace_id: Uuid, title: String) -> Self {
        Self {
            workspace_id,
            title,
            description: None,
            task_id: None,
            severity: None,
            assignee_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBugRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BugStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<BugSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<Uuid>,
}

impl<'a> BugsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List bugs in a workspace
    pub async fn list(
        &self,
        workspace_id: Uuid,
        filter: &BugFilter,
    ) -> ApiResult<ListEnvelope<Bug>> {
        let req = self
            .http
            .request(
                Method::GET,
                &format!("/api/v1/workspaces/{}/bugs", workspace_id),
            )
            .query(filter);
        self.http.execute(req).await
    }

    /// Get a bug by ID
    pub async fn get(&self, id: Uuid) -> ApiResult<ItemEnvelope<Bug>> {
        let req = self.http.request(Method::GET, &format!("/api/v1/bugs/{}", id));
        self.http.execute(req).await
    }

    /// Create a new bug
    pub async fn create(&self, body: &CreateBugRequest) -> ApiResult<ItemEnvelope<Bug>> {
        let req = self.http.request(Method::POST, "/api/v1/bugs").json(body);
        self.http.execute(req).await
    }

    /// Update a bug
    pub async fn update(&self, id: Uuid, body: &UpdateBugRequest) -> ApiResult<ItemEnvelope<Bug>> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/v1/bugs/{}", id))
            .json(body);
        self.http.execute(req).await
    }

    /// Delete a bug
    pub async fn delete(&self, id: Uuid) -> ApiResult<ItemEnvelope<Bug>> {
        let req = self
            .http
            .request(Method::DELETE, &format!("/api/v1/bugs/{}", id));
        self.http.execute(req).await
    }
}
