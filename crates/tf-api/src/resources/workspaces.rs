use crate::{ApiResult, HttpClient, ItemEnvelope, ListEnvelope};

use tf_core::{User, Workspace};

use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

pub struct WorkspacesApi<'a> {
    http: &'a HttpClient,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkspaceFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateWorkspaceRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateWorkspaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddMemberRequest {
    pub user_id: Uuid,
}

impl<'a> WorkspacesApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List workspaces visible to the current user
    pub async fn list(&self, filter: &WorkspaceFilter) -> ApiResult<ListEnvelope<Workspace>> {
        let req = self
            .http
            .request(Method::GET, "/api/v1/workspaces")
            .query(filter);
        self.http.execute(req).await
    }

    /// Get a workspace by ID
    pub async fn get(&self, id: Uuid) -> ApiResult<ItemEnvelope<Workspace>> {
        let req = self
            .http
            .request(Method::GET, &format!("/api/v1/workspaces/{}", id));
        self.http.execute(req).await
    }

    /// Create a new workspace; the caller becomes its leader
    pub async fn create(
        &self,
        body: &CreateWorkspaceRequest,
    ) -> ApiResult<ItemEnvelope<Workspace>> {
        let req = self
            .http
            .request(Method::POST, "/api/v1/workspaces")
            .json(body);
        self.http.execute(req).await
    }

    /// Update a workspace
    pub async fn update(
        &self,
        id: Uuid,
        body: &UpdateWorkspaceRequest,
    ) -> ApiResult<ItemEnvelope<Workspace>> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/v1/workspaces/{}", id))
            .json(body);
        self.http.execute(req).await
    }

    /// Delete a workspace
    pub async fn delete(&self, id: Uuid) -> ApiResult<ItemEnvelope<Workspace>> {
        let req = self
            .http
            .request(Method::DELETE, &format!("/api/v1/workspaces/{}", id));
        self.http.execute(req).await
    }

    /// List the member profiles of a workspace
    pub async fn members(&self, id: Uuid) -> ApiResult<ListEnvelope<User>> {
        let req = self
            .http
            .request(Method::GET, &format!("/api/v1/workspaces/{}/members", id));
        self.http.execute(req).await
    }

    /// Add a member to a workspace
    pub async fn add_member(
        &self,
        id: Uuid,
        body: &AddMemberRequest,
    ) -> ApiResult<ItemEnvelope<Workspace>> {
        let req = self
            .http
            .request(Method::POST, &format!("/api/v1/workspaces/{}/members", id))
            .json(body);
        self.http.execute(req).await
    }

    /// Remove a member from a workspace
    pub async fn remove_member(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> ApiResult<ItemEnvelope<Workspace>> {
        let req = self.http.request(
            Method::DELETE,
            &format!("/api/v1/workspaces/{}/members/{}", id, user_id),
        );
        self.http.execute(req).await
    }
}
