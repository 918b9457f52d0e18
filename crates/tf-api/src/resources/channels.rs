use crate::{ApiResult, HttpClient, ItemEnvelope, ListEnvelope};

use tf_core::Channel;

use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

pub struct ChannelsApi<'a> {
    http: &'a HttpClient,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateChannelRequest {
    pub workspace_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChannelRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl<'a> ChannelsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List channels in a workspace
    pub async fn list(&self, workspace_id: Uuid) -> ApiResult<ListEnvelope<Channel>> {
        let req = self.http.request(
            Method::GET,
            &format!("/api/v1/workspaces/{}/channels", workspace_id),
        );
        self.http.execute(req).await
    }

    /// Get a channel by ID
    pub async fn get(&self, id: Uuid) -> ApiResult<ItemEnvelope<Channel>> {
        let req = self
            .http
            .request(Method::GET, &format!("/api/v1/channels/{}", id));
        self.http.execute(req).await
    }

    /// Create a new channel
    pub async fn create(&self, body: &CreateChannelRequest) -> ApiResult<ItemEnvelope<Channel>> {
        let req = self
            .http
            .request(Method::POST, "/api/v1/channels")
            .json(body);
        self.http.execute(req).await
    }

    /// Update a channel
    pub async fn update(
        &self,
        id: Uuid,
        body: &UpdateChannelRequest,
    ) -> ApiResult<ItemEnvelope<Channel>> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/v1/channels/{}", id))
            .json(body);
        self.http.execute(req).await
    }

    /// Delete a channel
    pub async fn delete(&self, id: Uuid) -> ApiResult<ItemEnvelope<Channel>> {
        let req = self
            .http
            .request(Method::DELETE, &format!("/api/v1/channels/{}", id));
        self.http.execute(req).await
    }
}
