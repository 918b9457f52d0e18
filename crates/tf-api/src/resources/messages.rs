use crate::{ApiResult, HttpClient, ItemEnvelope, ListEnvelope};

use tf_core::Message;

use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

pub struct MessagesApi<'a> {
    http: &'a HttpClient,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub channel_id: Uuid,
    pub content: String,
    /// Message this one replies to; None posts to the channel top level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditMessageRequest {
    pub content: String,
}

impl<'a> MessagesApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List top-level messages in a channel, newest first
    pub async fn list(
        &self,
        channel_id: Uuid,
        filter: &MessageFilter,
    ) -> ApiResult<ListEnvelope<Message>> {
        let req = self
            .http
            .request(
                Method::GET,
                &format!("/api/v1/channels/{}/messages", channel_id),
            )
            .query(filter);
        self.http.execute(req).await
    }

    /// List the replies under one message, oldest first
    pub async fn replies(&self, id: Uuid) -> ApiResult<ListEnvelope<Message>> {
        let req = self
            .http
            .request(Method::GET, &format!("/api/v1/messages/{}/replies", id));
        self.http.execute(req).await
    }

    /// Send a message
    pub async fn send(&self, body: &SendMessageRequest) -> ApiResult<ItemEnvelope<Message>> {
        let req = self
            .http
            .request(Method::POST, "/api/v1/messages")
            .json(body);
        self.http.execute(req).await
    }

    /// Edit a message's content
    pub async fn edit(&self, id: Uuid, body: &EditMessageRequest) -> ApiResult<ItemEnvelope<Message>> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/v1/messages/{}", id))
            .json(body);
        self.http.execute(req).await
    }

    /// Delete a message
    pub async fn delete(&self, id: Uuid) -> ApiResult<ItemEnvelope<Message>> {
        let req = self
            .http
            .request(Method::DELETE, &format!("/api/v1/messages/{}", id));
        self.http.execute(req).await
    }
}
