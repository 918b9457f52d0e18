use crate::{ApiResult, HttpClient, ItemEnvelope, ListEnvelope};

use tf_core::Notification;

use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

pub struct NotificationsApi<'a> {
    http: &'a HttpClient,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationFilter {
    /// When true, only unread notifications are returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl<'a> NotificationsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List the current user's notifications
    pub async fn list(
        &self,
        filter: &NotificationFilter,
    ) -> ApiResult<ListEnvelope<Notification>> {
        let req = self
            .http
            .request(Method::GET, "/api/v1/notifications")
            .query(filter);
        self.http.execute(req).await
    }

    /// Mark one notification as read
    pub async fn mark_read(&self, id: Uuid) -> ApiResult<ItemEnvelope<Notification>> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/v1/notifications/{}/read", id));
        self.http.execute(req).await
    }

    /// Mark every notification of the current user as read
    pub async fn mark_all_read(&self) -> ApiResult<ListEnvelope<Notification>> {
        let req = self
            .http
            .request(Method::PUT, "/api/v1/notifications/read-all");
        self.http.execute(req).await
    }

    /// Delete a notification
    pub async fn delete(&self, id: Uuid) -> ApiResult<ItemEnvelope<Notification>> {
        let req = self
            .http
            .request(Method::DELETE, &format!("/api/v1/notifications/{}", id));
        self.http.execute(req).await
    }
}
