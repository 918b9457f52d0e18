use crate::{ApiResult, HttpClient, ItemEnvelope};

use tf_core::User;

use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

pub struct UsersApi<'a> {
    http: &'a HttpClient,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Get the current user's profile
    pub async fn me(&self) -> ApiResult<ItemEnvelope<User>> {
        let req = self.http.request(Method::GET, "/api/v1/users/me");
        self.http.execute(req).await
    }

    /// Get a user by ID
    pub async fn get(&self, id: Uuid) -> ApiResult<ItemEnvelope<User>> {
        let req = self.http.request(Method::GET, &format!("/api/v1/users/{}", id));
        self.http.execute(req).await
    }

    /// Update the current user's profile
    pub async fn update_me(&self, body: &UpdateProfileRequest) -> ApiResult<ItemEnvelope<User>> {
        let req = self.http.request(Method::PUT, "/api/v1/users/me").json(body);
        self.http.execute(req).await
    }
}
