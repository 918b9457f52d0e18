use crate::{ApiResult, HttpClient, ItemEnvelope};

use tf_core::Session;

use reqwest::Method;
use serde::Serialize;

pub struct AuthApi<'a> {
    http: &'a HttpClient,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Exchange credentials for a session token
    pub async fn login(&self, body: &LoginRequest) -> ApiResult<ItemEnvelope<Session>> {
        let req = self
            .http
            .request(Method::POST, "/api/v1/auth/login")
            .json(body);
        self.http.execute(req).await
    }

    /// Create an account and log in
    pub async fn register(&self, body: &RegisterRequest) -> ApiResult<ItemEnvelope<Session>> {
        let req = self
            .http
            .request(Method::POST, "/api/v1/auth/register")
            .json(body);
        self.http.execute(req).await
    }
}
