use crate::{ApiResult, ClientError};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;

/// Shared HTTP transport for all resource clients.
///
/// Attaches the bearer token when a session exists, or the X-User-Id header
/// for unauthenticated/dev use, and turns non-2xx responses carrying
/// `{ "error": { code, message } }` bodies into typed errors.
pub struct HttpClient {
    base_url: String,
    token: Option<String>,
    user_id: Option<String>,
    client: ReqwestClient,
}

impl HttpClient {
    #[track_caller]
    pub fn new(
        base_url: &str,
        timeout: Duration,
        token: Option<&str>,
        user_id: Option<&str>,
    ) -> ApiResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Build {
                message: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            user_id: user_id.map(String::from),
            client,
        })
    }

    /// Build a request with credential headers attached
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        if let Some(ref user_id) = self.user_id {
            req = req.header("X-User-Id", user_id);
        }

        req
    }

    /// Execute request, map error bodies, deserialize the success body
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ApiResult<T> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_from_body(status, &body));
        }

        Ok(response.json::<T>().await?)
    }

    /// Parse `{ "error": { code, message } }`; fall back to the raw status
    /// when the body is not the expected shape.
    #[track_caller]
    fn error_from_body(status: reqwest::StatusCode, body: &str) -> ClientError {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
            && let Some(error) = value.get("error")
        {
            let code = error
                .get("code")
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return ClientError::Api {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            };
        }

        ClientError::Api {
            code: status.as_str().to_string(),
            message: format!("HTTP {}", status),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
