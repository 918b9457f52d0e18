mod common;

use std::sync::Arc;

use common::{USER, create_test_pool, user_json};

use tf_config::{Config, SessionFile};
use tf_data::UserRepository;
use tf_state::SessionViewModel;

use googletest::prelude::*;
use serde_json::json;
use serial_test::serial;
use std::time::Duration;
use tempfile::TempDir;
use tf_api::ApiClient;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct ConfigDirGuard {
    _temp: TempDir,
    original: Option<String>,
}

impl ConfigDirGuard {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let original = std::env::var("TF_CONFIG_DIR").ok();
        unsafe {
            std::env::set_var("TF_CONFIG_DIR", temp.path());
        }
        Self {
            _temp: temp,
            original,
        }
    }

    fn path(&self) -> &std::path::Path {
        self._temp.path()
    }
}

impl Drop for ConfigDirGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => std::env::set_var("TF_CONFIG_DIR", val),
                None => std::env::remove_var("TF_CONFIG_DIR"),
            }
        }
    }
}

async fn create_viewmodel(server: &MockServer) -> SessionViewModel {
    let client = Arc::new(
        ApiClient::new(&server.uri(), Duration::from_secs(5), None, Some(USER)).unwrap(),
    );
    let users = Arc::new(UserRepository::new(client.clone(), create_test_pool().await));
    SessionViewModel::new(client, users, Config::load().unwrap())
}

#[tokio::test]
#[serial]
async fn given_valid_credentials_when_logging_in_then_session_file_written() {
    // Given
    let guard = ConfigDirGuard::new();
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_string_contains("dev@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "tok-xyz",
                "user": user_json(USER, "dev")
            }
        })))
        .mount(&mock_server)
        .await;

    let viewmodel = create_viewmodel(&mock_server).await;

    // When
    viewmodel
        .login("dev@example.com".to_string(), "hunter2".to_string())
        .await;

    // Then: State is authenticated and the session survives on disk
    let state = viewmodel.state().await;
    assert_that!(state.authenticated, eq(true));
    assert_that!(state.user.unwrap().username, eq("dev"));

    let session = SessionFile::read_from(guard.path()).unwrap().unwrap();
    assert_that!(session.token, eq("tok-xyz"));
    assert_that!(session.user_id.to_string(), eq(USER));
}

#[tokio::test]
#[serial]
async fn given_rejected_credentials_when_logging_in_then_error_and_no_session() {
    // Given
    let guard = ConfigDirGuard::new();
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "code": "UNAUTHORIZED", "message": "Bad credentials" }
        })))
        .mount(&mock_server)
        .await;

    let viewmodel = create_viewmodel(&mock_server).await;

    // When
    viewmodel
        .login("dev@example.com".to_string(), "wrong".to_string())
        .await;

    // Then
    let state = viewmodel.state().await;
    assert_that!(state.authenticated, eq(false));
    assert_that!(state.error, some(anything()));
    assert_that!(SessionFile::read_from(guard.path()).unwrap(), none());
}

#[tokio::test]
#[serial]
async fn given_logged_in_session_when_logging_out_then_session_file_removed() {
    // Given: A persisted session
    let guard = ConfigDirGuard::new();
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "token": "tok-xyz", "user": user_json(USER, "dev") }
        })))
        .mount(&mock_server)
        .await;

    let viewmodel = create_viewmodel(&mock_server).await;
    viewmodel
        .login("dev@example.com".to_string(), "hunter2".to_string())
        .await;
    assert_that!(SessionFile::read_from(guard.path()).unwrap(), some(anything()));

    // When
    viewmodel.logout().await;

    // Then
    assert_that!(SessionFile::read_from(guard.path()).unwrap(), none());
    assert_that!(viewmodel.state().await.authenticated, eq(false));
}
