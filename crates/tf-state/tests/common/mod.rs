#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use tf_api::ApiClient;

use serde_json::json;
use sqlx::SqlitePool;
use wiremock::MockServer;

pub const WS: &str = "00000000-0000-0000-0000-0000000000aa";
pub const USER: &str = "00000000-0000-0000-0000-000000000001";

pub async fn create_test_pool() -> SqlitePool {
    tf_cache::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub fn create_test_client(server: &MockServer) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(&server.uri(), Duration::from_secs(5), None, Some(USER)).unwrap())
}

pub fn create_unreachable_client() -> Arc<ApiClient> {
    Arc::new(
        ApiClient::new(
            "http://127.0.0.1:9",
            Duration::from_millis(250),
            None,
            Some(USER),
        )
        .unwrap(),
    )
}

pub fn task_json(id: &str, title: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "workspace_id": WS,
        "epic_id": null,
        "sprint_id": null,
        "title": title,
        "description": null,
        "status": status,
        "priority": "medium",
        "assignee_id": null,
        "due_date": null,
        "created_at": "2026-08-01T09:00:00Z",
        "updated_at": "2026-08-01T09:00:00Z",
        "created_by": USER
    })
}

pub fn user_json(id: &str, username: &str) -> serde_json::Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{}@example.com", username),
        "display_name": null,
        "avatar_url": null,
        "created_at": "2026-08-01T09:00:00Z",
        "updated_at": "2026-08-01T09:00:00Z"
    })
}
