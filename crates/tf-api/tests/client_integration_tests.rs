//! Integration tests for the typed API clients using a wiremock server

use std::time::Duration;

use tf_api::resources::auth::LoginRequest;
use tf_api::resources::tasks::{CreateTaskRequest, TaskFilter};
use tf_api::ApiClient;
use tf_core::TaskStatus;

use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WS: &str = "00000000-0000-0000-0000-0000000000aa";
const USER: &str = "00000000-0000-0000-0000-000000000001";

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), Duration::from_secs(5), None, Some(USER)).unwrap()
}

fn task_json(id: &str, title: &str, status: &str) -> serde_json::Value {
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

#[tokio::test]
async fn test_list_tasks_parses_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}/tasks", WS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 2,
            "total": 7,
            "data": [
                task_json("00000000-0000-0000-0000-000000000010", "First", "todo"),
                task_json("00000000-0000-0000-0000-000000000011", "Second", "done"),
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let envelope = client
        .tasks()
        .list(WS.parse().unwrap(), &TaskFilter::default())
        .await
        .unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.count, Some(2));
    assert_eq!(envelope.total, Some(7));
    assert_eq!(envelope.data.len(), 2);
    assert_eq!(envelope.data[0].title, "First");
    assert_eq!(envelope.data[1].status, TaskStatus::Done);
}

#[tokio::test]
async fn test_list_tasks_passes_filters_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}/tasks", WS)))
        .and(query_param("status", "in_progress"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 0,
            "total": 0,
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let filter = TaskFilter {
        status: Some(TaskStatus::InProgress),
        page: Some(2),
        limit: Some(25),
        ..TaskFilter::default()
    };

    let client = client(&mock_server);
    let envelope = client
        .tasks()
        .list(WS.parse().unwrap(), &filter)
        .await
        .unwrap();

    assert!(envelope.success);
    assert!(envelope.data.is_empty());
}

#[tokio::test]
async fn test_create_task_sends_body_and_identity_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/tasks"))
        .and(header("X-User-Id", USER))
        .and(body_string_contains("Fix login crash"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": task_json("00000000-0000-0000-0000-000000000012", "Fix login crash", "backlog")
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let body = CreateTaskRequest::new(WS.parse().unwrap(), "Fix login crash".to_string());
    let envelope = client.tasks().create(&body).await.unwrap();

    assert!(envelope.success);
    let task = envelope.data.unwrap();
    assert_eq!(task.title, "Fix login crash");
    assert_eq!(task.status, TaskStatus::Backlog);
}

#[tokio::test]
async fn test_get_workspace_not_found_maps_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}", WS)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "NOT_FOUND",
                "message": "Workspace not found"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let result = client.workspaces().get(WS.parse().unwrap()).await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_bearer_token_attached_when_session_exists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .and(header("Authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 0,
            "total": 0,
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(
        &mock_server.uri(),
        Duration::from_secs(5),
        Some("tok-abc"),
        None,
    )
    .unwrap();

    let envelope = client
        .notifications()
        .list(&Default::default())
        .await
        .unwrap();
    assert!(envelope.success);
}

#[tokio::test]
async fn test_mark_notification_read() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/notifications/{}/read", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": id,
                "user_id": USER,
                "notification_type": "task_assigned",
                "content": "You were assigned 'First'",
                "read": true,
                "created_at": "2026-08-01T09:00:00Z"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let envelope = client.notifications().mark_read(id).await.unwrap();

    assert!(envelope.success);
    assert!(envelope.data.unwrap().read);
}

#[tokio::test]
async fn test_login_returns_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_string_contains("dev@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "tok-xyz",
                "user": {
                    "id": USER,
                    "username": "dev",
                    "email": "dev@example.com",
                    "display_name": null,
                    "avatar_url": null,
                    "created_at": "2026-08-01T09:00:00Z",
                    "updated_at": "2026-08-01T09:00:00Z"
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let envelope = client
        .auth()
        .login(&LoginRequest {
            email: "dev@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    assert!(envelope.success);
    let session = envelope.data.unwrap();
    assert_eq!(session.token, "tok-xyz");
    assert_eq!(session.user.username, "dev");
}

#[tokio::test]
async fn test_plain_error_status_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let result = client.users().me().await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("500"));
}
