//! Get-by-id coverage for the smaller resource clients

use std::time::Duration;

use tf_api::ApiClient;
use tf_core::{BugSeverity, SprintStatus};

use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WS: &str = "00000000-0000-0000-0000-0000000000aa";
const USER: &str = "00000000-0000-0000-0000-000000000001";

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), Duration::from_secs(5), None, Some(USER)).unwrap()
}

#[tokio::test]
async fn test_get_sprint() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/sprints/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": id,
                "workspace_id": WS,
                "name": "Sprint 4",
                "goal": "Ship messaging",
                "start_date": "2026-08-03T00:00:00Z",
                "end_date": "2026-08-17T00:00:00Z",
                "status": "active",
                "created_at": "2026-08-01T09:00:00Z",
                "updated_at": "2026-08-01T09:00:00Z"
            }
        })))
        .mount(&mock_server)
        .await;

    let envelope = client(&mock_server).sprints().get(id).await.unwrap();

    assert!(envelope.success);
    let sprint = envelope.data.unwrap();
    assert_eq!(sprint.name, "Sprint 4");
    assert_eq!(sprint.status, SprintStatus::Active);
}

#[tokio::test]
async fn test_get_bug() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/bugs/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": id,
                "workspace_id": WS,
                "task_id": null,
                "title": "Crash on rotate",
                "description": null,
                "status": "open",
                "severity": "critical",
                "assignee_id": null,
                "created_at": "2026-08-01T09:00:00Z",
                "updated_at": "2026-08-01T09:00:00Z",
                "created_by": USER
            }
        })))
        .mount(&mock_server)
        .await;

    let envelope = client(&mock_server).bugs().get(id).await.unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap().severity, BugSeverity::Critical);
}

#[tokio::test]
async fn test_get_channel() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/channels/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": id,
                "workspace_id": WS,
                "name": "general",
                "description": null,
                "direct": false,
                "created_at": "2026-08-01T09:00:00Z",
                "updated_at": "2026-08-01T09:00:00Z",
                "created_by": USER
            }
        })))
        .mount(&mock_server)
        .await;

    let envelope = client(&mock_server).channels().get(id).await.unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap().name, "general");
}

#[tokio::test]
async fn test_get_report() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/reports/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": id,
                "workspace_id": WS,
                "author_id": USER,
                "report_date": "2026-08-03",
                "done": "Reviewed the board PR",
                "planned": "Start on threads",
                "blockers": null,
                "created_at": "2026-08-03T09:00:00Z",
                "updated_at": "2026-08-03T09:00:00Z"
            }
        })))
        .mount(&mock_server)
        .await;

    let envelope = client(&mock_server).reports().get(id).await.unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap().planned, "Start on threads");
}

#[tokio::test]
async fn test_get_user() {
    let mock_server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/users/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": id,
                "username": "sam",
                "email": "sam@example.com",
                "display_name": "Sam",
                "avatar_url": null,
                "created_at": "2026-08-01T09:00:00Z",
                "updated_at": "2026-08-01T09:00:00Z"
            }
        })))
        .mount(&mock_server)
        .await;

    let envelope = client(&mock_server).users().get(id).await.unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap().display_name.as_deref(), Some("Sam"));
}
