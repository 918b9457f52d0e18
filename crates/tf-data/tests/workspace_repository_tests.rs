mod common;

use common::{WS, USER, create_test_client, create_test_pool};

use tf_api::resources::workspaces::WorkspaceFilter;
use tf_data::WorkspaceRepository;

use googletest::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MEMBER: &str = "00000000-0000-0000-0000-000000000002";

fn workspace_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "leader_id": USER,
        "members": [USER, MEMBER],
        "created_at": "2026-08-01T09:00:00Z",
        "updated_at": "2026-08-01T09:00:00Z"
    })
}

fn user_json(id: &str, username: &str) -> serde_json::Value {
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

#[tokio::test]
async fn given_fetched_workspaces_when_reading_cache_then_members_mirrored() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/workspaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 1,
            "total": 1,
            "data": [workspace_json(WS, "Mobile Team")]
        })))
        .mount(&mock_server)
        .await;

    let repo = WorkspaceRepository::new(create_test_client(&mock_server), create_test_pool().await);

    // When
    let envelope = repo.fetch(&WorkspaceFilter::default()).await;

    // Then
    assert_that!(envelope.success, eq(true));
    let cached = repo.cached_all().await.unwrap();
    assert_that!(cached.len(), eq(1));
    assert_that!(cached[0].members.len(), eq(2));
}

#[tokio::test]
async fn given_fetched_member_profiles_when_reading_cache_then_users_resolvable() {
    // Given: The workspace row plus its member profiles
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}", WS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": workspace_json(WS, "Mobile Team")
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}/members", WS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 2,
            "total": 2,
            "data": [user_json(USER, "lead"), user_json(MEMBER, "sam")]
        })))
        .mount(&mock_server)
        .await;

    let repo = WorkspaceRepository::new(create_test_client(&mock_server), create_test_pool().await);

    // When
    repo.fetch_by_id(WS.parse().unwrap()).await;
    repo.fetch_members(WS.parse().unwrap()).await;

    // Then: The cached workspace and its member profiles resolve offline
    let workspace = repo.cached_by_id(WS.parse().unwrap()).await.unwrap();
    assert_that!(workspace, some(anything()));
    let members = repo.cached_members(WS.parse().unwrap()).await.unwrap();
    assert_that!(members.len(), eq(2));
    let usernames: Vec<String> = members.iter().map(|u| u.username.clone()).collect();
    assert_that!(usernames, contains_each![eq("lead"), eq("sam")]);
}
