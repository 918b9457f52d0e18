mod common;

use common::{WS, USER, create_test_client, create_test_pool};

use tf_api::resources::epics::EpicFilter;
use tf_data::EpicRepository;

use googletest::prelude::*;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn epic_json(id: &str, title: &str, sprint_id: Option<Uuid>) -> serde_json::Value {
    json!({
        "id": id,
        "workspace_id": WS,
        "sprint_id": sprint_id,
        "title": title,
        "description": null,
        "status": "planned",
        "priority": "high",
        "assignee_id": null,
        "start_date": null,
        "due_date": null,
        "created_at": "2026-08-01T09:00:00Z",
        "updated_at": "2026-08-01T09:00:00Z",
        "created_by": USER
    })
}

#[tokio::test]
async fn given_fetched_epics_when_reading_cache_then_sprint_filter_applies() {
    // Given: Two epics, one scheduled into a sprint
    let mock_server = MockServer::start().await;
    let sprint_id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}/epics", WS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 2,
            "total": 2,
            "data": [
                epic_json("00000000-0000-0000-0000-000000000040", "Scheduled", Some(sprint_id)),
                epic_json("00000000-0000-0000-0000-000000000041", "Backlog", None),
            ]
        })))
        .mount(&mock_server)
        .await;

    let repo = EpicRepository::new(create_test_client(&mock_server), create_test_pool().await);

    // When
    repo.fetch(WS.parse().unwrap(), &EpicFilter::default()).await;

    // Then
    let all = repo.cached_by_workspace(WS.parse().unwrap()).await.unwrap();
    assert_that!(all.len(), eq(2));
    let scheduled = repo.cached_by_sprint(sprint_id).await.unwrap();
    assert_that!(scheduled.len(), eq(1));
    assert_that!(scheduled[0].title, eq("Scheduled"));
}

#[tokio::test]
async fn given_fetch_by_id_when_offline_later_then_cached_copy_remains() {
    // Given
    let mock_server = MockServer::start().await;
    let id = "00000000-0000-0000-0000-000000000042";
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/epics/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": epic_json(id, "Fetched once", None)
        })))
        .mount(&mock_server)
        .await;

    let repo = EpicRepository::new(create_test_client(&mock_server), create_test_pool().await);

    // When
    let envelope = repo.fetch_by_id(id.parse().unwrap()).await;

    // Then
    assert_that!(envelope.success, eq(true));
    let cached = repo.cached_by_id(id.parse().unwrap()).await.unwrap();
    assert_that!(cached, some(anything()));
    assert_that!(cached.unwrap().title, eq("Fetched once"));
}
