mod common;

use std::sync::Arc;

use common::{WS, create_test_client, create_test_pool, create_unreachable_client, task_json};

use tf_core::TaskStatus;
use tf_data::{EpicRepository, TaskRepository};
use tf_state::BoardViewModel;

use googletest::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn empty_list() -> serde_json::Value {
    json!({ "success": true, "count": 0, "total": 0, "data": [] })
}

#[tokio::test]
async fn given_tasks_when_refreshing_then_grouped_into_status_columns() {
    // Given: One todo task and one done task
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}/tasks", WS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 2,
            "total": 2,
            "data": [
                task_json("00000000-0000-0000-0000-000000000010", "First", "todo"),
                task_json("00000000-0000-0000-0000-000000000011", "Second", "done"),
            ]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}/epics", WS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_list()))
        .mount(&mock_server)
        .await;

    let pool = create_test_pool().await;
    let client = create_test_client(&mock_server);
    let viewmodel = BoardViewModel::new(
        Arc::new(TaskRepository::new(client.clone(), pool.clone())),
        Arc::new(EpicRepository::new(client, pool)),
    );

    // When
    viewmodel.refresh(WS.parse().unwrap()).await;

    // Then: Five columns, tasks in the right ones
    let state = viewmodel.state().await;
    assert_that!(state.loading, eq(false));
    assert_that!(state.error, none());
    assert_that!(state.columns.len(), eq(5));

    let todo = state
        .columns
        .iter()
        .find(|c| c.status == TaskStatus::Todo)
        .unwrap();
    assert_that!(todo.tasks.len(), eq(1));
    assert_that!(todo.tasks[0].title, eq("First"));

    let done = state
        .columns
        .iter()
        .find(|c| c.status == TaskStatus::Done)
        .unwrap();
    assert_that!(done.tasks.len(), eq(1));
}

#[tokio::test]
async fn given_offline_server_when_refreshing_then_cached_board_with_error() {
    // Given: A board cached by an earlier refresh
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}/tasks", WS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 1,
            "total": 1,
            "data": [task_json("00000000-0000-0000-0000-000000000010", "Kept", "todo")]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}/epics", WS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_list()))
        .mount(&mock_server)
        .await;

    let pool = create_test_pool().await;
    let online = create_test_client(&mock_server);
    let seeded = BoardViewModel::new(
        Arc::new(TaskRepository::new(online.clone(), pool.clone())),
        Arc::new(EpicRepository::new(online, pool.clone())),
    );
    seeded.refresh(WS.parse().unwrap()).await;

    // When: Refreshing with no server reachable
    let offline = create_unreachable_client();
    let viewmodel = BoardViewModel::new(
        Arc::new(TaskRepository::new(offline.clone(), pool.clone())),
        Arc::new(EpicRepository::new(offline, pool)),
    );
    viewmodel.refresh(WS.parse().unwrap()).await;

    // Then: The cached task is still on the board, with an error banner
    let state = viewmodel.state().await;
    assert_that!(state.error, some(anything()));
    let todo = state
        .columns
        .iter()
        .find(|c| c.status == TaskStatus::Todo)
        .unwrap();
    assert_that!(todo.tasks.len(), eq(1));
    assert_that!(todo.tasks[0].title, eq("Kept"));
}

#[tokio::test]
async fn given_cached_rows_when_loading_cached_then_no_network_needed() {
    // Given: A cache seeded while online
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}/tasks", WS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 1,
            "total": 1,
            "data": [task_json("00000000-0000-0000-0000-000000000012", "Offline", "in_progress")]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/workspaces/{}/epics", WS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_list()))
        .mount(&mock_server)
        .await;

    let pool = create_test_pool().await;
    let online = create_test_client(&mock_server);
    BoardViewModel::new(
        Arc::new(TaskRepository::new(online.clone(), pool.clone())),
        Arc::new(EpicRepository::new(online, pool.clone())),
    )
    .refresh(WS.parse().unwrap())
    .await;

    // When: A fresh view-model loads from cache with an unreachable client
    let offline = create_unreachable_client();
    let viewmodel = BoardViewModel::new(
        Arc::new(TaskRepository::new(offline.clone(), pool.clone())),
        Arc::new(EpicRepository::new(offline, pool)),
    );
    viewmodel.load_cached(WS.parse().unwrap()).await;

    // Then
    let state = viewmodel.state().await;
    assert_that!(state.error, none());
    let in_progress = state
        .columns
        .iter()
        .find(|c| c.status == TaskStatus::InProgress)
        .unwrap();
    assert_that!(in_progress.tasks.len(), eq(1));
}
