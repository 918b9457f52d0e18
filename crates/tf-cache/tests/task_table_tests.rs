mod common;

use common::{create_test_pool, create_test_task};

use tf_cache::TaskTable;
use tf_core::TaskStatus;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_upserted_task_when_finding_by_id_then_round_trips() {
    // Given: An empty cache
    let pool = create_test_pool().await;
    let table = TaskTable::new(pool);
    let task = create_test_task(Uuid::new_v4(), Uuid::new_v4());

    // When: Upserting the task
    table.upsert(&task).await.unwrap();

    // Then: Finding by ID returns the same record
    let found = table.get_by_id(task.id).await.unwrap().unwrap();
    assert_that!(found.id, eq(task.id));
    assert_that!(found.title, eq(&task.title));
    assert_that!(found.status, eq(&task.status));
    assert_that!(found.description, eq(&task.description));
}

#[tokio::test]
async fn given_empty_cache_when_finding_nonexistent_id_then_returns_none() {
    // Given
    let pool = create_test_pool().await;
    let table = TaskTable::new(pool);

    // When
    let result = table.get_by_id(Uuid::new_v4()).await.unwrap();

    // Then
    assert_that!(result, none());
}

#[tokio::test]
async fn given_existing_task_when_upserted_again_then_row_is_overwritten() {
    // Given: A cached task
    let pool = create_test_pool().await;
    let table = TaskTable::new(pool);
    let mut task = create_test_task(Uuid::new_v4(), Uuid::new_v4());
    table.upsert(&task).await.unwrap();

    // When: The remote copy comes back changed
    task.title = "Renamed".to_string();
    task.status = TaskStatus::InProgress;
    table.upsert(&task).await.unwrap();

    // Then: The cache holds the new values, not a second row
    let all = table.get_by_workspace(task.workspace_id).await.unwrap();
    assert_that!(all.len(), eq(1));
    assert_that!(all[0].title, eq("Renamed"));
    assert_that!(all[0].status, eq(&TaskStatus::InProgress));
}

#[tokio::test]
async fn given_tasks_in_two_workspaces_when_filtering_by_workspace_then_scoped() {
    // Given
    let pool = create_test_pool().await;
    let table = TaskTable::new(pool);
    let workspace_a = Uuid::new_v4();
    let workspace_b = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    table
        .upsert(&create_test_task(workspace_a, user_id))
        .await
        .unwrap();
    table
        .upsert(&create_test_task(workspace_a, user_id))
        .await
        .unwrap();
    table
        .upsert(&create_test_task(workspace_b, user_id))
        .await
        .unwrap();

    // When
    let tasks = table.get_by_workspace(workspace_a).await.unwrap();

    // Then
    assert_that!(tasks.len(), eq(2));
}

#[tokio::test]
async fn given_tasks_with_mixed_statuses_when_filtering_by_status_then_matches_only() {
    // Given
    let pool = create_test_pool().await;
    let table = TaskTable::new(pool);
    let workspace_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    let mut in_progress = create_test_task(workspace_id, user_id);
    in_progress.status = TaskStatus::InProgress;
    table.upsert(&in_progress).await.unwrap();
    table
        .upsert(&create_test_task(workspace_id, user_id))
        .await
        .unwrap();

    // When
    let tasks = table
        .get_by_status(workspace_id, &TaskStatus::InProgress)
        .await
        .unwrap();

    // Then
    assert_that!(tasks.len(), eq(1));
    assert_that!(tasks[0].id, eq(in_progress.id));
}

#[tokio::test]
async fn given_task_assigned_to_epic_when_filtering_by_epic_then_found() {
    // Given
    let pool = create_test_pool().await;
    let table = TaskTable::new(pool);
    let epic_id = Uuid::new_v4();

    let mut task = create_test_task(Uuid::new_v4(), Uuid::new_v4());
    task.epic_id = Some(epic_id);
    table.upsert(&task).await.unwrap();

    // When
    let tasks = table.get_by_epic(epic_id).await.unwrap();

    // Then
    assert_that!(tasks.len(), eq(1));
    assert_that!(tasks[0].epic_id, eq(Some(epic_id)));
}

#[tokio::test]
async fn given_deleted_task_when_finding_by_id_then_gone() {
    // Given
    let pool = create_test_pool().await;
    let table = TaskTable::new(pool);
    let task = create_test_task(Uuid::new_v4(), Uuid::new_v4());
    table.upsert(&task).await.unwrap();

    // When
    table.delete(task.id).await.unwrap();

    // Then
    assert_that!(table.get_by_id(task.id).await.unwrap(), none());
}

#[tokio::test]
async fn given_cleared_workspace_when_listing_then_empty() {
    // Given
    let pool = create_test_pool().await;
    let table = TaskTable::new(pool);
    let workspace_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    table
        .upsert(&create_test_task(workspace_id, user_id))
        .await
        .unwrap();
    table
        .upsert(&create_test_task(workspace_id, user_id))
        .await
        .unwrap();

    // When
    table.clear_workspace(workspace_id).await.unwrap();

    // Then
    assert_that!(
        table.get_by_workspace(workspace_id).await.unwrap(),
        is_empty()
    );
}
