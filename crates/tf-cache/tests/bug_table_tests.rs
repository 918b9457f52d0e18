mod common;

use common::{create_test_bug, create_test_pool};

use tf_cache::BugTable;
use tf_core::BugStatus;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_bug_attached_to_task_when_filtering_by_task_then_found() {
    // Given
    let pool = create_test_pool().await;
    let table = BugTable::new(pool);
    let task_id = Uuid::new_v4();

    let mut bug = create_test_bug(Uuid::new_v4(), Uuid::new_v4());
    bug.task_id = Some(task_id);
    table.upsert(&bug).await.unwrap();
    table
        .upsert(&create_test_bug(Uuid::new_v4(), Uuid::new_v4()))
        .await
        .unwrap();

    // When
    let bugs = table.get_by_task(task_id).await.unwrap();

    // Then
    assert_that!(bugs.len(), eq(1));
    assert_that!(bugs[0].id, eq(bug.id));
}

#[tokio::test]
async fn given_bugs_with_mixed_statuses_when_filtering_by_status_then_matches_only() {
    // Given
    let pool = create_test_pool().await;
    let table = BugTable::new(pool);
    let workspace_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    let mut resolved = create_test_bug(workspace_id, user_id);
    resolved.status = BugStatus::Resolved;
    table.upsert(&resolved).await.unwrap();
    table
        .upsert(&create_test_bug(workspace_id, user_id))
        .await
        .unwrap();

    // When
    let bugs = table
        .get_by_status(workspace_id, &BugStatus::Resolved)
        .await
        .unwrap();

    // Then
    assert_that!(bugs.len(), eq(1));
    assert_that!(bugs[0].id, eq(resolved.id));
}

#[tokio::test]
async fn given_deleted_bug_when_finding_by_id_then_gone() {
    // Given
    let pool = create_test_pool().await;
    let table = BugTable::new(pool);
    let workspace_id = Uuid::new_v4();
    let bug = create_test_bug(workspace_id, Uuid::new_v4());
    table.upsert(&bug).await.unwrap();
    assert_that!(table.get_by_id(bug.id).await.unwrap(), some(anything()));

    // When
    table.delete(bug.id).await.unwrap();

    // Then
    assert_that!(table.get_by_id(bug.id).await.unwrap(), none());
    assert_that!(table.get_by_workspace(workspace_id).await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_cleared_workspace_when_listing_then_empty() {
    // Given
    let pool = create_test_pool().await;
    let table = BugTable::new(pool);
    let workspace_id = Uuid::new_v4();
    table
        .upsert(&create_test_bug(workspace_id, Uuid::new_v4()))
        .await
        .unwrap();

    // When
    table.clear_workspace(workspace_id).await.unwrap();

    // Then
    assert_that!(table.get_by_workspace(workspace_id).await.unwrap(), is_empty());
}
