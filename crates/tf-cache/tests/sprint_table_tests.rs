mod common;

use common::{create_test_pool, create_test_sprint};

use tf_cache::SprintTable;
use tf_core::SprintStatus;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_upserted_sprint_when_finding_by_id_then_round_trips() {
    // Given
    let pool = create_test_pool().await;
    let table = SprintTable::new(pool);
    let sprint = create_test_sprint(Uuid::new_v4());

    // When
    table.upsert(&sprint).await.unwrap();

    // Then
    let found = table.get_by_id(sprint.id).await.unwrap().unwrap();
    assert_that!(found.name, eq(&sprint.name));
    assert_that!(found.status, eq(&SprintStatus::Planned));
    // Sub-second precision is dropped by the epoch-second column
    assert_that!(
        found.start_date.timestamp(),
        eq(sprint.start_date.timestamp())
    );
}

#[tokio::test]
async fn given_one_active_sprint_when_getting_active_then_found() {
    // Given
    let pool = create_test_pool().await;
    let table = SprintTable::new(pool);
    let workspace_id = Uuid::new_v4();

    let planned = create_test_sprint(workspace_id);
    let mut active = create_test_sprint(workspace_id);
    active.status = SprintStatus::Active;
    table.upsert(&planned).await.unwrap();
    table.upsert(&active).await.unwrap();

    // When
    let found = table.get_active(workspace_id).await.unwrap();

    // Then
    assert_that!(found, some(anything()));
    assert_that!(found.unwrap().id, eq(active.id));
}

#[tokio::test]
async fn given_cleared_workspace_when_listing_then_empty() {
    // Given
    let pool = create_test_pool().await;
    let table = SprintTable::new(pool);
    let workspace_id = Uuid::new_v4();
    table
        .upsert(&create_test_sprint(workspace_id))
        .await
        .unwrap();
    table
        .upsert(&create_test_sprint(workspace_id))
        .await
        .unwrap();

    // When
    table.clear_workspace(workspace_id).await.unwrap();

    // Then
    assert_that!(table.get_by_workspace(workspace_id).await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_no_active_sprint_when_getting_active_then_none() {
    // Given
    let pool = create_test_pool().await;
    let table = SprintTable::new(pool);
    let workspace_id = Uuid::new_v4();
    table
        .upsert(&create_test_sprint(workspace_id))
        .await
        .unwrap();

    // When
    let found = table.get_active(workspace_id).await.unwrap();

    // Then
    assert_that!(found, none());
}
