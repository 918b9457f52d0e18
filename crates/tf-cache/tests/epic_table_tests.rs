mod common;

use common::{create_test_epic, create_test_pool};

use tf_cache::EpicTable;
use tf_core::EpicStatus;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_epics_with_mixed_statuses_when_filtering_by_status_then_matches_only() {
    // Given
    let pool = create_test_pool().await;
    let table = EpicTable::new(pool);
    let workspace_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    let mut completed = create_test_epic(workspace_id, user_id);
    completed.status = EpicStatus::Completed;
    table.upsert(&completed).await.unwrap();
    table
        .upsert(&create_test_epic(workspace_id, user_id))
        .await
        .unwrap();

    // When
    let epics = table
        .get_by_status(workspace_id, &EpicStatus::Completed)
        .await
        .unwrap();

    // Then
    assert_that!(epics.len(), eq(1));
    assert_that!(epics[0].id, eq(completed.id));
}

#[tokio::test]
async fn given_epic_in_sprint_when_filtering_by_sprint_then_found() {
    // Given
    let pool = create_test_pool().await;
    let table = EpicTable::new(pool);
    let sprint_id = Uuid::new_v4();

    let mut epic = create_test_epic(Uuid::new_v4(), Uuid::new_v4());
    epic.sprint_id = Some(sprint_id);
    table.upsert(&epic).await.unwrap();

    // When
    let epics = table.get_by_sprint(sprint_id).await.unwrap();

    // Then
    assert_that!(epics.len(), eq(1));
}

#[tokio::test]
async fn given_cleared_workspace_when_listing_then_empty() {
    // Given
    let pool = create_test_pool().await;
    let table = EpicTable::new(pool);
    let workspace_id = Uuid::new_v4();
    table
        .upsert(&create_test_epic(workspace_id, Uuid::new_v4()))
        .await
        .unwrap();

    // When
    table.clear_workspace(workspace_id).await.unwrap();

    // Then
    assert_that!(table.get_by_workspace(workspace_id).await.unwrap(), is_empty());
}
