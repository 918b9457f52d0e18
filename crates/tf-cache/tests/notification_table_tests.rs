mod common;

use common::{create_test_pool, create_test_notification};

use tf_cache::NotificationTable;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_unread_notifications_when_counting_then_reflects_read_flag() {
    // Given
    let pool = create_test_pool().await;
    let table = NotificationTable::new(pool);
    let user_id = Uuid::new_v4();

    let first = create_test_notification(user_id);
    let second = create_test_notification(user_id);
    table.upsert(&first).await.unwrap();
    table.upsert(&second).await.unwrap();
    assert_that!(table.unread_count(user_id).await.unwrap(), eq(2));

    // When
    table.mark_read(first.id).await.unwrap();

    // Then
    assert_that!(table.unread_count(user_id).await.unwrap(), eq(1));
    let unread = table.get_unread(user_id).await.unwrap();
    assert_that!(unread.len(), eq(1));
    assert_that!(unread[0].id, eq(second.id));
}

#[tokio::test]
async fn given_mark_all_read_when_counting_then_zero() {
    // Given
    let pool = create_test_pool().await;
    let table = NotificationTable::new(pool);
    let user_id = Uuid::new_v4();
    table
        .upsert(&create_test_notification(user_id))
        .await
        .unwrap();
    table
        .upsert(&create_test_notification(user_id))
        .await
        .unwrap();

    // When
    table.mark_all_read(user_id).await.unwrap();

    // Then
    assert_that!(table.unread_count(user_id).await.unwrap(), eq(0));
    assert_that!(table.get_all(user_id).await.unwrap().len(), eq(2));
}

#[tokio::test]
async fn given_cleared_user_when_listing_then_empty() {
    // Given
    let pool = create_test_pool().await;
    let table = NotificationTable::new(pool);
    let user_id = Uuid::new_v4();
    let kept_user = Uuid::new_v4();
    table
        .upsert(&create_test_notification(user_id))
        .await
        .unwrap();
    table
        .upsert(&create_test_notification(kept_user))
        .await
        .unwrap();

    // When
    table.clear_user(user_id).await.unwrap();

    // Then
    assert_that!(table.get_all(user_id).await.unwrap(), is_empty());
    assert_that!(table.get_all(kept_user).await.unwrap().len(), eq(1));
}

#[tokio::test]
async fn given_dismissed_notification_when_finding_by_id_then_gone() {
    // Given
    let pool = create_test_pool().await;
    let table = NotificationTable::new(pool);
    let notification = create_test_notification(Uuid::new_v4());
    table.upsert(&notification).await.unwrap();
    assert_that!(
        table.get_by_id(notification.id).await.unwrap(),
        some(anything())
    );

    // When
    table.delete(notification.id).await.unwrap();

    // Then
    assert_that!(table.get_by_id(notification.id).await.unwrap(), none());
}

#[tokio::test]
async fn given_two_users_when_listing_then_scoped_to_user() {
    // Given
    let pool = create_test_pool().await;
    let table = NotificationTable::new(pool);
    let user_a = Uuid::new_v4();
    let user_b = Uuid::new_v4();
    table.upsert(&create_test_notification(user_a)).await.unwrap();
    table.upsert(&create_test_notification(user_b)).await.unwrap();

    // When
    let for_a = table.get_all(user_a).await.unwrap();

    // Then
    assert_that!(for_a.len(), eq(1));
    assert_that!(for_a[0].user_id, eq(user_a));
}
