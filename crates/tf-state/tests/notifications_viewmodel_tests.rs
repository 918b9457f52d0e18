mod common;

use std::sync::Arc;

use common::{USER, create_test_client, create_test_pool};

use tf_data::NotificationRepository;
use tf_state::NotificationsViewModel;

use googletest::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notification_json(id: &str, read: bool) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": USER,
        "notification_type": "invitation_received",
        "content": "You were invited to 'Mobile Team'",
        "read": read,
        "created_at": "2026-08-01T09:00:00Z"
    })
}

#[tokio::test]
async fn given_unread_notifications_when_refreshing_then_badge_counts_them() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 2,
            "total": 2,
            "data": [
                notification_json("00000000-0000-0000-0000-000000000030", false),
                notification_json("00000000-0000-0000-0000-000000000031", true),
            ]
        })))
        .mount(&mock_server)
        .await;

    let repo = Arc::new(NotificationRepository::new(
        create_test_client(&mock_server),
        create_test_pool().await,
    ));
    let viewmodel = NotificationsViewModel::new(repo, USER.parse().unwrap());

    // When
    viewmodel.refresh().await;

    // Then
    let state = viewmodel.state().await;
    assert_that!(state.notifications.len(), eq(2));
    assert_that!(state.unread_count, eq(1));
}

#[tokio::test]
async fn given_unread_notification_when_marking_read_then_badge_drops() {
    // Given
    let mock_server = MockServer::start().await;
    let id = "00000000-0000-0000-0000-000000000032";
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "count": 1,
            "total": 1,
            "data": [notification_json(id, false)]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/notifications/{}/read", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": notification_json(id, true)
        })))
        .mount(&mock_server)
        .await;

    let repo = Arc::new(NotificationRepository::new(
        create_test_client(&mock_server),
        create_test_pool().await,
    ));
    let viewmodel = NotificationsViewModel::new(repo, USER.parse().unwrap());
    viewmodel.refresh().await;
    assert_that!(viewmodel.state().await.unread_count, eq(1));

    // When
    viewmodel.mark_read(id.parse().unwrap()).await;

    // Then
    assert_that!(viewmodel.state().await.unread_count, eq(0));
}
