#![allow(dead_code)]

use tf_core::{Bug, Channel, Epic, Message, Notification, NotificationType, Report, Sprint, Task, Workspace};

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

pub fn create_test_workspace(leader_id: Uuid) -> Workspace {
    Workspace::new("Test Workspace".to_string(), None, leader_id)
}

pub fn create_test_task(workspace_id: Uuid, user_id: Uuid) -> Task {
    Task::new(
        workspace_id,
        "Test Task".to_string(),
        Some("A task used in tests".to_string()),
        user_id,
    )
}

pub fn create_test_epic(workspace_id: Uuid, user_id: Uuid) -> Epic {
    Epic::new(workspace_id, "Test Epic".to_string(), None, user_id)
}

pub fn create_test_bug(workspace_id: Uuid, user_id: Uuid) -> Bug {
    Bug::new(workspace_id, "Test Bug".to_string(), None, user_id)
}

pub fn create_test_sprint(workspace_id: Uuid) -> Sprint {
    let start = Utc::now();
    Sprint::new(
        workspace_id,
        "Sprint 1".to_string(),
        start,
        start + Duration::days(14),
    )
}

pub fn create_test_notification(user_id: Uuid) -> Notification {
    Notification::new(
        user_id,
        NotificationType::TaskAssigned,
        "You were assigned 'Test Task'".to_string(),
    )
}

pub fn create_test_channel(workspace_id: Uuid, user_id: Uuid) -> Channel {
    Channel::new(workspace_id, "general".to_string(), user_id)
}

pub fn create_test_message(channel_id: Uuid, sender_id: Uuid) -> Message {
    Message::new(channel_id, sender_id, "Hello there".to_string())
}

pub fn create_test_report(workspace_id: Uuid, author_id: Uuid) -> Report {
    Report::new(
        workspace_id,
        author_id,
        NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
        "Finished the login flow".to_string(),
        "Start on the board screen".to_string(),
    )
}
