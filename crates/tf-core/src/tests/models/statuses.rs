use crate::{BugSeverity, InvitationStatus, NotificationType, Priority, SprintStatus, TaskStatus};

use std::str::FromStr;

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::Backlog.as_str(), "backlog");
    assert_eq!(TaskStatus::InProgress.as_str(), "in_progress");
    assert_eq!(TaskStatus::Done.as_str(), "done");
}

#[test]
fn test_task_status_from_str() {
    assert_eq!(TaskStatus::from_str("todo").unwrap(), TaskStatus::Todo);
    assert_eq!(
        TaskStatus::from_str("in_review").unwrap(),
        TaskStatus::InReview
    );
    assert!(TaskStatus::from_str("invalid").is_err());
}

#[test]
fn test_task_status_round_trips_every_column() {
    for status in TaskStatus::all() {
        assert_eq!(TaskStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_priority_from_str() {
    assert_eq!(Priority::from_str("urgent").unwrap(), Priority::Urgent);
    assert!(Priority::from_str("URGENT").is_err());
}

#[test]
fn test_sprint_status_from_str() {
    assert_eq!(
        SprintStatus::from_str("active").unwrap(),
        SprintStatus::Active
    );
    assert!(SprintStatus::from_str("running").is_err());
}

#[test]
fn test_bug_severity_from_str() {
    assert_eq!(
        BugSeverity::from_str("critical").unwrap(),
        BugSeverity::Critical
    );
    assert!(BugSeverity::from_str("blocker").is_err());
}

#[test]
fn test_invitation_status_from_str() {
    assert_eq!(
        InvitationStatus::from_str("pending").unwrap(),
        InvitationStatus::Pending
    );
    assert!(InvitationStatus::from_str("revoked").is_err());
}

#[test]
fn test_notification_type_serde_uses_snake_case() {
    let json = serde_json::to_string(&NotificationType::TaskAssigned).unwrap();
    assert_eq!(json, "\"task_assigned\"");

    let parsed: NotificationType = serde_json::from_str("\"invitation_received\"").unwrap();
    assert_eq!(parsed, NotificationType::InvitationReceived);
}
