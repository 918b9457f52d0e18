use crate::{Priority, Task, TaskStatus};

use uuid::Uuid;

#[test]
fn test_task_new() {
    let workspace_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let task = Task::new(
        workspace_id,
        "Wire up login".to_string(),
        Some("Bearer token flow".to_string()),
        user_id,
    );

    assert_eq!(task.workspace_id, workspace_id);
    assert_eq!(task.title, "Wire up login");
    assert_eq!(task.status, TaskStatus::Backlog);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.created_by, user_id);
    assert!(task.epic_id.is_none());
    assert!(task.sprint_id.is_none());
    assert!(task.assignee_id.is_none());
}

#[test]
fn test_task_serde_round_trip() {
    let task = Task::new(
        Uuid::new_v4(),
        "Serialize me".to_string(),
        None,
        Uuid::new_v4(),
    );

    let json = serde_json::to_string(&task).unwrap();
    let back: Task = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, task.id);
    assert_eq!(back.title, task.title);
    assert_eq!(back.status, task.status);
}
