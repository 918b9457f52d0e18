use crate::Workspace;

use uuid::Uuid;

#[test]
fn test_workspace_new_includes_leader_as_member() {
    let leader_id = Uuid::new_v4();
    let workspace = Workspace::new("Mobile Team".to_string(), None, leader_id);

    assert_eq!(workspace.leader_id, leader_id);
    assert_eq!(workspace.members, vec![leader_id]);
}

#[test]
fn test_workspace_members_default_to_empty_on_deserialize() {
    // Some list endpoints omit the member array entirely.
    let json = format!(
        r#"{{
            "id": "{}",
            "name": "Ops",
            "description": null,
            "leader_id": "{}",
            "created_at": "2026-08-01T00:00:00Z",
            "updated_at": "2026-08-01T00:00:00Z"
        }}"#,
        Uuid::new_v4(),
        Uuid::new_v4()
    );

    let workspace: Workspace = serde_json::from_str(&json).unwrap();
    assert!(workspace.members.is_empty());
}
