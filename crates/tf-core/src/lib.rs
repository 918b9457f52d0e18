pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::bug::Bug;
pub use models::bug_severity::BugSeverity;
pub use models::bug_status::BugStatus;
pub use models::channel::Channel;
pub use models::epic::Epic;
pub use models::epic_status::EpicStatus;
pub use models::invitation::Invitation;
pub use models::invitation_status::InvitationStatus;
pub use models::message::Message;
pub use models::notification::Notification;
pub use models::notification_type::NotificationType;
pub use models::priority::Priority;
pub use models::report::Report;
pub use models::session::Session;
pub use models::sprint::Sprint;
pub use models::sprint_status::SprintStatus;
pub use models::task::Task;
pub use models::task_status::TaskStatus;
pub use models::user::User;
pub use models::workspace::Workspace;
pub use models::workspace_role::WorkspaceRole;
