pub mod connection;
pub mod error;
pub mod tables;

pub use connection::{open, open_in_memory};
pub use error::{CacheError, Result};
pub use tables::bug_table::BugTable;
pub use tables::channel_table::ChannelTable;
pub use tables::epic_table::EpicTable;
pub use tables::invitation_table::InvitationTable;
pub use tables::message_table::MessageTable;
pub use tables::notification_table::NotificationTable;
pub use tables::report_table::ReportTable;
pub use tables::sprint_table::SprintTable;
pub use tables::task_table::TaskTable;
pub use tables::user_table::UserTable;
pub use tables::workspace_table::WorkspaceTable;
