use crate::auth_commands::AuthCommands;
use crate::board_commands::BoardCommands;
use crate::bug_commands::BugCommands;
use crate::channel_commands::ChannelCommands;
use crate::epic_commands::EpicCommands;
use crate::member_commands::MemberCommands;
use crate::message_commands::MessageCommands;
use crate::notification_commands::NotificationCommands;
use crate::report_commands::ReportCommands;
use crate::sprint_commands::SprintCommands;
use crate::task_commands::TaskCommands;
use crate::workspace_commands::WorkspaceCommands;

use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, sign out, show the current user
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Manage workspaces
    Workspace {
        #[command(subcommand)]
        action: WorkspaceCommands,
    },

    /// The kanban board of a workspace
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Manage bugs
    Bug {
        #[command(subcommand)]
        action: BugCommands,
    },

    /// Manage epics
    Epic {
        #[command(subcommand)]
        action: EpicCommands,
    },

    /// Manage sprints
    Sprint {
        #[command(subcommand)]
        action: SprintCommands,
    },

    /// The notification inbox
    Notification {
        #[command(subcommand)]
        action: NotificationCommands,
    },

    /// Manage messaging channels
    Channel {
        #[command(subcommand)]
        action: ChannelCommands,
    },

    /// Send and browse messages
    Message {
        #[command(subcommand)]
        action: MessageCommands,
    },

    /// Daily standup reports
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },

    /// Workspace members and invitations
    Member {
        #[command(subcommand)]
        action: MemberCommands,
    },
}

/// Serialize a UI state for printing.
pub(crate) fn to_value<T: Serialize>(state: &T) -> Result<Value, String> {
    serde_json::to_value(state).map_err(|e| format!("Error serializing state: {}", e))
}
