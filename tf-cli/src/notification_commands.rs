use crate::commands::to_value;
use crate::context::AppContext;

use tf_state::NotificationsViewModel;

use clap::Subcommand;
use serde_json::Value;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum NotificationCommands {
    /// List notifications with the unread count
    List {
        /// Read the local cache only, skip the network
        #[arg(long)]
        cached: bool,
    },

    /// Mark one notification as read
    Read {
        /// Notification ID (UUID)
        id: Uuid,
    },

    /// Mark every notification as read
    ReadAll,

    /// Dismiss a notification
    Dismiss {
        /// Notification ID (UUID)
        id: Uuid,
    },
}

pub async fn run(action: NotificationCommands, ctx: &AppContext) -> Result<Value, String> {
    let user_id = ctx.current_user()?;
    let viewmodel = NotificationsViewModel::new(ctx.notifications.clone(), user_id);

    match action {
        NotificationCommands::List { cached: true } => viewmodel.load_cached().await,
        NotificationCommands::List { cached: false } => viewmodel.refresh().await,
        NotificationCommands::Read { id } => {
            viewmodel.load_cached().await;
            viewmodel.mark_read(id).await;
        }
        NotificationCommands::ReadAll => {
            viewmodel.load_cached().await;
            viewmodel.mark_all_read().await;
        }
        NotificationCommands::Dismiss { id } => {
            viewmodel.load_cached().await;
            viewmodel.dismiss(id).await;
        }
    }

    to_value(&viewmodel.state().await)
}
