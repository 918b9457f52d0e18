use crate::commands::to_value;
use crate::context::AppContext;

use tf_state::MessagingViewModel;

use clap::Subcommand;
use serde_json::Value;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum MessageCommands {
    /// List the top-level messages of a channel
    List {
        /// Channel ID (UUID)
        channel_id: Uuid,
    },

    /// List the replies under one message
    Thread {
        /// Root message ID (UUID)
        message_id: Uuid,
    },

    /// Send a message (or a threaded reply with --reply-to)
    Send {
        #[arg(long)]
        channel_id: Uuid,

        #[arg(long)]
        content: String,

        /// Message to reply to
        #[arg(long)]
        reply_to: Option<Uuid>,
    },

    /// Edit a message
    Edit {
        /// Message ID (UUID)
        id: Uuid,

        #[arg(long)]
        channel_id: Uuid,

        #[arg(long)]
        content: String,
    },

    /// Delete a message
    Delete {
        /// Message ID (UUID)
        id: Uuid,

        #[arg(long)]
        channel_id: Uuid,
    },
}

pub async fn run(action: MessageCommands, ctx: &AppContext) -> Result<Value, String> {
    let viewmodel = MessagingViewModel::new(ctx.channels.clone(), ctx.messages.clone());

    match action {
        MessageCommands::List { channel_id } => viewmodel.open_channel(channel_id).await,
        MessageCommands::Thread { message_id } => viewmodel.open_thread(message_id).await,
        MessageCommands::Send {
            channel_id,
            content,
            reply_to,
        } => viewmodel.send(channel_id, content, reply_to).await,
        MessageCommands::Edit {
            id,
            channel_id,
            content,
        } => {
            viewmodel.open_channel(channel_id).await;
            viewmodel.edit(id, content).await;
        }
        MessageCommands::Delete { id, channel_id } => {
            viewmodel.open_channel(channel_id).await;
            viewmodel.delete(id).await;
        }
    }

    to_value(&viewmodel.state().await)
}
