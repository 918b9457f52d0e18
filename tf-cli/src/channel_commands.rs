use crate::commands::to_value;
use crate::context::AppContext;

use tf_api::resources::channels::CreateChannelRequest;
use tf_state::MessagingViewModel;

use clap::Subcommand;
use serde_json::Value;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum ChannelCommands {
    /// List channels in a workspace
    List {
        /// Workspace ID (UUID)
        workspace_id: Uuid,

        /// Read the local cache only, skip the network
        #[arg(long)]
        cached: bool,
    },

    /// Create a channel
    Create {
        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Create a direct (two-member) conversation
        #[arg(long)]
        direct: bool,
    },

    /// Rename a channel
    Rename {
        /// Channel ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        name: String,
    },

    /// Delete a channel
    Delete {
        /// Channel ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,
    },
}

pub async fn run(action: ChannelCommands, ctx: &AppContext) -> Result<Value, String> {
    let viewmodel = MessagingViewModel::new(ctx.channels.clone(), ctx.messages.clone());

    match action {
        ChannelCommands::List {
            workspace_id,
            cached: true,
        } => viewmodel.load_cached(workspace_id).await,
        ChannelCommands::List {
            workspace_id,
            cached: false,
        } => viewmodel.refresh(workspace_id).await,
        ChannelCommands::Create {
            workspace_id,
            name,
            description,
            direct,
        } => {
            let body = CreateChannelRequest {
                workspace_id,
                name,
                description,
                direct: direct.then_some(true),
            };
            viewmodel.create_channel(body).await;
        }
        ChannelCommands::Rename {
            id,
            workspace_id,
            name,
        } => {
            viewmodel.load_cached(workspace_id).await;
            viewmodel.rename_channel(id, name).await;
        }
        ChannelCommands::Delete { id, workspace_id } => {
            viewmodel.load_cached(workspace_id).await;
            viewmodel.delete_channel(id).await;
        }
    }

    to_value(&viewmodel.state().await)
}
