use crate::commands::to_value;
use crate::context::AppContext;

use tf_state::WorkspaceListViewModel;

use clap::Subcommand;
use serde_json::Value;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum WorkspaceCommands {
    /// List workspaces
    List {
        /// Read the local cache only, skip the network
        #[arg(long)]
        cached: bool,
    },

    /// Create a workspace; you become its leader
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Rename a workspace
    Rename {
        /// Workspace ID (UUID)
        id: Uuid,

        #[arg(long)]
        name: String,
    },

    /// Delete a workspace
    Delete {
        /// Workspace ID (UUID)
        id: Uuid,
    },
}

pub async fn run(action: WorkspaceCommands, ctx: &AppContext) -> Result<Value, String> {
    let viewmodel = WorkspaceListViewModel::new(ctx.workspaces.clone());

    match action {
        WorkspaceCommands::List { cached: true } => viewmodel.load_cached().await,
        WorkspaceCommands::List { cached: false } => viewmodel.refresh().await,
        WorkspaceCommands::Create { name, description } => {
            viewmodel.create(name, description).await
        }
        WorkspaceCommands::Rename { id, name } => viewmodel.rename(id, name).await,
        WorkspaceCommands::Delete { id } => viewmodel.delete(id).await,
    }

    to_value(&viewmodel.state().await)
}
