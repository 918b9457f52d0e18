use crate::commands::to_value;
use crate::context::AppContext;

use tf_state::BoardViewModel;

use clap::Subcommand;
use serde_json::Value;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// Show the board, tasks grouped by status column
    Show {
        /// Workspace ID (UUID)
        workspace_id: Uuid,

        /// Read the local cache only, skip the network
        #[arg(long)]
        cached: bool,
    },
}

pub async fn run(action: BoardCommands, ctx: &AppContext) -> Result<Value, String> {
    let viewmodel = BoardViewModel::new(ctx.tasks.clone(), ctx.epics.clone());

    match action {
        BoardCommands::Show {
            workspace_id,
            cached: true,
        } => viewmodel.load_cached(workspace_id).await,
        BoardCommands::Show {
            workspace_id,
            cached: false,
        } => viewmodel.refresh(workspace_id).await,
    }

    to_value(&viewmodel.state().await)
}
