use crate::commands::to_value;
use crate::context::AppContext;

use tf_api::resources::epics::{CreateEpicRequest, UpdateEpicRequest};
use tf_core::{EpicStatus, Priority};
use tf_state::EpicsViewModel;

use clap::Subcommand;
use serde_json::Value;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum EpicCommands {
    /// List epics in a workspace
    List {
        /// Workspace ID (UUID)
        workspace_id: Uuid,

        /// Read the local cache only, skip the network
        #[arg(long)]
        cached: bool,
    },

    /// List the tasks grouped under an epic
    Tasks {
        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        epic_id: Uuid,
    },

    /// Create an epic
    Create {
        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// low | medium | high | urgent
        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        sprint_id: Option<Uuid>,
    },

    /// Update an epic
    Update {
        /// Epic ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// planned | in_progress | completed | cancelled
        #[arg(long)]
        status: Option<String>,

        /// low | medium | high | urgent
        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        assignee_id: Option<Uuid>,
    },

    /// Delete an epic
    Delete {
        /// Epic ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,
    },
}

pub async fn run(action: EpicCommands, ctx: &AppContext) -> Result<Value, String> {
    let viewmodel = EpicsViewModel::new(ctx.epics.clone(), ctx.tasks.clone());

    match action {
        EpicCommands::List {
            workspace_id,
            cached: true,
        } => viewmodel.load_cached(workspace_id).await,
        EpicCommands::List {
            workspace_id,
            cached: false,
        } => viewmodel.refresh(workspace_id).await,
        EpicCommands::Tasks {
            workspace_id,
            epic_id,
        } => {
            viewmodel.load_cached(workspace_id).await;
            viewmodel.expand(epic_id).await;
        }
        EpicCommands::Create {
            workspace_id,
            title,
            description,
            priority,
            sprint_id,
        } => {
            let mut body = CreateEpicRequest::new(workspace_id, title);
            body.description = description;
            body.priority = priority
                .map(|p| p.parse::<Priority>().map_err(|e| e.to_string()))
                .transpose()?;
            body.sprint_id = sprint_id;
            viewmodel.create(body).await;
        }
        EpicCommands::Update {
            id,
            workspace_id,
            title,
            description,
            status,
            priority,
            assignee_id,
        } => {
            let body = UpdateEpicRequest {
                title,
                description,
                status: status
                    .map(|s| s.parse::<EpicStatus>().map_err(|e| e.to_string()))
                    .transpose()?,
                priority: priority
                    .map(|p| p.parse::<Priority>().map_err(|e| e.to_string()))
                    .transpose()?,
                assignee_id,
                ..UpdateEpicRequest::default()
            };
            viewmodel.load_cached(workspace_id).await;
            viewmodel.update(id, body).await;
        }
        EpicCommands::Delete { id, workspace_id } => {
            viewmodel.load_cached(workspace_id).await;
            viewmodel.delete(id).await;
        }
    }

    to_value(&viewmodel.state().await)
}
