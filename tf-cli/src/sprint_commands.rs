use crate::commands::to_value;
use crate::context::AppContext;

use tf_api::resources::sprints::CreateSprintRequest;
use tf_state::SprintPlanningViewModel;

use chrono::DateTime;
use clap::Subcommand;
use serde_json::Value;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum SprintCommands {
    /// List sprints in a workspace
    List {
        /// Workspace ID (UUID)
        workspace_id: Uuid,

        /// Read the local cache only, skip the network
        #[arg(long)]
        cached: bool,
    },

    /// Create a sprint
    Create {
        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        name: String,

        /// Start date (Unix timestamp in seconds)
        #[arg(long)]
        start_date: i64,

        /// End date (Unix timestamp in seconds)
        #[arg(long)]
        end_date: i64,

        #[arg(long)]
        goal: Option<String>,
    },

    /// Activate a planned sprint
    Start {
        /// Sprint ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,
    },

    /// Complete an active sprint
    Complete {
        /// Sprint ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,
    },

    /// Delete a sprint
    Delete {
        /// Sprint ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,
    },

    /// List the tasks committed to a sprint
    Tasks {
        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        sprint_id: Uuid,
    },

    /// Commit a task to a sprint
    Assign {
        /// Task ID (UUID)
        task_id: Uuid,

        #[arg(long)]
        sprint_id: Uuid,
    },

    /// Pull a task out of its sprint
    Unassign {
        /// Task ID (UUID)
        task_id: Uuid,
    },
}

pub async fn run(action: SprintCommands, ctx: &AppContext) -> Result<Value, String> {
    let viewmodel = SprintPlanningViewModel::new(ctx.sprints.clone(), ctx.tasks.clone());

    match action {
        SprintCommands::List {
            workspace_id,
            cached: true,
        } => viewmodel.load_cached(workspace_id).await,
        SprintCommands::List {
            workspace_id,
            cached: false,
        } => viewmodel.refresh(workspace_id).await,
        SprintCommands::Create {
            workspace_id,
            name,
            start_date,
            end_date,
            goal,
        } => {
            let start_date = DateTime::from_timestamp(start_date, 0)
                .ok_or_else(|| "start_date is not a valid Unix timestamp".to_string())?;
            let end_date = DateTime::from_timestamp(end_date, 0)
                .ok_or_else(|| "end_date is not a valid Unix timestamp".to_string())?;
            let body = CreateSprintRequest {
                workspace_id,
                name,
                start_date,
                end_date,
                goal,
            };
            viewmodel.create(body).await;
        }
        SprintCommands::Start { id, workspace_id } => {
            viewmodel.load_cached(workspace_id).await;
            viewmodel.start(id).await;
        }
        SprintCommands::Complete { id, workspace_id } => {
            viewmodel.load_cached(workspace_id).await;
            viewmodel.complete(id).await;
        }
        SprintCommands::Delete { id, workspace_id } => {
            viewmodel.load_cached(workspace_id).await;
            viewmodel.delete(id).await;
        }
        SprintCommands::Tasks {
            workspace_id,
            sprint_id,
        } => {
            viewmodel.load_cached(workspace_id).await;
            viewmodel.select(sprint_id).await;
        }
        SprintCommands::Assign { task_id, sprint_id } => {
            viewmodel.assign_task(task_id, Some(sprint_id)).await;
        }
        SprintCommands::Unassign { task_id } => {
            viewmodel.assign_task(task_id, None).await;
        }
    }

    to_value(&viewmodel.state().await)
}
