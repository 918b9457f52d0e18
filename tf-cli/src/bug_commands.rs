use crate::commands::to_value;
use crate::context::AppContext;

use tf_api::resources::bugs::{CreateBugRequest, UpdateBugRequest};
use tf_core::{BugSeverity, BugStatus};
use tf_state::TaskDetailViewModel;

use clap::Subcommand;
use serde_json::Value;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum BugCommands {
    /// File a bug against a task
    Report {
        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        task_id: Uuid,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// minor | major | critical
        #[arg(long)]
        severity: Option<String>,

        #[arg(long)]
        assignee_id: Option<Uuid>,
    },

    /// Update a bug
    Update {
        /// Bug ID (UUID)
        id: Uuid,

        #[arg(long)]
        task_id: Uuid,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// open | in_progress | resolved | closed
        #[arg(long)]
        status: Option<String>,

        /// minor | major | critical
        #[arg(long)]
        severity: Option<String>,

        #[arg(long)]
        assignee_id: Option<Uuid>,
    },

    /// Delete a bug
    Delete {
        /// Bug ID (UUID)
        id: Uuid,

        #[arg(long)]
        task_id: Uuid,
    },
}

pub async fn run(action: BugCommands, ctx: &AppContext) -> Result<Value, String> {
    let viewmodel = TaskDetailViewModel::new(ctx.tasks.clone(), ctx.bugs.clone());

    match action {
        BugCommands::Report {
            workspace_id,
            task_id,
            title,
            description,
            severity,
            assignee_id,
        } => {
            let mut body = CreateBugRequest::new(workspace_id, title);
            body.description = description;
            body.severity = severity
                .map(|s| s.parse::<BugSeverity>().map_err(|e| e.to_string()))
                .transpose()?;
            body.assignee_id = assignee_id;
            viewmodel.open(task_id).await;
            viewmodel.report_bug(body, task_id).await;
        }
        BugCommands::Update {
            id,
            task_id,
            title,
            description,
            status,
            severity,
            assignee_id,
        } => {
            let body = UpdateBugRequest {
                title,
                description,
                status: status
                    .map(|s| s.parse::<BugStatus>().map_err(|e| e.to_string()))
                    .transpose()?,
                severity: severity
                    .map(|s| s.parse::<BugSeverity>().map_err(|e| e.to_string()))
                    .transpose()?,
                assignee_id,
                task_id: None,
            };
            viewmodel.open(task_id).await;
            viewmodel.update_bug(id, task_id, body).await;
        }
        BugCommands::Delete { id, task_id } => {
            viewmodel.open(task_id).await;
            viewmodel.delete_bug(id, task_id).await;
        }
    }

    to_value(&viewmodel.state().await)
}
