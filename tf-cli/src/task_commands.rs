use crate::commands::to_value;
use crate::context::AppContext;

use tf_api::resources::tasks::{CreateTaskRequest, UpdateTaskRequest};
use tf_core::{Priority, TaskStatus};
use tf_state::{BoardViewModel, TaskDetailViewModel};

use clap::Subcommand;
use serde_json::Value;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Show one task with the bugs filed against it
    Show {
        /// Task ID (UUID)
        id: Uuid,
    },

    /// Create a task
    Create {
        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        epic_id: Option<Uuid>,

        #[arg(long)]
        sprint_id: Option<Uuid>,

        /// backlog | todo | in_progress | in_review | done
        #[arg(long)]
        status: Option<String>,

        /// low | medium | high | urgent
        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        assignee_id: Option<Uuid>,
    },

    /// Update a task's fields
    Update {
        /// Task ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// backlog | todo | in_progress | in_review | done
        #[arg(long)]
        status: Option<String>,

        /// low | medium | high | urgent
        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        assignee_id: Option<Uuid>,

        #[arg(long)]
        epic_id: Option<Uuid>,

        #[arg(long)]
        sprint_id: Option<Uuid>,
    },

    /// Move a task into another status column
    Move {
        /// Task ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,

        /// backlog | todo | in_progress | in_review | done
        #[arg(long)]
        status: String,
    },

    /// Delete a task
    Delete {
        /// Task ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,
    },
}

pub async fn run(action: TaskCommands, ctx: &AppContext) -> Result<Value, String> {
    let viewmodel = BoardViewModel::new(ctx.tasks.clone(), ctx.epics.clone());

    match action {
        TaskCommands::Show { id } => {
            let detail = TaskDetailViewModel::new(ctx.tasks.clone(), ctx.bugs.clone());
            detail.open(id).await;
            return to_value(&detail.state().await);
        }
        TaskCommands::Create {
            workspace_id,
            title,
            description,
            epic_id,
            sprint_id,
            status,
            priority,
            assignee_id,
        } => {
            let mut body = CreateTaskRequest::new(workspace_id, title);
            body.description = description;
            body.epic_id = epic_id;
            body.sprint_id = sprint_id;
            body.status = parse_opt::<TaskStatus>(status)?;
            body.priority = parse_opt::<Priority>(priority)?;
            body.assignee_id = assignee_id;
            viewmodel.create_task(body).await;
        }
        TaskCommands::Update {
            id,
            workspace_id,
            title,
            description,
            status,
            priority,
            assignee_id,
            epic_id,
            sprint_id,
        } => {
            let body = UpdateTaskRequest {
                title,
                description,
                status: parse_opt::<TaskStatus>(status)?,
                priority: parse_opt::<Priority>(priority)?,
                assignee_id,
                epic_id,
                sprint_id,
                due_date: None,
            };
            viewmodel.load_cached(workspace_id).await;
            viewmodel.update_task(id, body).await;
        }
        TaskCommands::Move {
            id,
            workspace_id,
            status,
        } => {
            let status = status.parse::<TaskStatus>().map_err(|e| e.to_string())?;
            viewmodel.load_cached(workspace_id).await;
            viewmodel.move_task(id, status).await;
        }
        TaskCommands::Delete { id, workspace_id } => {
            viewmodel.load_cached(workspace_id).await;
            viewmodel.delete_task(id).await;
        }
    }

    to_value(&viewmodel.state().await)
}

fn parse_opt<T: std::str::FromStr>(value: Option<String>) -> Result<Option<T>, String>
where
    T::Err: std::fmt::Display,
{
    value
        .map(|v| v.parse().map_err(|e: T::Err| e.to_string()))
        .transpose()
}
