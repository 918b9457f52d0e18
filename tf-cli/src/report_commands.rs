use crate::commands::to_value;
use crate::context::AppContext;

use tf_api::resources::reports::{CreateReportRequest, UpdateReportRequest};
use tf_state::ReportsViewModel;

use chrono::NaiveDate;
use clap::Subcommand;
use serde_json::Value;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// List daily reports in a workspace
    List {
        /// Workspace ID (UUID)
        workspace_id: Uuid,

        /// Only the given day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Read the local cache only, skip the network
        #[arg(long)]
        cached: bool,
    },

    /// Submit a daily report
    Submit {
        #[arg(long)]
        workspace_id: Uuid,

        /// Report day (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// What was finished
        #[arg(long)]
        done: String,

        /// What comes next
        #[arg(long)]
        planned: String,

        #[arg(long)]
        blockers: Option<String>,
    },

    /// Update a report
    Update {
        /// Report ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        done: Option<String>,

        #[arg(long)]
        planned: Option<String>,

        #[arg(long)]
        blockers: Option<String>,
    },

    /// Delete a report
    Delete {
        /// Report ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,
    },
}

pub async fn run(action: ReportCommands, ctx: &AppContext) -> Result<Value, String> {
    let viewmodel = ReportsViewModel::new(ctx.reports.clone());

    match action {
        ReportCommands::List {
            workspace_id,
            date,
            cached: true,
        } => viewmodel.load_cached(workspace_id, date).await,
        ReportCommands::List {
            workspace_id,
            date,
            cached: false,
        } => viewmodel.refresh(workspace_id, date).await,
        ReportCommands::Submit {
            workspace_id,
            date,
            done,
            planned,
            blockers,
        } => {
            let body = CreateReportRequest {
                workspace_id,
                report_date: date,
                done,
                planned,
                blockers,
            };
            viewmodel.submit(body).await;
        }
        ReportCommands::Update {
            id,
            workspace_id,
            done,
            planned,
            blockers,
        } => {
            let body = UpdateReportRequest {
                done,
                planned,
                blockers,
            };
            viewmodel.load_cached(workspace_id, None).await;
            viewmodel.update(id, body).await;
        }
        ReportCommands::Delete { id, workspace_id } => {
            viewmodel.load_cached(workspace_id, None).await;
            viewmodel.delete(id).await;
        }
    }

    to_value(&viewmodel.state().await)
}
