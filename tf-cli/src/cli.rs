use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tf")]
#[command(about = "Teamflow client - offline-first project management from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (overrides config and TF_SERVER_BASE_URL)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Acting user ID, sent as the X-User-Id header when no session exists
    #[arg(long, global = true)]
    pub(crate) user_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
