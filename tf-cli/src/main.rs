//! tf - Teamflow CLI
//!
//! The terminal surface of the Teamflow client. Each subcommand drives a
//! view-model and prints the resulting UI state as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! tf auth login --email dev@example.com --password secret
//!
//! # Show the board, straight from the local cache
//! tf board show <workspace-uuid> --cached --pretty
//!
//! # Move a task
//! tf task move <task-uuid> --workspace-id <workspace-uuid> --status done
//! ```

mod auth_commands;
mod board_commands;
mod bug_commands;
mod channel_commands;
mod cli;
mod commands;
mod context;
mod epic_commands;
mod logger;
mod member_commands;
mod message_commands;
mod notification_commands;
mod report_commands;
mod sprint_commands;
mod task_commands;
mod workspace_commands;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::context::AppContext;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tf_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Flags beat config and environment
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }
    if let Some(user_id) = cli.user_id {
        config.session.user_id = Some(user_id);
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    let log_file = config.log_path().ok().flatten();
    if let Err(e) = logger::initialize(
        config.logging.level,
        log_file,
        std::io::stderr().is_terminal(),
    ) {
        eprintln!("Error initializing logger: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let ctx = match AppContext::build(config).await {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Auth { action } => auth_commands::run(action, &ctx).await,
        Commands::Workspace { action } => workspace_commands::run(action, &ctx).await,
        Commands::Board { action } => board_commands::run(action, &ctx).await,
        Commands::Task { action } => task_commands::run(action, &ctx).await,
        Commands::Bug { action } => bug_commands::run(action, &ctx).await,
        Commands::Epic { action } => epic_commands::run(action, &ctx).await,
        Commands::Sprint { action } => sprint_commands::run(action, &ctx).await,
        Commands::Notification { action } => notification_commands::run(action, &ctx).await,
        Commands::Channel { action } => channel_commands::run(action, &ctx).await,
        Commands::Message { action } => message_commands::run(action, &ctx).await,
        Commands::Report { action } => report_commands::run(action, &ctx).await,
        Commands::Member { action } => member_commands::run(action, &ctx).await,
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    // A state carrying an error still prints, but scripts
                    // get a failing exit code.
                    if value.get("error").is_some_and(|e| !e.is_null()) {
                        ExitCode::FAILURE
                    } else {
                        ExitCode::SUCCESS
                    }
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
