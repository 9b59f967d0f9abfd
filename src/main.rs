use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod infrastructure;
mod services;
mod tools;
mod ui;

use cli::{Cli, Commands};
use commands::{deploy, theme};
use error::DeployError;

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Commands::Deploy) => {
            deploy::execute(cli.working_dir, cli.config, cli.dry_run).await?;
        }
        Some(Commands::Theme { input, output }) => {
            theme::execute(input, output).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging with LOGGING env var support
    // LOGGING=debug,info,warn,error or just LOGGING=debug
    // Default level is warn
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if cli.verbose {
                "debug".to_string()
            } else {
                "warn".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<DeployError>() {
            // git already printed why; just hand back its status
            Some(deploy_err) if deploy_err.reported_by_tool() => {
                tracing::debug!("{}", deploy_err);
                ExitCode::from(deploy_err.exit_code())
            }
            Some(deploy_err) => {
                ui::print_error(&format!("{:#}", err));
                ExitCode::from(deploy_err.exit_code())
            }
            None => {
                ui::print_error(&format!("{:#}", err));
                ExitCode::FAILURE
            }
        },
    }
}
