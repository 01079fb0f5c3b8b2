use clap::Parser;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::{CommandContext, CommandError};
use dispatch::{Command, Dispatch};
use sqlfilter_rs::FilterError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(error_exit_code(&e))
        }
    }
}

/// Sets up logging to stderr. `RUST_LOG` overrides the flag-derived level.
fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else if cli.quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);
    Dispatch::from_cli(cli).execute(&ctx)
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Filter(FilterError::Grammar(_)) => "GRAMMAR_ERROR",
        CommandError::Filter(FilterError::Translation(_)) => "TRANSLATION_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> u8 {
    match e {
        CommandError::Filter(FilterError::Grammar(_)) => 1,
        CommandError::Filter(FilterError::Translation(_)) => 2,
        CommandError::Io(_) => 3,
        CommandError::Config(_) => 5,
        CommandError::Json(_) => 1,
    }
}
