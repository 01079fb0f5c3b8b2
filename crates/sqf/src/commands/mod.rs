//! Command implementations for the sqf CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod check;
pub mod completions;
pub mod config;
pub mod fields;
pub mod tokens;
pub mod translate;

use std::io::{self, Read};
use std::path::PathBuf;

use sqlfilter_rs::{FilterError, GrammarError};

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The expression is invalid or could not be translated.
    #[error("{0}")]
    Filter(#[from] FilterError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<GrammarError> for CommandError {
    fn from(err: GrammarError) -> Self {
        CommandError::Filter(err.into())
    }
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Explicit config file path, if given.
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            config_path: cli.config.clone(),
        }
    }

    /// Combines the `--no-color` flag with the configured color preference.
    pub fn colors_enabled(&self, config: &config::Config) -> bool {
        self.use_colors && config.output.color.unwrap_or(true)
    }
}

/// Returns the expression argument, reading stdin when it is absent or `-`.
pub fn read_expression(expression: Option<&str>) -> Result<String> {
    match expression {
        Some(expression) if expression != "-" => Ok(expression.to_string()),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}
