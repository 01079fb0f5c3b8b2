//! Command dispatch module for routing CLI commands to their handlers.

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for dispatchable commands.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// A parsed command, borrowing its arguments from the CLI.
pub enum Dispatch<'a> {
    Check {
        expression: &'a Option<String>,
    },
    Translate {
        expression: &'a Option<String>,
        columns: &'a [(String, String)],
    },
    Tokens {
        expression: &'a Option<String>,
    },
    Fields,
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> Dispatch<'a> {
    /// Create a dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            Some(Commands::Check { expression }) => Self::Check { expression },
            Some(Commands::Translate {
                expression,
                columns,
            }) => Self::Translate {
                expression,
                columns,
            },
            Some(Commands::Tokens { expression }) => Self::Tokens { expression },
            Some(Commands::Fields) => Self::Fields,
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(shell),
            None => Self::Help,
        }
    }
}

impl Command for Dispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Check { expression } => {
                let opts = commands::check::CheckOptions {
                    expression: (*expression).clone(),
                };
                commands::check::execute(ctx, &opts)
            }
            Self::Translate {
                expression,
                columns,
            } => {
                let opts = commands::translate::TranslateOptions {
                    expression: (*expression).clone(),
                    columns: columns.to_vec(),
                };
                commands::translate::execute(ctx, &opts)
            }
            Self::Tokens { expression } => {
                let opts = commands::tokens::TokensOptions {
                    expression: (*expression).clone(),
                };
                commands::tokens::execute(ctx, &opts)
            }
            Self::Fields => commands::fields::execute(ctx),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("sqf - filter expression checker and SQL translator");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Init { force }) => commands::config::execute_init(ctx, *force),
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}
