//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the sqf CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// sqf - Check filter expressions and translate them to SQL
#[derive(Parser, Debug)]
#[command(name = "sqf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use (default: ~/.config/sqf/config.toml)
    #[arg(long, global = true, env = "SQF_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that an expression is a valid filter
    #[command(alias = "c")]
    Check {
        /// Filter expression (read from stdin when omitted or "-")
        expression: Option<String>,
    },

    /// Translate an expression to a SQL WHERE fragment
    #[command(alias = "sql")]
    Translate {
        /// Filter expression (read from stdin when omitted or "-")
        expression: Option<String>,

        /// Override a field's SQL column (repeatable), e.g. TITLE=a.title
        #[arg(short, long = "column", value_name = "FIELD=COLUMN", value_parser = parse_column_mapping)]
        columns: Vec<(String, String)>,
    },

    /// Show how an expression is tokenized
    Tokens {
        /// Filter expression (read from stdin when omitted or "-")
        expression: Option<String>,
    },

    /// List the fields that can be filtered on
    #[command(alias = "f")]
    Fields,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print config file path
    Path,
}

/// Parses a `FIELD=COLUMN` pair.
fn parse_column_mapping(s: &str) -> Result<(String, String), String> {
    let (field, column) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid mapping '{s}': expected FIELD=COLUMN"))?;
    let (field, column) = (field.trim(), column.trim());
    if field.is_empty() || column.is_empty() {
        return Err(format!("invalid mapping '{s}': expected FIELD=COLUMN"));
    }
    Ok((field.to_string(), column.to_string()))
}
