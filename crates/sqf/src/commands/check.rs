//! Check command implementation.
//!
//! Validates a filter expression and reports whether it is well-formed.

use sqlfilter_rs::validate;
use tracing::debug;

use super::{read_expression, CommandContext, Result};
use crate::commands::config::load_config;
use crate::output::{format_check_json, format_check_text};

/// Options for the check command.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Expression to check, or `None`/`-` for stdin.
    pub expression: Option<String>,
}

/// Result of a successful check.
#[derive(Debug)]
pub struct CheckResult {
    /// The expression as given.
    pub expression: String,
    /// Number of tokens the expression was split into.
    pub token_count: usize,
}

/// Executes the check command.
///
/// An invalid expression is returned as an error so the process exits non-zero.
pub fn execute(ctx: &CommandContext, opts: &CheckOptions) -> Result<()> {
    let expression = read_expression(opts.expression.as_deref())?;
    let result = run_check(&expression)?;

    if ctx.json_output {
        println!("{}", format_check_json(&result)?);
    } else if !ctx.quiet {
        let config = load_config(ctx)?;
        print!("{}", format_check_text(&result, ctx.colors_enabled(&config)));
    }

    Ok(())
}

/// Validates an expression without printing anything.
pub fn run_check(expression: &str) -> Result<CheckResult> {
    let filter = validate(Some(expression))?;
    debug!(tokens = filter.tokens().len(), "expression is valid");

    Ok(CheckResult {
        expression: expression.to_string(),
        token_count: filter.tokens().len(),
    })
}
