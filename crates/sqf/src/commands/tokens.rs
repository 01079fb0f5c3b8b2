//! Tokens command implementation.
//!
//! Shows how an expression is normalized and split into tokens.

use sqlfilter_rs::{normalize, tokenize, Token};

use super::{read_expression, CommandContext, Result};
use crate::commands::config::load_config;
use crate::output::{format_tokens_json, format_tokens_table};

/// Options for the tokens command.
#[derive(Debug, Default)]
pub struct TokensOptions {
    /// Expression to tokenize, or `None`/`-` for stdin.
    pub expression: Option<String>,
}

/// Result of tokenizing an expression.
#[derive(Debug)]
pub struct TokensResult {
    /// The normalized expression.
    pub normalized: String,
    /// Classified tokens, in order.
    pub tokens: Vec<Token>,
}

/// Executes the tokens command.
///
/// Tokenizing never fails; the expression is not checked against the grammar.
pub fn execute(ctx: &CommandContext, opts: &TokensOptions) -> Result<()> {
    let expression = read_expression(opts.expression.as_deref())?;
    let result = run_tokens(&expression);

    if ctx.json_output {
        println!("{}", format_tokens_json(&result)?);
    } else if !ctx.quiet {
        let config = load_config(ctx)?;
        print!("{}", format_tokens_table(&result, ctx.colors_enabled(&config)));
    }

    Ok(())
}

/// Normalizes and tokenizes an expression.
pub fn run_tokens(expression: &str) -> TokensResult {
    TokensResult {
        normalized: normalize(expression),
        tokens: tokenize(expression),
    }
}
