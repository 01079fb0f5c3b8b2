//! Translate command implementation.
//!
//! Checks a filter expression and prints the equivalent SQL WHERE fragment.

use sqlfilter_rs::{validate, FilterError, FilterTranslator};
use tracing::debug;

use super::{read_expression, CommandContext, CommandError, Result};
use crate::commands::config::{load_config, Config};
use crate::output::{format_translate_json, format_translate_text};

/// Options for the translate command.
#[derive(Debug, Default)]
pub struct TranslateOptions {
    /// Expression to translate, or `None`/`-` for stdin.
    pub expression: Option<String>,
    /// Column overrides from `--column FIELD=COLUMN`, applied after config.
    pub columns: Vec<(String, String)>,
}

/// Result of a translation.
#[derive(Debug)]
pub struct TranslateResult {
    /// The expression as given.
    pub expression: String,
    /// The SQL fragment.
    pub sql: String,
}

/// Executes the translate command.
pub fn execute(ctx: &CommandContext, opts: &TranslateOptions) -> Result<()> {
    let config = load_config(ctx)?;
    let translator = build_translator(&config, &opts.columns)?;
    let expression = read_expression(opts.expression.as_deref())?;
    let result = run_translate(&translator, &expression)?;

    if ctx.json_output {
        println!("{}", format_translate_json(&result)?);
    } else if !ctx.quiet {
        print!("{}", format_translate_text(&result, ctx.colors_enabled(&config)));
    }

    Ok(())
}

/// Builds a translator from config overrides, then command-line overrides.
pub fn build_translator(config: &Config, columns: &[(String, String)]) -> Result<FilterTranslator> {
    columns
        .iter()
        .try_fold(config.translator()?, |translator, (field, column)| {
            debug!(field = %field, column = %column, "column override");
            translator
                .with_column(field, column.as_str())
                .map_err(|e| CommandError::Config(format!("Invalid --column: {}", e)))
        })
}

/// Translates an expression without printing anything.
pub fn run_translate(translator: &FilterTranslator, expression: &str) -> Result<TranslateResult> {
    let filter = validate(Some(expression))?;
    let sql = translator.render(&filter).map_err(FilterError::from)?;

    Ok(TranslateResult {
        expression: expression.to_string(),
        sql,
    })
}
