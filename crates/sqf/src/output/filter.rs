//! Check and translate output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::check::CheckResult;
use crate::commands::translate::TranslateResult;

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub valid: bool,
    pub expression: &'a str,
}

/// Formats a check result as JSON.
pub fn format_check_json(result: &CheckResult) -> Result<String, serde_json::Error> {
    let output = CheckOutput {
        valid: true,
        expression: &result.expression,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a check result as a single status line.
pub fn format_check_text(result: &CheckResult, use_colors: bool) -> String {
    let status = if use_colors {
        "✓".green().to_string()
    } else {
        "✓".to_string()
    };

    if result.token_count == 0 {
        format!("{} Valid (empty filter)\n", status)
    } else {
        format!("{} Valid ({} tokens)\n", status, result.token_count)
    }
}

/// JSON output structure for the translate command.
#[derive(Serialize)]
pub struct TranslateOutput<'a> {
    pub expression: &'a str,
    pub sql: &'a str,
}

/// Formats a translation as JSON.
pub fn format_translate_json(result: &TranslateResult) -> Result<String, serde_json::Error> {
    let output = TranslateOutput {
        expression: &result.expression,
        sql: &result.sql,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a translation as plain SQL, one line.
///
/// Only the SQL is printed so the output can be piped into other tools.
pub fn format_translate_text(result: &TranslateResult, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", result.sql.cyan())
    } else {
        format!("{}\n", result.sql)
    }
}
