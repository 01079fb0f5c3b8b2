//! Fields command implementation.
//!
//! Lists the filterable fields with their types, columns and operations.

use sqlfilter_rs::FieldDescriptor;

use super::{CommandContext, Result};
use crate::commands::config::load_config;
use crate::commands::translate::build_translator;
use crate::output::{format_fields_json, format_fields_table};

/// A field together with the column it translates to under the current config.
#[derive(Debug)]
pub struct FieldRow {
    pub descriptor: &'static FieldDescriptor,
    pub column: String,
}

/// Executes the fields command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = load_config(ctx)?;
    let translator = build_translator(&config, &[])?;

    let rows: Vec<FieldRow> = sqlfilter_rs::FieldCatalog::fields()
        .iter()
        .map(|descriptor| FieldRow {
            descriptor,
            column: translator.column(descriptor).to_string(),
        })
        .collect();

    if ctx.json_output {
        println!("{}", format_fields_json(&rows)?);
    } else if !ctx.quiet {
        print!("{}", format_fields_table(&rows, ctx.colors_enabled(&config)));
    }

    Ok(())
}
