//! Field catalog output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use sqlfilter_rs::FieldType;

use crate::commands::fields::FieldRow;

/// JSON output structure for the fields command.
#[derive(Serialize)]
pub struct FieldsListOutput<'a> {
    pub fields: Vec<FieldOutput<'a>>,
}

/// JSON output structure for a single field.
#[derive(Serialize)]
pub struct FieldOutput<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub column: &'a str,
    pub operations: Vec<&'a str>,
}

/// Symbols of the operations a field accepts.
fn operation_symbols(row: &FieldRow) -> Vec<&'static str> {
    row.descriptor
        .operations
        .iter()
        .filter(|op| row.descriptor.allows(**op))
        .map(|op| op.symbol())
        .collect()
}

/// Formats fields as JSON.
pub fn format_fields_json(rows: &[FieldRow]) -> Result<String, serde_json::Error> {
    let fields = rows
        .iter()
        .map(|row| FieldOutput {
            name: row.descriptor.name,
            field_type: row.descriptor.field_type,
            column: &row.column,
            operations: operation_symbols(row),
        })
        .collect();

    serde_json::to_string_pretty(&FieldsListOutput { fields })
}

/// Formats fields as a table.
pub fn format_fields_table(rows: &[FieldRow], use_colors: bool) -> String {
    let mut output = String::new();

    let header = format!(
        "{:<10} {:<10} {:<20} {}",
        "Field", "Type", "Column", "Operations"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for row in rows {
        let name = format!("{:<10}", row.descriptor.name);
        let name = if use_colors {
            name.bold().to_string()
        } else {
            name
        };
        let line = format!(
            "{} {:<10} {:<20} {}",
            name,
            row.descriptor.field_type.to_string(),
            row.column,
            operation_symbols(row).join(" ")
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}
