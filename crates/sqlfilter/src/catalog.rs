//! The fixed catalog of filterable fields and the rules attached to their types.

use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;
use strsim::levenshtein;

use crate::error::{GrammarError, GrammarResult, TranslationError};

/// Input format of timestamp literals (`dd.MM.yyyy HH:mm`).
pub const INPUT_TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Format used when rendering timestamp literals as SQL (`yyyy-MM-dd HH:mm:ss`).
pub const SQL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum Levenshtein distance to consider a field name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

const QUOTE: char = '\'';

/// A comparison operation between a field and a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = "LIKE")]
    Like,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 6] = [
        Operation::GreaterThan,
        Operation::LessThan,
        Operation::Equal,
        Operation::GreaterOrEqual,
        Operation::LessOrEqual,
        Operation::Like,
    ];

    /// Returns the canonical symbolic form.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::GreaterThan => ">",
            Operation::LessThan => "<",
            Operation::Equal => "=",
            Operation::GreaterOrEqual => ">=",
            Operation::LessOrEqual => "<=",
            Operation::Like => "LIKE",
        }
    }

    /// Resolves an operation from its symbolic form. `LIKE` is matched case-insensitively.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

const ORDERING_OPERATIONS: &[Operation] = &[
    Operation::GreaterThan,
    Operation::LessThan,
    Operation::Equal,
    Operation::GreaterOrEqual,
    Operation::LessOrEqual,
];

const TEXT_OPERATIONS: &[Operation] = &[
    Operation::GreaterThan,
    Operation::LessThan,
    Operation::Equal,
    Operation::GreaterOrEqual,
    Operation::LessOrEqual,
    Operation::Like,
];

/// Semantic type of a field. Decides legal operations, value syntax and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-quoted string literal.
    Text,
    /// Signed 32-bit integer literal.
    Integer,
    /// Single-quoted `dd.MM.yyyy HH:mm` literal.
    Timestamp,
}

impl FieldType {
    /// Operations legal for any field of this type.
    pub fn allowed_operations(self) -> &'static [Operation] {
        match self {
            FieldType::Text => TEXT_OPERATIONS,
            FieldType::Integer | FieldType::Timestamp => ORDERING_OPERATIONS,
        }
    }

    /// Returns true if values of this type are written as quoted literals.
    ///
    /// The tokenizer uses this to decide whether the upcoming value may contain spaces.
    pub fn is_quoted(self) -> bool {
        matches!(self, FieldType::Text | FieldType::Timestamp)
    }

    /// Human-readable description of the expected value syntax.
    pub fn expected(self) -> &'static str {
        match self {
            FieldType::Text => "a single-quoted string",
            FieldType::Integer => "an integer",
            FieldType::Timestamp => "a single-quoted 'dd.MM.yyyy HH:mm' timestamp",
        }
    }

    /// Checks that `value` is a literal of this type.
    pub fn validate(self, field: &str, value: &str) -> GrammarResult<()> {
        let valid = match self {
            FieldType::Integer => value.parse::<i32>().is_ok(),
            FieldType::Text => unquote(value).is_some(),
            FieldType::Timestamp => unquote(value).and_then(parse_timestamp).is_some(),
        };
        if valid {
            Ok(())
        } else {
            Err(GrammarError::invalid_value(field, value, self.expected()))
        }
    }

    /// Renders a validated literal as SQL. Only timestamps are rewritten.
    pub fn render(self, value: &str) -> Result<Cow<'_, str>, TranslationError> {
        match self {
            FieldType::Text | FieldType::Integer => Ok(Cow::Borrowed(value)),
            FieldType::Timestamp => {
                let timestamp = unquote(value).and_then(parse_timestamp).ok_or_else(|| {
                    TranslationError::InvalidTimestamp {
                        value: value.to_string(),
                    }
                })?;
                Ok(Cow::Owned(format!(
                    "'{}'",
                    timestamp.format(SQL_TIMESTAMP_FORMAT)
                )))
            }
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}

/// Returns the body of a single-quoted literal.
fn unquote(value: &str) -> Option<&str> {
    value
        .strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE))
}

/// Parses a timestamp body that matches the input pattern exactly.
///
/// The body must format back to itself, so every field is zero-padded.
fn parse_timestamp(body: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(body, INPUT_TIMESTAMP_FORMAT)
        .ok()
        .filter(|ts| ts.format(INPUT_TIMESTAMP_FORMAT).to_string() == body)
}

/// A filterable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Canonical (upper-case) field name.
    pub name: &'static str,
    /// Semantic type of the field.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Default SQL column the field translates to.
    pub sql_column: &'static str,
    /// Operations the field accepts.
    pub operations: &'static [Operation],
}

impl FieldDescriptor {
    /// Returns true if both the field and its type accept `operation`.
    pub fn allows(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
            && self.field_type.allowed_operations().contains(&operation)
    }
}

static FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor {
        name: "TITLE",
        field_type: FieldType::Text,
        sql_column: "ARTICLE.TITLE",
        operations: TEXT_OPERATIONS,
    },
    FieldDescriptor {
        name: "NAME",
        field_type: FieldType::Text,
        sql_column: "ARTICLE.NAME",
        operations: TEXT_OPERATIONS,
    },
    FieldDescriptor {
        name: "WEIGHT",
        field_type: FieldType::Integer,
        sql_column: "ARTICLE.WEIGHT",
        operations: ORDERING_OPERATIONS,
    },
    FieldDescriptor {
        name: "POSTDATE",
        field_type: FieldType::Timestamp,
        sql_column: "ARTICLE_POST_DATE",
        operations: ORDERING_OPERATIONS,
    },
];

/// Lookup into the static field catalog.
pub struct FieldCatalog;

impl FieldCatalog {
    /// All known fields.
    pub fn fields() -> &'static [FieldDescriptor] {
        &FIELDS
    }

    /// Finds a field by name, case-insensitively.
    pub fn lookup(name: &str) -> Option<&'static FieldDescriptor> {
        FIELDS
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// Finds the closest known field name for an unrecognized one.
    pub fn suggest(name: &str) -> Option<&'static str> {
        let query = name.to_uppercase();
        let (best, distance) = FIELDS
            .iter()
            .map(|field| (field.name, levenshtein(&query, field.name)))
            .min_by_key(|(_, d)| *d)?;

        if distance > 0 && distance <= MAX_SUGGESTION_DISTANCE {
            Some(best)
        } else {
            None
        }
    }
}
