//! Error types for checking and translating filter expressions.

use thiserror::Error;

/// A specialized Result type for grammar checking.
pub type GrammarResult<T> = Result<T, GrammarError>;

/// A specialized Result type for translation, which can fail either way.
pub type FilterResult<T> = Result<T, FilterError>;

/// The expression is not a legal filter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GrammarError {
    /// A `)` was found with no matching `(`.
    #[error("unmatched closing bracket")]
    UnmatchedCloseBracket,

    /// Input ended while a `(` was still open.
    #[error("unclosed bracket")]
    UnclosedBracket,

    /// A bracket pair did not contain one complete condition.
    #[error("bracket does not enclose a complete condition: ({form})")]
    IncompleteBracket {
        /// The reduction form found inside the bracket.
        form: String,
    },

    /// The token sequence does not match any legal form.
    #[error("unexpected {token:?} in expression (form: {form})")]
    UnexpectedToken {
        /// The offending token text.
        token: String,
        /// The reduction form that was rejected.
        form: String,
    },

    /// Input ended before the expression was complete.
    #[error("incomplete expression (form: {form})")]
    IncompleteExpression {
        /// The reduction form left at end of input.
        form: String,
    },

    /// A condition names a field that is not in the catalog.
    #[error("unknown field: {name}{}", .suggestion.as_ref().map(|s| format!(" (did you mean {s}?)")).unwrap_or_default())]
    UnknownField {
        /// The unrecognized field name.
        name: String,
        /// The closest known field, if any is close enough.
        suggestion: Option<String>,
    },

    /// An operation token could not be resolved.
    #[error("unknown operation: {symbol}")]
    UnknownOperation {
        /// The unrecognized operation text.
        symbol: String,
    },

    /// The operation is not allowed for the field's type.
    #[error("operation {operation} is not allowed for {field} ({field_type})")]
    OperationNotAllowed {
        /// The operation symbol.
        operation: String,
        /// The field name.
        field: String,
        /// The field's semantic type.
        field_type: String,
    },

    /// The value does not parse under the field type's rules.
    #[error("invalid value {value} for {field}: expected {expected}")]
    InvalidValue {
        /// The field name.
        field: String,
        /// The raw value text.
        value: String,
        /// What the field type expects.
        expected: &'static str,
    },
}

impl GrammarError {
    /// Creates an unexpected token error.
    pub fn unexpected_token(token: impl Into<String>, form: impl Into<String>) -> Self {
        GrammarError::UnexpectedToken {
            token: token.into(),
            form: form.into(),
        }
    }

    /// Creates an incomplete expression error.
    pub fn incomplete(form: impl Into<String>) -> Self {
        GrammarError::IncompleteExpression { form: form.into() }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        GrammarError::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected,
        }
    }
}

/// The expression is a legal filter but could not be rendered as SQL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationError {
    /// A timestamp literal could not be re-parsed for rendering.
    #[error("cannot render timestamp {value} as SQL")]
    InvalidTimestamp {
        /// The raw value text.
        value: String,
    },

    /// A value was found without the field that owns it.
    #[error("value {value} is not attached to a field")]
    DetachedValue {
        /// The raw value text.
        value: String,
    },

    /// A column mapping names a field that is not in the catalog.
    #[error("no field named {name} to map to a column")]
    UnknownField {
        /// The unrecognized field name.
        name: String,
    },

    /// A column mapping has an empty column name.
    #[error("empty column name for {field}")]
    EmptyColumn {
        /// The field being mapped.
        field: String,
    },
}

/// Errors that can occur while translating a filter expression to SQL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The input is not a legal filter.
    #[error("invalid filter: {0}")]
    Grammar(#[from] GrammarError),

    /// The input is legal but could not be rendered.
    #[error("translation failed: {0}")]
    Translation(#[from] TranslationError),
}

impl FilterError {
    /// Returns true if the input itself was rejected.
    pub fn is_grammar(&self) -> bool {
        matches!(self, FilterError::Grammar(_))
    }
}
