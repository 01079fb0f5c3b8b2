//! Entry points for validating filter expressions.

use tracing::debug;

use crate::error::GrammarResult;
use crate::lexer::{tokenize, Token};
use crate::reducer::reduce;

/// A token stream that passed the grammar and consistency checks.
///
/// Only [`validate`] produces one, so holding a `CheckedFilter` means the
/// expression is a legal filter. An empty filter stands for an absent or blank
/// expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckedFilter {
    tokens: Vec<Token>,
}

impl CheckedFilter {
    /// The validated tokens in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns true for an absent or blank expression.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Validates an expression and returns its checked token stream.
///
/// # Errors
///
/// Returns a [`GrammarError`](crate::GrammarError) for unbalanced brackets,
/// token sequences outside the grammar, unknown fields, operations not allowed
/// for a field's type, and malformed values.
pub fn validate(expression: Option<&str>) -> GrammarResult<CheckedFilter> {
    let Some(expression) = expression.map(str::trim).filter(|e| !e.is_empty()) else {
        return Ok(CheckedFilter::default());
    };

    let tokens = tokenize(expression);
    reduce(&tokens)?;
    debug!(expression, tokens = tokens.len(), "filter accepted");

    Ok(CheckedFilter { tokens })
}

/// Checks that an expression is a legal filter.
///
/// Absent, empty and blank expressions are legal. This never returns
/// `Ok(false)`: a malformed expression is an error. Use [`is_valid`] for a
/// plain predicate.
///
/// # Example
///
/// ```
/// use sqlfilter_rs::check;
///
/// assert_eq!(check(Some("TITLE LIKE '123%'")), Ok(true));
/// assert_eq!(check(None), Ok(true));
/// assert!(check(Some("TITLE LIKE 10")).is_err());
/// ```
pub fn check(expression: Option<&str>) -> GrammarResult<bool> {
    validate(expression).map(|_| true)
}

/// Returns true if [`check`] accepts the expression.
pub fn is_valid(expression: Option<&str>) -> bool {
    check(expression).is_ok()
}
