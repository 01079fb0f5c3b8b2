//! Shift/reduce grammar checker over token-kind symbols.
//!
//! The reducer keeps a *form*: the space-joined kind symbols seen so far at
//! the current bracket depth. After each token the form must either be one of
//! the complete forms, which collapse to [`CONDENSED_EXPRESSION`], or one of
//! the legal incomplete forms. Anything else is rejected on the spot.
//!
//! # Grammar
//!
//! ```text
//! complete:    FIELD OPERATION VALUE
//!              CONDENSED_EXPRESSION LOGOPER FIELD OPERATION VALUE
//!              CONDENSED_EXPRESSION LOGOPER CONDENSED_EXPRESSION
//! incomplete:  (empty)
//!              FIELD
//!              FIELD OPERATION
//!              CONDENSED_EXPRESSION
//!              CONDENSED_EXPRESSION LOGOPER
//!              CONDENSED_EXPRESSION LOGOPER FIELD
//!              CONDENSED_EXPRESSION LOGOPER FIELD OPERATION
//! ```
//!
//! A bracket suspends the current form in a bracket frame; the matching `)`
//! requires the interior to have condensed, then splices a single
//! `CONDENSED_EXPRESSION` back into the suspended form.

use std::mem;

use tracing::trace;

use crate::catalog::FieldCatalog;
use crate::error::{GrammarError, GrammarResult};
use crate::lexer::{Token, TokenKind};
use crate::validator::check_condition;

/// The atomic symbol for a fully reduced sub-expression.
pub const CONDENSED_EXPRESSION: &str = "CONDENSED_EXPRESSION";

const COMPLETE_FORMS: [&str; 3] = [
    "FIELD OPERATION VALUE",
    "CONDENSED_EXPRESSION LOGOPER FIELD OPERATION VALUE",
    "CONDENSED_EXPRESSION LOGOPER CONDENSED_EXPRESSION",
];

const INCOMPLETE_FORMS: [&str; 7] = [
    "",
    "FIELD",
    "FIELD OPERATION",
    "CONDENSED_EXPRESSION",
    "CONDENSED_EXPRESSION LOGOPER",
    "CONDENSED_EXPRESSION LOGOPER FIELD",
    "CONDENSED_EXPRESSION LOGOPER FIELD OPERATION",
];

/// Collapses a complete form, keeps a legal incomplete one, rejects the rest.
fn condense(form: &str) -> Option<String> {
    if COMPLETE_FORMS.contains(&form) {
        Some(CONDENSED_EXPRESSION.to_string())
    } else if INCOMPLETE_FORMS.contains(&form) {
        Some(form.to_string())
    } else {
        None
    }
}

fn join(form: &str, symbol: &str) -> String {
    if form.is_empty() {
        symbol.to_string()
    } else {
        format!("{form} {symbol}")
    }
}

fn looks_like_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(char::is_alphabetic)
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// The form that was active outside an open bracket.
#[derive(Debug)]
struct BracketFrame {
    outer: String,
}

/// Incremental grammar checker. One instance per expression.
#[derive(Debug, Default)]
pub struct Reducer {
    form: String,
    frames: Vec<BracketFrame>,
    field: Option<String>,
    operation: Option<String>,
}

impl Reducer {
    /// Creates an empty reducer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current form.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Consumes one token.
    pub fn push(&mut self, token: &Token) -> GrammarResult<()> {
        match token.kind {
            TokenKind::OpenParen => self.open_bracket(token),
            TokenKind::CloseParen => self.close_bracket(token),
            TokenKind::Field => {
                self.field = Some(token.text.clone());
                self.shift("FIELD", token)
            }
            TokenKind::Operation => {
                self.operation = Some(token.text.clone());
                self.shift("OPERATION", token)
            }
            TokenKind::LogicalOperator => self.shift("LOGOPER", token),
            TokenKind::Value => {
                self.shift("VALUE", token)?;
                self.validate_condition(&token.text)
            }
        }
    }

    /// Checks that the token stream ended on a complete expression.
    pub fn finish(self) -> GrammarResult<()> {
        if !self.frames.is_empty() {
            return Err(GrammarError::UnclosedBracket);
        }
        if self.form != CONDENSED_EXPRESSION {
            return Err(GrammarError::incomplete(self.form));
        }
        Ok(())
    }

    /// Appends a symbol and condenses.
    fn shift(&mut self, symbol: &str, token: &Token) -> GrammarResult<()> {
        let candidate = join(&self.form, symbol);
        let condensed = condense(&candidate).ok_or_else(|| self.reject(token, &candidate))?;
        trace!(token = %token.text, form = %candidate, condensed = %condensed, "shift");
        self.form = condensed;
        Ok(())
    }

    fn open_bracket(&mut self, token: &Token) -> GrammarResult<()> {
        // The bracket will come back as one condensed symbol; it must fit here.
        let spliced = join(&self.form, CONDENSED_EXPRESSION);
        if condense(&spliced).is_none() {
            return Err(GrammarError::unexpected_token(&token.text, &self.form));
        }
        let outer = mem::take(&mut self.form);
        trace!(outer = %outer, depth = self.frames.len() + 1, "open bracket");
        self.frames.push(BracketFrame { outer });
        Ok(())
    }

    fn close_bracket(&mut self, token: &Token) -> GrammarResult<()> {
        let frame = self
            .frames
            .pop()
            .ok_or(GrammarError::UnmatchedCloseBracket)?;
        let inner = mem::replace(&mut self.form, frame.outer);
        if inner != CONDENSED_EXPRESSION {
            return Err(GrammarError::IncompleteBracket { form: inner });
        }
        trace!(depth = self.frames.len(), "close bracket");
        self.shift(CONDENSED_EXPRESSION, token)
    }

    fn validate_condition(&self, value: &str) -> GrammarResult<()> {
        match (&self.field, &self.operation) {
            (Some(field), Some(operation)) => check_condition(field, operation, value).map(|_| ()),
            _ => Err(GrammarError::unexpected_token(value, &self.form)),
        }
    }

    /// Builds the error for a token that fits no legal form.
    ///
    /// A word in field position is reported as an unknown field.
    fn reject(&self, token: &Token, candidate: &str) -> GrammarError {
        let expects_field = condense(&join(&self.form, "FIELD")).is_some();
        if token.kind == TokenKind::Value && expects_field && looks_like_identifier(&token.text) {
            return GrammarError::UnknownField {
                name: token.text.clone(),
                suggestion: FieldCatalog::suggest(&token.text).map(str::to_string),
            };
        }
        GrammarError::unexpected_token(&token.text, candidate)
    }
}

/// Runs the reducer over a whole token stream.
pub fn reduce(tokens: &[Token]) -> GrammarResult<()> {
    let mut reducer = Reducer::new();
    for token in tokens {
        reducer.push(token)?;
    }
    reducer.finish()
}
