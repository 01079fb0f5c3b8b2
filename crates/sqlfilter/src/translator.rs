//! Rendering of checked filters as SQL `WHERE` fragments.

use std::borrow::Cow;
use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{FieldCatalog, FieldDescriptor};
use crate::checker::{validate, CheckedFilter};
use crate::error::{FilterResult, TranslationError};
use crate::lexer::TokenKind;

/// Translates filter expressions to SQL.
///
/// Field names become SQL columns (the catalog default unless overridden),
/// timestamp literals are rewritten to `'yyyy-MM-dd HH:mm:ss'`, and everything
/// else is emitted as written.
///
/// # Example
///
/// ```
/// use sqlfilter_rs::FilterTranslator;
///
/// let translator = FilterTranslator::new()
///     .with_column("title", "a.title")
///     .unwrap();
/// let sql = translator.translate("title like 'x%' and (weight > 5)").unwrap();
/// assert_eq!(sql, "a.title LIKE 'x%' AND (ARTICLE.WEIGHT > 5)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterTranslator {
    columns: HashMap<&'static str, String>,
}

impl FilterTranslator {
    /// Creates a translator using the catalog's default columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the SQL column for a field.
    ///
    /// # Errors
    ///
    /// Returns `TranslationError::UnknownField` if the field is not in the
    /// catalog and `TranslationError::EmptyColumn` for a blank column name.
    pub fn with_column(
        mut self,
        field: &str,
        column: impl Into<String>,
    ) -> Result<Self, TranslationError> {
        let descriptor = FieldCatalog::lookup(field).ok_or_else(|| TranslationError::UnknownField {
            name: field.to_string(),
        })?;
        let column = column.into();
        if column.trim().is_empty() {
            return Err(TranslationError::EmptyColumn {
                field: descriptor.name.to_string(),
            });
        }
        self.columns.insert(descriptor.name, column.trim().to_string());
        Ok(self)
    }

    /// Returns the SQL column a field translates to.
    pub fn column(&self, field: &FieldDescriptor) -> &str {
        self.columns
            .get(field.name)
            .map(String::as_str)
            .unwrap_or(field.sql_column)
    }

    /// Validates and translates an expression.
    ///
    /// An empty or blank expression translates to an empty fragment.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Grammar` if the expression is not a legal filter
    /// and `FilterError::Translation` if a literal cannot be rendered.
    pub fn translate(&self, expression: &str) -> FilterResult<String> {
        let filter = validate(Some(expression))?;
        Ok(self.render(&filter)?)
    }

    /// Renders an already checked filter.
    pub fn render(&self, filter: &CheckedFilter) -> Result<String, TranslationError> {
        let mut sql = String::new();
        let mut field: Option<&'static FieldDescriptor> = None;

        for token in filter.tokens() {
            let piece: Cow<'_, str> = match token.kind {
                TokenKind::Field => {
                    let descriptor = FieldCatalog::lookup(&token.text).ok_or_else(|| {
                        TranslationError::UnknownField {
                            name: token.text.clone(),
                        }
                    })?;
                    field = Some(descriptor);
                    Cow::Borrowed(self.column(descriptor))
                }
                TokenKind::Value => {
                    let descriptor = field.ok_or_else(|| TranslationError::DetachedValue {
                        value: token.text.clone(),
                    })?;
                    descriptor.field_type.render(&token.text)?
                }
                TokenKind::Operation
                | TokenKind::LogicalOperator
                | TokenKind::OpenParen
                | TokenKind::CloseParen => Cow::Borrowed(token.text.as_str()),
            };

            if !sql.is_empty() && !sql.ends_with('(') && token.kind != TokenKind::CloseParen {
                sql.push(' ');
            }
            sql.push_str(&piece);
        }

        debug!(sql = %sql, "rendered filter");
        Ok(sql)
    }
}

/// Translates an expression to SQL using the catalog's default columns.
///
/// # Example
///
/// ```
/// use sqlfilter_rs::translate_to_sql;
///
/// let sql = translate_to_sql("TITLE LIKE '123%' AND POSTDATE = '01.12.2025 12:00'").unwrap();
/// assert_eq!(
///     sql,
///     "ARTICLE.TITLE LIKE '123%' AND ARTICLE_POST_DATE = '2025-12-01 12:00:00'"
/// );
/// ```
pub fn translate_to_sql(expression: &str) -> FilterResult<String> {
    FilterTranslator::new().translate(expression)
}
