//! Filter expression checker and SQL `WHERE`-clause translator.
//!
//! This crate validates small boolean filter expressions over a fixed catalog
//! of fields and translates them into SQL fragments.
//!
//! # Supported Syntax
//!
//! ## Fields
//! - `TITLE`, `NAME` - text, compared with single-quoted literals
//! - `WEIGHT` - integer
//! - `POSTDATE` - timestamp, written as `'dd.MM.yyyy HH:mm'`
//!
//! ## Operations
//! - `>`, `<`, `=`, `>=`, `<=` - all fields
//! - `LIKE` - text fields only
//!
//! ## Boolean Operators
//! - `AND`, `OR`
//! - `()` - Grouping
//!
//! Keywords and field names are case-insensitive. Quoted literals are kept
//! exactly as written.
//!
//! # Example
//!
//! ```
//! use sqlfilter_rs::{check, translate_to_sql, FilterError};
//!
//! assert_eq!(check(Some("WEIGHT > 5 AND (NAME = 'bolt' OR NAME = 'nut')")), Ok(true));
//!
//! let sql = translate_to_sql("weight >= 10 or postdate < '01.12.2025 12:00'").unwrap();
//! assert_eq!(
//!     sql,
//!     "ARTICLE.WEIGHT >= 10 OR ARTICLE_POST_DATE < '2025-12-01 12:00:00'"
//! );
//!
//! let err = translate_to_sql("WEIGHT LIKE 10").unwrap_err();
//! assert!(matches!(err, FilterError::Grammar(_)));
//! ```

mod catalog;
mod checker;
mod error;
mod lexer;
mod reducer;
mod translator;
mod validator;

pub use catalog::{
    FieldCatalog, FieldDescriptor, FieldType, Operation, INPUT_TIMESTAMP_FORMAT,
    SQL_TIMESTAMP_FORMAT,
};
pub use checker::{check, is_valid, validate, CheckedFilter};
pub use error::{FilterError, FilterResult, GrammarError, GrammarResult, TranslationError};
pub use lexer::{normalize, tokenize, Lexer, Token, TokenKind};
pub use reducer::{reduce, Reducer, CONDENSED_EXPRESSION};
pub use translator::{translate_to_sql, FilterTranslator};
pub use validator::check_condition;
