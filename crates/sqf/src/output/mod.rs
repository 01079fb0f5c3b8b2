//! Output formatting utilities for the sqf CLI.
//!
//! This module provides functions for formatting results as text, tables or JSON.
//! It is organized into submodules by command:
//!
//! - [`filter`] - Check and translate results
//! - [`tokens`] - Token listings
//! - [`fields`] - Field catalog listings

mod fields;
mod filter;
mod tokens;

// Filter results
pub use filter::{format_check_json, format_check_text, format_translate_json, format_translate_text};

// Tokens
pub use tokens::{format_tokens_json, format_tokens_table};

// Fields
pub use fields::{format_fields_json, format_fields_table};
