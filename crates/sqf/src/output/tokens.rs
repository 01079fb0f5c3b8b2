//! Token listing output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use sqlfilter_rs::{Token, TokenKind};

use crate::commands::tokens::TokensResult;

/// JSON output structure for the tokens command.
#[derive(Serialize)]
pub struct TokensOutput<'a> {
    pub normalized: &'a str,
    pub tokens: &'a [Token],
}

/// Formats tokens as JSON.
pub fn format_tokens_json(result: &TokensResult) -> Result<String, serde_json::Error> {
    let output = TokensOutput {
        normalized: &result.normalized,
        tokens: &result.tokens,
    };
    serde_json::to_string_pretty(&output)
}

/// Short label for a token kind.
fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Field => "field",
        TokenKind::Operation => "operation",
        TokenKind::LogicalOperator => "logical",
        TokenKind::Value => "value",
        TokenKind::OpenParen => "open",
        TokenKind::CloseParen => "close",
    }
}

/// Formats tokens as a table.
pub fn format_tokens_table(result: &TokensResult, use_colors: bool) -> String {
    if result.tokens.is_empty() {
        return "No tokens.\n".to_string();
    }

    let mut output = String::new();

    let header = format!("{:<4} {:<10} {}", "#", "Kind", "Text");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for (index, token) in result.tokens.iter().enumerate() {
        let kind = format!("{:<10}", kind_label(token.kind));
        let kind = if use_colors {
            match token.kind {
                TokenKind::Field => kind.blue().to_string(),
                TokenKind::Operation | TokenKind::LogicalOperator => kind.yellow().to_string(),
                TokenKind::Value => kind.green().to_string(),
                TokenKind::OpenParen | TokenKind::CloseParen => kind.dimmed().to_string(),
            }
        } else {
            kind
        };
        output.push_str(&format!("{:<4} {} {}\n", index + 1, kind, token.text));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokensResult {
        TokensResult {
            normalized: "TITLE = 'a b'".to_string(),
            tokens: vec![
                Token::new(TokenKind::Field, "TITLE"),
                Token::new(TokenKind::Operation, "="),
                Token::new(TokenKind::Value, "'a b'"),
            ],
        }
    }

    #[test]
    fn test_format_tokens_table() {
        let table = format_tokens_table(&sample(), false);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("#"));
        assert_eq!(lines[1], "1    field      TITLE");
        assert_eq!(lines[3], "3    value      'a b'");
    }

    #[test]
    fn test_format_tokens_table_empty() {
        let result = TokensResult {
            normalized: String::new(),
            tokens: Vec::new(),
        };
        assert_eq!(format_tokens_table(&result, false), "No tokens.\n");
    }

    #[test]
    fn test_format_tokens_json() {
        let json: serde_json::Value =
            serde_json::from_str(&format_tokens_json(&sample()).unwrap()).unwrap();
        assert_eq!(json["normalized"], "TITLE = 'a b'");
        assert_eq!(json["tokens"][0]["kind"], "FIELD");
        assert_eq!(json["tokens"][2]["text"], "'a b'");
    }
}
