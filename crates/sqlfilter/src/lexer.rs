//! Lexer (tokenizer) for filter expressions.
//!
//! Input is first normalized (operators and brackets spaced out, whitespace
//! collapsed, keywords upper-cased), then split into tokens. Quoted literals
//! are left untouched by normalization, so `'Abc  x'` keeps its case and spacing.

use serde::Serialize;

use crate::catalog::{FieldCatalog, FieldType, Operation};

/// Separator between ordinary tokens.
const SPACE: &str = " ";

/// Separator ending a quoted literal that may itself contain spaces.
const QUOTED_VALUE_SEPARATOR: &str = "' ";

const QUOTE: char = '\'';

/// Kind of a token, as seen by the grammar reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A catalog field name.
    Field,
    /// A comparison operation.
    Operation,
    /// `AND` or `OR`.
    LogicalOperator,
    /// Anything else: a literal, or an unrecognized word.
    Value,
    /// Opening bracket `(`.
    OpenParen,
    /// Closing bracket `)`.
    CloseParen,
}

impl TokenKind {
    /// The symbol this kind contributes to a reduction form.
    ///
    /// Brackets drive the reducer's frame stack instead and have no symbol.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            TokenKind::Field => Some("FIELD"),
            TokenKind::Operation => Some("OPERATION"),
            TokenKind::LogicalOperator => Some("LOGOPER"),
            TokenKind::Value => Some("VALUE"),
            TokenKind::OpenParen | TokenKind::CloseParen => None,
        }
    }
}

/// A classified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The token text. Field names are canonical; values are verbatim.
    pub text: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Classifies a raw token.
    ///
    /// Priority: operation, field, logical operator, bracket, value.
    pub fn classify(raw: &str) -> Self {
        if let Some(op) = Operation::from_symbol(raw) {
            return Token::new(TokenKind::Operation, op.symbol());
        }
        if let Some(field) = FieldCatalog::lookup(raw) {
            return Token::new(TokenKind::Field, field.name);
        }
        match raw {
            "AND" | "OR" => Token::new(TokenKind::LogicalOperator, raw),
            "(" => Token::new(TokenKind::OpenParen, raw),
            ")" => Token::new(TokenKind::CloseParen, raw),
            _ => Token::new(TokenKind::Value, raw),
        }
    }
}

/// Normalizes an expression for tokenization.
///
/// Outside single-quoted spans: surrounds `(`, `)`, `>=`, `<=`, `>`, `<` and
/// `=` with spaces, collapses whitespace runs to a single space and upper-cases
/// everything. Quoted spans are copied verbatim. The result is trimmed.
pub fn normalize(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len() + 16);
    let mut chars = expression.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            out.push(c);
            if c == QUOTE {
                in_quotes = false;
            }
            continue;
        }

        match c {
            QUOTE => {
                in_quotes = true;
                out.push(c);
            }
            '(' | ')' | '=' => {
                push_space(&mut out);
                out.push(c);
                out.push(' ');
            }
            '>' | '<' => {
                push_space(&mut out);
                out.push(c);
                if chars.peek() == Some(&'=') {
                    chars.next();
                    out.push('=');
                }
                out.push(' ');
            }
            c if c.is_whitespace() => push_space(&mut out),
            c => out.extend(c.to_uppercase()),
        }
    }

    if !in_quotes {
        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
    }
    out
}

/// Pushes a single separating space unless one is already there.
fn push_space(out: &mut String) {
    if !out.is_empty() && !out.ends_with(' ') {
        out.push(' ');
    }
}

/// Lexer over a normalized expression.
///
/// The separator used to find the end of the next token depends on what came
/// before: right after `FIELD OPERATION` for a text or timestamp field, the
/// value is a quoted literal that ends at the first `' ` after its opening
/// quote rather than at the next space. A literal may start or end with
/// spaces, but cannot contain `' ` itself.
pub struct Lexer<'a> {
    input: &'a str,
    /// Current byte position in the input string.
    position: usize,
    /// For every non-bracket token read so far, the field type if it was a field.
    history: Vec<Option<FieldType>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for an already normalized input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            history: Vec::new(),
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.position..];
        self.position += rest.len() - rest.trim_start().len();
    }

    /// Chooses the separator for the next token.
    fn separator(&self) -> &'static str {
        let two_back = self
            .history
            .len()
            .checked_sub(2)
            .and_then(|i| self.history[i]);
        match two_back {
            Some(field_type) if field_type.is_quoted() => QUOTED_VALUE_SEPARATOR,
            _ => SPACE,
        }
    }

    /// Returns the next token, or None at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let rest = &self.input[self.position..];
        if rest.is_empty() {
            return None;
        }

        let separator = self.separator();
        // An opening quote never closes the literal it starts.
        let skip = usize::from(separator == QUOTED_VALUE_SEPARATOR && rest.starts_with(QUOTE));
        // The quoted separator keeps its closing quote with the token.
        let end = rest[skip..]
            .find(separator)
            .map(|index| skip + index + separator.len() - 1)
            .unwrap_or(rest.len());
        let token = Token::classify(&rest[..end]);
        self.position += end;

        match token.kind {
            TokenKind::OpenParen | TokenKind::CloseParen => {}
            TokenKind::Field => self
                .history
                .push(FieldCatalog::lookup(&token.text).map(|field| field.field_type)),
            _ => self.history.push(None),
        }

        Some(token)
    }

    /// Collects all tokens.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

/// Normalizes and tokenizes an expression.
pub fn tokenize(expression: &str) -> Vec<Token> {
    Lexer::new(&normalize(expression)).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(expression: &str) -> Vec<TokenKind> {
        tokenize(expression).into_iter().map(|t| t.kind).collect()
    }

    fn texts(expression: &str) -> Vec<String> {
        tokenize(expression).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_normalize_spaces_operators_and_brackets() {
        assert_eq!(normalize("weight>5"), "WEIGHT > 5");
        assert_eq!(normalize("weight>=5"), "WEIGHT >= 5");
        assert_eq!(normalize("weight<=5"), "WEIGHT <= 5");
        assert_eq!(normalize("(weight=5)"), "( WEIGHT = 5 )");
        assert_eq!(normalize("((WEIGHT<5))"), "( ( WEIGHT < 5 ) )");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  WEIGHT   >\t5  "), "WEIGHT > 5");
        assert_eq!(normalize("WEIGHT > 5 AND weight  < 9"), "WEIGHT > 5 AND WEIGHT < 9");
    }

    #[test]
    fn test_normalize_leaves_quoted_spans_alone() {
        assert_eq!(normalize("title like 'Abc  (x)'"), "TITLE LIKE 'Abc  (x)'");
        assert_eq!(
            normalize("postdate='01.12.2025 12:00'"),
            "POSTDATE = '01.12.2025 12:00'"
        );
    }

    #[test]
    fn test_tokenize_simple_condition() {
        let tokens = tokenize("WEIGHT > 5");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Field, "WEIGHT"),
                Token::new(TokenKind::Operation, ">"),
                Token::new(TokenKind::Value, "5"),
            ]
        );
    }

    #[test]
    fn test_tokenize_lowercase_keywords() {
        let tokens = tokenize("title like 'abc%'");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Field, "TITLE"),
                Token::new(TokenKind::Operation, "LIKE"),
                Token::new(TokenKind::Value, "'abc%'"),
            ]
        );
    }

    #[test]
    fn test_tokenize_quoted_value_with_spaces() {
        assert_eq!(
            texts("TITLE LIKE '12 3%' AND WEIGHT > 5"),
            vec!["TITLE", "LIKE", "'12 3%'", "AND", "WEIGHT", ">", "5"]
        );
    }

    #[test]
    fn test_tokenize_quoted_value_with_leading_space() {
        assert_eq!(
            texts("TITLE = ' x' AND NAME = ' '"),
            vec!["TITLE", "=", "' x'", "AND", "NAME", "=", "' '"]
        );
        assert_eq!(texts("TITLE = '' OR WEIGHT > 1")[2], "''");
    }

    #[test]
    fn test_tokenize_timestamp_value() {
        assert_eq!(
            texts("POSTDATE = '01.12.2025 12:00'"),
            vec!["POSTDATE", "=", "'01.12.2025 12:00'"]
        );
    }

    #[test]
    fn test_tokenize_quoted_value_inside_brackets() {
        assert_eq!(
            texts("(POSTDATE = '01.12.2025 12:00'  )"),
            vec!["(", "POSTDATE", "=", "'01.12.2025 12:00'", ")"]
        );
    }

    #[test]
    fn test_integer_field_uses_plain_separator() {
        assert_eq!(
            kinds("WEIGHT = 10 OR NAME = 'a b'"),
            vec![
                TokenKind::Field,
                TokenKind::Operation,
                TokenKind::Value,
                TokenKind::LogicalOperator,
                TokenKind::Field,
                TokenKind::Operation,
                TokenKind::Value,
            ]
        );
    }

    #[test]
    fn test_brackets_do_not_shift_the_lookahead() {
        assert_eq!(
            texts("(TITLE = 'x y') AND (NAME = 'p q')"),
            vec!["(", "TITLE", "=", "'x y'", ")", "AND", "(", "NAME", "=", "'p q'", ")"]
        );
    }

    #[test]
    fn test_unknown_word_is_value() {
        let tokens = tokenize("WEIGHT2 > 10");
        assert_eq!(tokens[0], Token::new(TokenKind::Value, "WEIGHT2"));
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(texts("TITLE = 'abc def"), vec!["TITLE", "=", "'abc def"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_token_symbols() {
        assert_eq!(TokenKind::Field.symbol(), Some("FIELD"));
        assert_eq!(TokenKind::LogicalOperator.symbol(), Some("LOGOPER"));
        assert_eq!(TokenKind::OpenParen.symbol(), None);
    }
}
