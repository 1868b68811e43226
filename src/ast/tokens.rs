use crate::ast::operators::BinaryOp;
use crate::span::Span;
use std::fmt;

/// A single lexical token cut from a query string.
///
/// `text` is the exact source lexeme, quotes included for strings. The decoded
/// form of a literal lives in its [`TokenKind::Literal`] payload; identifiers
/// and keywords decode to their own text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Bare word starting with a letter or underscore
    ///
    /// Member names and lambda parameters.
    ///
    /// # Examples
    /// ```text
    /// age
    /// owner
    /// _internal
    /// ```
    Identifier,

    /// Reserved method name from the active vocabulary
    ///
    /// # Examples
    /// ```text
    /// any
    /// startswith
    /// ```
    Keyword,

    /// Comparison or combinator word
    ///
    /// # Examples
    /// ```text
    /// eq ne gt ge lt le
    /// and or
    /// ```
    Operator(BinaryOp),

    /// Literal value with its decoded payload
    ///
    /// # Examples
    /// ```text
    /// "bob"
    /// 42
    /// 3.5
    /// true
    /// null
    /// ```
    Literal(LiteralValue),

    /// Single punctuation character
    ///
    /// One of `(` `)` `/` `:` `,` `.`
    Delimiter(char),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => f.write_str("identifier"),
            TokenKind::Keyword => f.write_str("keyword"),
            TokenKind::Operator(op) => write!(f, "operator '{}'", op),
            TokenKind::Literal(value) => write!(f, "literal {}", value),
            TokenKind::Delimiter(ch) => write!(f, "'{}'", ch),
        }
    }
}

/// A decoded literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// String literal, quotes and escapes already decoded
    String(String),
    /// Integer literal
    Integer(i64),
    /// Floating point literal
    Float(f64),
    /// Boolean literal
    Bool(bool),
    /// Null literal
    Null,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::String(s) => write!(f, "\"{}\"", s),
            LiteralValue::Integer(n) => write!(f, "{}", n),
            LiteralValue::Float(n) => write!(f, "{}", n),
            LiteralValue::Bool(b) => write!(f, "{}", b),
            LiteralValue::Null => f.write_str("null"),
        }
    }
}
