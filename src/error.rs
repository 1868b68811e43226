use crate::span::Span;
use thiserror::Error;

/// Errors raised while scanning a query string into tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Unexpected character '{found}' at position {}", .span.start)]
    UnexpectedChar { found: char, span: Span },

    #[error("Unterminated string: missing closing quote (opened at position {})", .span.start)]
    UnterminatedString { span: Span },

    #[error("Invalid escape sequence: \\{found} at position {}", .span.start)]
    InvalidEscape { found: char, span: Span },

    #[error("Number '{text}' is out of range at position {}", .span.start)]
    NumberOutOfRange { text: String, span: Span },

    #[error("Unexpected end of input at position {}", .span.start)]
    UnexpectedEnd { span: Span },
}

impl LexError {
    /// The input range the error points at.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::InvalidEscape { span, .. }
            | LexError::NumberOutOfRange { span, .. }
            | LexError::UnexpectedEnd { span } => *span,
        }
    }
}

/// Errors raised while assembling tokens into an expression tree.
///
/// Every variant records the token range it tripped over and a `near` excerpt,
/// the last words of input consumed before the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Expected {expected}, got {found} near '{near}'")]
    UnexpectedToken {
        expected: String,
        found: String,
        near: String,
        span: Span,
    },

    #[error("Expected {expected}, got end of input near '{near}'")]
    UnexpectedEndOfInput {
        expected: String,
        near: String,
        span: Span,
    },

    #[error("Expected ')' near '{near}'")]
    ExpectedClosingParen { near: String, span: Span },

    #[error("Lambda paths must start at parameter '{binder}', got '{found}' near '{near}'")]
    BinderMismatch {
        binder: String,
        found: String,
        near: String,
        span: Span,
    },

    #[error("Unexpected trailing input {found} near '{near}'")]
    TrailingTokens {
        found: String,
        near: String,
        span: Span,
    },
}

impl ParseError {
    /// The input range the error points at.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEndOfInput { span, .. }
            | ParseError::ExpectedClosingParen { span, .. }
            | ParseError::BinderMismatch { span, .. }
            | ParseError::TrailingTokens { span, .. } => *span,
        }
    }

    /// The words of input just before the failure.
    pub fn near(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { near, .. }
            | ParseError::UnexpectedEndOfInput { near, .. }
            | ParseError::ExpectedClosingParen { near, .. }
            | ParseError::BinderMismatch { near, .. }
            | ParseError::TrailingTokens { near, .. } => near,
        }
    }
}

/// Errors raised when building expression nodes with invalid arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    #[error("Member name must not be empty")]
    EmptyMemberName,

    #[error("Parameter name must not be empty")]
    EmptyParameterName,
}

/// Any error the query front end can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

impl QueryError {
    /// The input range the error points at, where one applies.
    pub fn span(&self) -> Option<Span> {
        match self {
            QueryError::Lex(err) => Some(err.span()),
            QueryError::Parse(err) => Some(err.span()),
            QueryError::Construction(_) => None,
        }
    }
}

/// The last two whitespace-delimited words of `input` up to the character
/// offset `end`, for pointing parse errors at the text just consumed.
pub(crate) fn near_excerpt(input: &str, end: usize) -> String {
    let consumed: String = input.chars().take(end).collect();
    let words: Vec<&str> = consumed.split_whitespace().collect();
    let keep = words.len().min(2);
    words[words.len() - keep..].join(" ")
}

#[test]
fn test_near_excerpt_last_two_words() {
    assert_eq!(near_excerpt("age gt 5 and name", 8), "gt 5");
    assert_eq!(near_excerpt("age", 3), "age");
    assert_eq!(near_excerpt("", 0), "");
}

#[test]
fn test_near_excerpt_stops_at_offset() {
    let input = "owner/age gt 5";
    assert_eq!(near_excerpt(input, 9), "owner/age");
    assert_eq!(near_excerpt(input, 12), "owner/age gt");
}
