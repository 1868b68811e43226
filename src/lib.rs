//! Caraway is a small query expression language for filtering structured
//! records: `/`-separated member paths, word comparisons (`eq ne gt ge lt
//! le`), the combinators `and` / `or`, and quantifier method calls with
//! lambda bodies (`pets.any(p: p/age gt 5)`).
//!
//! This crate is the language front end: it turns a query string into a typed
//! expression tree, or a single error saying where the string went wrong.
//!
//! ```
//! use caraway_lang::{BinaryOp, Expr, parse};
//!
//! let expr = parse(r#"age gt 5 and name eq "bob""#).unwrap();
//! assert!(matches!(
//!     expr,
//!     Expr::Binary { operator: BinaryOp::And, .. }
//! ));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod structure;
pub mod visitor;
pub mod vocabulary;

pub use ast::{BinaryOp, Expr, LiteralValue, MethodArgs, Token, TokenKind};
pub use error::{ConstructionError, LexError, ParseError, QueryError};
pub use lexer::Lexer;
pub use parser::Parser;
pub use span::Span;
pub use structure::{to_json, to_json_pretty};
pub use visitor::{ExpressionVisitor, walk_expression};
pub use vocabulary::Vocabulary;

/// Parses `input` as a single query expression with the default vocabulary.
///
/// Convenience for [`Parser::new`] followed by [`Parser::parse`].
pub fn parse(input: &str) -> Result<Expr, QueryError> {
    Parser::new(input).parse()
}
