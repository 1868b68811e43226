//! # Caraway Query Language - Abstract Syntax Tree
//!
//! This module defines the token and expression types for the Caraway query
//! language, a small filter language over structured records: member paths,
//! comparisons, boolean combinators, and quantifier method calls.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (the closed six-variant tree)
//! - **[operators]** - Binary operators (comparisons and combinators)
//!
//! ## Quick Start
//!
//! ```text
//! owner/age gt 5 and pets.any(p: p/age gt 5)
//! ```
//!
//! This query keeps records whose owner is over five and that have at least
//! one pet over five.
//!
//! ## Core Concepts
//!
//! ### Member Paths
//!
//! `owner/age` walks into a record one field at a time. A path parses to a
//! right-nested chain of [`Expr::Member`] nodes, outermost segment first.
//!
//! ### Comparisons and Combinators
//!
//! The comparison operators are the words `eq ne gt ge lt le`; a comparison's
//! right side is always a literal. `and` / `or` combine whole queries with
//! equal precedence, grouped by parentheses where it matters.
//!
//! ### Method Calls
//!
//! A reserved method name after `.` applies to the path before it. Quantifiers
//! (`any`) take a lambda whose parameter scopes the paths of its body; plain
//! functions (`startswith`, `endswith`, `contains`) take literal arguments.
//! The reserved set is configurable through the crate's `Vocabulary`.
pub mod tokens;
pub mod expressions;
pub mod operators;

pub use tokens::{LiteralValue, Token, TokenKind};
pub use expressions::{Expr, MethodArgs};
pub use operators::BinaryOp;
