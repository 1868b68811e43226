//! Structural serialization of query expression trees.
//!
//! This module renders an [`Expr`] tree as a JSON object tree: one object per
//! node, with a `"type"` discriminator plus the node's own fields. All output
//! is deterministic (object keys come out sorted) and optional fields that
//! are absent are omitted rather than null.
//!
//! # Features
//!
//! - **Structural form** via [`Expr::to_structure`] - a `serde_json::Value` tree
//! - **Compact output** via [`to_json()`] - minimal whitespace
//! - **Pretty output** via [`to_json_pretty()`] - human-readable with 2-space indentation
//! - **Deterministic** - object keys are always sorted alphabetically
//!
//! # Examples
//!
//! ```
//! use caraway_lang::parse;
//! use caraway_lang::structure::to_json;
//!
//! let expr = parse("age gt 5").unwrap();
//! assert_eq!(
//!     to_json(&expr),
//!     r#"{"left":{"name":"age","type":"member"},"operator":"gt","right":{"type":"literal","value":5},"type":"binary"}"#
//! );
//! ```

use crate::ast::{Expr, LiteralValue, MethodArgs};
use serde_json::{Value, json};

impl Expr {
    /// Converts the expression tree to its structural JSON form.
    ///
    /// Each node becomes an object carrying a `"type"` discriminator
    /// (`binary`, `member`, `parameter`, `literal`, `method_call`, `lambda`)
    /// and the node's fields, recursing into children. An absent
    /// `Member.nested` is omitted, and a method call carries exactly one of
    /// `lambda_body` or `args`. This is the canonical external shape of a
    /// parsed query.
    pub fn to_structure(&self) -> Value {
        match self {
            Expr::Binary {
                operator,
                left,
                right,
            } => json!({
                "type": "binary",
                "operator": operator.as_str(),
                "left": left.to_structure(),
                "right": right.to_structure(),
            }),
            Expr::Member { name, nested } => {
                let mut node = json!({
                    "type": "member",
                    "name": name,
                });
                if let Some(nested) = nested {
                    node["nested"] = nested.to_structure();
                }
                node
            }
            Expr::Parameter { name } => json!({
                "type": "parameter",
                "name": name,
            }),
            Expr::Literal { value } => json!({
                "type": "literal",
                "value": literal_value(value),
            }),
            Expr::MethodCall { name, member, args } => {
                let mut node = json!({
                    "type": "method_call",
                    "name": name,
                    "member": member.to_structure(),
                });
                match args {
                    MethodArgs::Lambda(body) => {
                        node["lambda_body"] = body.to_structure();
                    }
                    MethodArgs::Args(items) => {
                        node["args"] = Value::Array(items.iter().map(Expr::to_structure).collect());
                    }
                }
                node
            }
            Expr::Lambda { parameter, body } => json!({
                "type": "lambda",
                "parameter": parameter.to_structure(),
                "body": body.to_structure(),
            }),
        }
    }
}

fn literal_value(value: &LiteralValue) -> Value {
    match value {
        LiteralValue::String(s) => json!(s),
        LiteralValue::Integer(n) => json!(n),
        LiteralValue::Float(n) => json!(n),
        LiteralValue::Bool(b) => json!(b),
        LiteralValue::Null => Value::Null,
    }
}

// Convenience functions

/// Converts an expression tree to its compact JSON string form.
///
/// No indentation or extra whitespace; object keys are sorted, so serializing
/// the same tree twice always produces the same string.
///
/// # Examples
///
/// ```
/// use caraway_lang::parse;
/// use caraway_lang::structure::to_json;
///
/// let expr = parse("city").unwrap();
/// assert_eq!(to_json(&expr), r#"{"name":"city","type":"member"}"#);
/// ```
pub fn to_json(expr: &Expr) -> String {
    expr.to_structure().to_string()
}

/// Converts an expression tree to pretty-printed JSON.
///
/// 2-space indentation, one field per line, sorted object keys. Suitable for
/// debugging or user-facing output.
///
/// # Examples
///
/// ```
/// use caraway_lang::parse;
/// use caraway_lang::structure::to_json_pretty;
///
/// let expr = parse("city").unwrap();
/// assert_eq!(to_json_pretty(&expr), "{\n  \"name\": \"city\",\n  \"type\": \"member\"\n}");
/// ```
pub fn to_json_pretty(expr: &Expr) -> String {
    format!("{:#}", expr.to_structure())
}
