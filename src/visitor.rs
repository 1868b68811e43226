//! Visitor dispatch over expression trees.
//!
//! [`ExpressionVisitor`] is the sanctioned extension point for consumers that
//! walk a parsed query: implement the hooks for the variants you care about
//! and call [`visit`](ExpressionVisitor::visit) on the root. For passes that
//! just need every node in order, [`walk_expression`] does the recursion.

use crate::ast::{BinaryOp, Expr, LiteralValue, MethodArgs};

/// Double-dispatch visitor over [`Expr`] trees.
///
/// [`visit`](ExpressionVisitor::visit) matches on the node and forwards to
/// exactly one hook per call. Every hook defaults to doing nothing, so an
/// implementation only overrides what it needs. Hooks do not recurse on their
/// own; call `visit` on child nodes to descend.
///
/// ```
/// use caraway_lang::{parse, BinaryOp, Expr, ExpressionVisitor};
///
/// #[derive(Default)]
/// struct MemberNames(Vec<String>);
///
/// impl ExpressionVisitor for MemberNames {
///     fn visit_binary(&mut self, _operator: BinaryOp, left: &Expr, right: &Expr) {
///         self.visit(left);
///         self.visit(right);
///     }
///
///     fn visit_member(&mut self, name: &str, nested: Option<&Expr>) {
///         self.0.push(name.to_string());
///         if let Some(nested) = nested {
///             self.visit(nested);
///         }
///     }
/// }
///
/// let expr = parse("owner/age gt 5").unwrap();
/// let mut names = MemberNames::default();
/// names.visit(&expr);
/// assert_eq!(names.0, vec!["owner", "age"]);
/// ```
pub trait ExpressionVisitor {
    /// Dispatches `expr` to the hook for its variant.
    fn visit(&mut self, expr: &Expr) {
        match expr {
            Expr::Binary {
                operator,
                left,
                right,
            } => self.visit_binary(*operator, left, right),
            Expr::Member { name, nested } => self.visit_member(name, nested.as_deref()),
            Expr::Parameter { name } => self.visit_parameter(name),
            Expr::Literal { value } => self.visit_literal(value),
            Expr::MethodCall { name, member, args } => self.visit_method_call(name, member, args),
            Expr::Lambda { parameter, body } => self.visit_lambda(parameter, body),
        }
    }

    fn visit_binary(&mut self, operator: BinaryOp, left: &Expr, right: &Expr) {
        let _ = (operator, left, right);
    }

    fn visit_member(&mut self, name: &str, nested: Option<&Expr>) {
        let _ = (name, nested);
    }

    fn visit_parameter(&mut self, name: &str) {
        let _ = name;
    }

    fn visit_literal(&mut self, value: &LiteralValue) {
        let _ = value;
    }

    fn visit_method_call(&mut self, name: &str, member: &Expr, args: &MethodArgs) {
        let _ = (name, member, args);
    }

    fn visit_lambda(&mut self, parameter: &Expr, body: &Expr) {
        let _ = (parameter, body);
    }
}

/// Recursively walks an expression tree in pre-order, calling `f` on every
/// node.
///
/// The visitor is called on the current node before its children. Children
/// come in field order: left before right, member before arguments, parameter
/// before body.
pub fn walk_expression<F>(expr: &Expr, f: &mut F)
where
    F: FnMut(&Expr),
{
    f(expr);
    match expr {
        Expr::Binary { left, right, .. } => {
            walk_expression(left, f);
            walk_expression(right, f);
        }
        Expr::Member { nested, .. } => {
            if let Some(nested) = nested {
                walk_expression(nested, f);
            }
        }
        Expr::MethodCall { member, args, .. } => {
            walk_expression(member, f);
            match args {
                MethodArgs::Lambda(body) => walk_expression(body, f),
                MethodArgs::Args(items) => {
                    for item in items {
                        walk_expression(item, f);
                    }
                }
            }
        }
        Expr::Lambda { parameter, body } => {
            walk_expression(parameter, f);
            walk_expression(body, f);
        }
        // Leaf nodes
        Expr::Parameter { .. } | Expr::Literal { .. } => {}
    }
}
