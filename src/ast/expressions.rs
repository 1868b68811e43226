use crate::ast::operators::BinaryOp;
use crate::ast::tokens::LiteralValue;
use crate::error::ConstructionError;

/// Abstract syntax tree node for a parsed query expression.
///
/// The tree is built bottom-up by the parser and never mutated afterwards.
/// Nodes hold no parent links and no reference back to the parser, so a tree
/// outlives the parser that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Comparison or combinator applied to two operands
    ///
    /// # Examples
    /// ```text
    /// age gt 5
    /// age gt 5 and name eq "bob"
    /// ```
    Binary {
        operator: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// One segment of a `/`-separated member path
    ///
    /// `nested` is the rest of the path, outermost segment first.
    ///
    /// # Examples
    /// ```text
    /// age          Member("age")
    /// owner/age    Member("owner", nested: Member("age"))
    /// ```
    Member {
        name: String,
        nested: Option<Box<Expr>>,
    },

    /// Lambda-bound parameter
    ///
    /// Only appears as the `parameter` of a [`Expr::Lambda`].
    Parameter { name: String },

    /// Literal operand
    Literal { value: LiteralValue },

    /// Reserved method applied to a member
    ///
    /// # Examples
    /// ```text
    /// pets.any(p: p/age gt 5)
    /// name.startswith("bo")
    /// ```
    MethodCall {
        name: String,
        member: Box<Expr>,
        args: MethodArgs,
    },

    /// Lambda passed to a quantifier call
    ///
    /// `parameter` is always an [`Expr::Parameter`].
    Lambda {
        parameter: Box<Expr>,
        body: Box<Expr>,
    },
}

/// Argument shape of an [`Expr::MethodCall`].
///
/// Quantifier calls carry exactly one lambda; plain function calls carry one
/// or more literal arguments. A call never carries both.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodArgs {
    Lambda(Box<Expr>),
    Args(Vec<Expr>),
}

impl Expr {
    /// Builds a comparison or combinator node.
    pub fn binary(operator: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Builds one path segment; `nested` is the remainder of the path.
    pub fn member(name: &str, nested: Option<Expr>) -> Result<Expr, ConstructionError> {
        if name.is_empty() {
            return Err(ConstructionError::EmptyMemberName);
        }
        Ok(Expr::Member {
            name: name.to_string(),
            nested: nested.map(Box::new),
        })
    }

    /// Builds a lambda parameter node.
    pub fn parameter(name: &str) -> Result<Expr, ConstructionError> {
        if name.is_empty() {
            return Err(ConstructionError::EmptyParameterName);
        }
        Ok(Expr::Parameter {
            name: name.to_string(),
        })
    }

    /// Builds a literal node.
    pub fn literal(value: LiteralValue) -> Expr {
        Expr::Literal { value }
    }

    /// Builds a method call applied to `member`.
    pub fn method_call(name: &str, member: Expr, args: MethodArgs) -> Expr {
        Expr::MethodCall {
            name: name.to_string(),
            member: Box::new(member),
            args,
        }
    }

    /// Builds a lambda, creating the parameter node from its name.
    pub fn lambda(parameter: &str, body: Expr) -> Result<Expr, ConstructionError> {
        Ok(Expr::Lambda {
            parameter: Box::new(Expr::parameter(parameter)?),
            body: Box::new(body),
        })
    }
}

#[test]
fn test_empty_member_name_is_rejected() {
    assert!(matches!(
        Expr::member("", None),
        Err(ConstructionError::EmptyMemberName)
    ));
    assert!(Expr::member("age", None).is_ok());
}

#[test]
fn test_empty_parameter_name_is_rejected() {
    assert!(matches!(
        Expr::parameter(""),
        Err(ConstructionError::EmptyParameterName)
    ));

    let body = Expr::literal(LiteralValue::Bool(true));
    assert!(matches!(
        Expr::lambda("", body),
        Err(ConstructionError::EmptyParameterName)
    ));
}
