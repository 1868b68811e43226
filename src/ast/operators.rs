use std::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Comparison
    /// Equal (`eq`)
    Equal,
    /// Not equal (`ne`)
    NotEqual,
    /// Greater than (`gt`)
    GreaterThan,
    /// Greater than or equal (`ge`)
    GreaterEqual,
    /// Less than (`lt`)
    LessThan,
    /// Less than or equal (`le`)
    LessEqual,

    // Logical
    /// Logical AND (`and`)
    And,
    /// Logical OR (`or`)
    Or,
}

impl BinaryOp {
    /// Looks up the operator spelled `word`, if any.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "eq" => Some(BinaryOp::Equal),
            "ne" => Some(BinaryOp::NotEqual),
            "gt" => Some(BinaryOp::GreaterThan),
            "ge" => Some(BinaryOp::GreaterEqual),
            "lt" => Some(BinaryOp::LessThan),
            "le" => Some(BinaryOp::LessEqual),
            "and" => Some(BinaryOp::And),
            "or" => Some(BinaryOp::Or),
            _ => None,
        }
    }

    /// The operator's spelling in query text.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Equal => "eq",
            BinaryOp::NotEqual => "ne",
            BinaryOp::GreaterThan => "gt",
            BinaryOp::GreaterEqual => "ge",
            BinaryOp::LessThan => "lt",
            BinaryOp::LessEqual => "le",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
        }
    }

    /// True for the combinators `and` and `or`.
    pub fn is_combinator(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[test]
fn test_word_round_trip() {
    for word in ["eq", "ne", "gt", "ge", "lt", "le", "and", "or"] {
        let op = BinaryOp::from_word(word).unwrap();
        assert_eq!(op.as_str(), word);
    }
    assert_eq!(BinaryOp::from_word("neq"), None);
    assert_eq!(BinaryOp::from_word(""), None);
}

#[test]
fn test_combinators() {
    assert!(BinaryOp::And.is_combinator());
    assert!(BinaryOp::Or.is_combinator());
    assert!(!BinaryOp::Equal.is_combinator());
    assert!(!BinaryOp::GreaterThan.is_combinator());
}
