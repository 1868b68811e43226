use std::fmt;

/// A half-open `[start, end)` range of character offsets into a query string.
///
/// Offsets count characters, not bytes, matching how the lexer walks its
/// input. Every token carries one, and errors use them to point back at the
/// text they complain about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[test]
fn test_span_len() {
    let span = Span::new(4, 9);
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert!(Span::new(3, 3).is_empty());
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(0, 7).to_string(), "0..7");
}
