/// The reserved method-call vocabulary.
///
/// Method names fall into two classes with different call shapes: quantifiers
/// take a single lambda (`pets.any(p: p/age gt 5)`) while plain functions take
/// literal arguments (`name.startswith("bo")`). Words in either class lex as
/// keywords and are unavailable as member names.
///
/// The default set covers `any` plus the string functions; both classes can
/// be extended:
///
/// ```
/// use caraway_lang::Vocabulary;
///
/// let vocabulary = Vocabulary::default().with_quantifier("all");
/// assert!(vocabulary.takes_lambda("all"));
/// assert!(vocabulary.is_keyword("startswith"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    quantifiers: Vec<String>,
    functions: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            quantifiers: vec!["any".to_string()],
            functions: vec![
                "startswith".to_string(),
                "endswith".to_string(),
                "contains".to_string(),
            ],
        }
    }
}

impl Vocabulary {
    /// A vocabulary with no reserved method names at all.
    pub fn empty() -> Self {
        Vocabulary {
            quantifiers: vec![],
            functions: vec![],
        }
    }

    /// Adds a quantifier, a method whose call carries a lambda.
    pub fn with_quantifier(mut self, name: &str) -> Self {
        if !self.quantifiers.iter().any(|q| q == name) {
            self.quantifiers.push(name.to_string());
        }
        self
    }

    /// Adds a plain function, a method whose call carries literal arguments.
    pub fn with_function(mut self, name: &str) -> Self {
        if !self.functions.iter().any(|f| f == name) {
            self.functions.push(name.to_string());
        }
        self
    }

    /// True when `word` is a reserved method name of either class.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.takes_lambda(word) || self.functions.iter().any(|f| f == word)
    }

    /// True when `word` names a quantifier.
    pub fn takes_lambda(&self, word: &str) -> bool {
        self.quantifiers.iter().any(|q| q == word)
    }
}

#[test]
fn test_default_vocabulary() {
    let vocabulary = Vocabulary::default();
    assert!(vocabulary.is_keyword("any"));
    assert!(vocabulary.takes_lambda("any"));
    assert!(vocabulary.is_keyword("startswith"));
    assert!(vocabulary.is_keyword("endswith"));
    assert!(vocabulary.is_keyword("contains"));
    assert!(!vocabulary.takes_lambda("startswith"));
    assert!(!vocabulary.is_keyword("age"));
}

#[test]
fn test_extension() {
    let vocabulary = Vocabulary::default()
        .with_quantifier("all")
        .with_function("matches");
    assert!(vocabulary.takes_lambda("all"));
    assert!(vocabulary.is_keyword("matches"));
    assert!(!vocabulary.takes_lambda("matches"));
}

#[test]
fn test_empty_vocabulary() {
    let vocabulary = Vocabulary::empty();
    assert!(!vocabulary.is_keyword("any"));
    assert!(!vocabulary.is_keyword("startswith"));
}

#[test]
fn test_duplicate_additions_ignored() {
    let vocabulary = Vocabulary::default()
        .with_quantifier("any")
        .with_function("contains");
    assert_eq!(vocabulary, Vocabulary::default());
}
