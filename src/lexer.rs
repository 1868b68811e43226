use crate::ast::operators::BinaryOp;
use crate::ast::{LiteralValue, Token, TokenKind};
use crate::error::LexError;
use crate::span::Span;
use crate::vocabulary::Vocabulary;

/// Lazy scanner over a single query string.
///
/// Tokens come out one at a time through [`next_token`](Lexer::next_token) or
/// the [`Iterator`] impl, in input order, each carrying its character span.
/// The scan is not restartable; build a new `Lexer` to scan again.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    vocabulary: Vocabulary,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer::with_vocabulary(input, Vocabulary::default())
    }

    pub fn with_vocabulary(input: &str, vocabulary: Vocabulary) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            vocabulary,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reports whether another token remains, skipping whitespace first.
    pub fn has_next(&mut self) -> bool {
        self.skip_whitespace();
        self.position < self.input.len()
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self, quote: char) -> Result<String, LexError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    self.advance(); // consume backslash
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some('"') => result.push('"'),
                        Some('\'') => result.push('\''),
                        Some('\\') => result.push('\\'),
                        Some(ch) => {
                            return Err(LexError::InvalidEscape {
                                found: ch,
                                span: Span::new(self.position - 1, self.position + 1),
                            });
                        }
                        None => {
                            return Err(LexError::UnterminatedString {
                                span: Span::new(start, self.position),
                            });
                        }
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString {
            span: Span::new(start, self.position),
        })
    }

    fn read_number(&mut self) -> Result<LiteralValue, LexError> {
        let start = self.position;
        let mut number = String::new();
        let mut is_float = false;

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !is_float
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_float = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let out_of_range = || LexError::NumberOutOfRange {
            text: number.clone(),
            span: Span::new(start, self.position),
        };

        if is_float {
            // Digit strings past f64's range parse to infinity, not an error
            let value = number.parse::<f64>().map_err(|_| out_of_range())?;
            if !value.is_finite() {
                return Err(out_of_range());
            }
            Ok(LiteralValue::Float(value))
        } else {
            let value = number.parse::<i64>().map_err(|_| out_of_range())?;
            Ok(LiteralValue::Integer(value))
        }
    }

    fn classify_word(&self, word: &str) -> TokenKind {
        if self.vocabulary.is_keyword(word) {
            return TokenKind::Keyword;
        }
        if let Some(op) = BinaryOp::from_word(word) {
            return TokenKind::Operator(op);
        }
        match word {
            "true" => TokenKind::Literal(LiteralValue::Bool(true)),
            "false" => TokenKind::Literal(LiteralValue::Bool(false)),
            "null" => TokenKind::Literal(LiteralValue::Null),
            _ => TokenKind::Identifier,
        }
    }

    /// Returns and consumes the next token.
    ///
    /// Fails when the remaining input matches no lexeme rule, or with
    /// [`LexError::UnexpectedEnd`] when no input remains.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Err(LexError::UnexpectedEnd {
                span: Span::new(start, start),
            });
        };

        let kind = match ch {
            '(' | ')' | '/' | ':' | ',' | '.' => {
                self.advance();
                TokenKind::Delimiter(ch)
            }
            '"' | '\'' => TokenKind::Literal(LiteralValue::String(self.read_string(ch)?)),
            '-' if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                TokenKind::Literal(self.read_number()?)
            }
            ch if ch.is_ascii_digit() => TokenKind::Literal(self.read_number()?),
            ch if ch.is_alphabetic() || ch == '_' => {
                let word = self.read_identifier();
                self.classify_word(&word)
            }
            ch => {
                // Consume the offender so iteration can continue past it
                self.advance();
                return Err(LexError::UnexpectedChar {
                    found: ch,
                    span: Span::new(start, start + 1),
                });
            }
        };

        let text: String = self.input[start..self.position].iter().collect();
        Ok(Token::new(kind, text, Span::new(start, self.position)))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            Some(self.next_token())
        } else {
            None
        }
    }
}

#[test]
fn test_operator_words() {
    let mut lexer = Lexer::new("eq and or");
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Operator(BinaryOp::Equal)
    );
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Operator(BinaryOp::And)
    );
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Operator(BinaryOp::Or)
    );
    assert!(!lexer.has_next());
}

#[test]
fn test_path_tokens() {
    let mut lexer = Lexer::new("owner/age gt 5");
    assert_eq!(lexer.next_token().unwrap().text, "owner");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Delimiter('/'));
    assert_eq!(lexer.next_token().unwrap().text, "age");
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Operator(BinaryOp::GreaterThan)
    );
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Literal(LiteralValue::Integer(5))
    );
}
