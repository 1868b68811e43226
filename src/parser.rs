use crate::ast::{BinaryOp, Expr, MethodArgs, Token, TokenKind};
use crate::error::{LexError, ParseError, QueryError, near_excerpt};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::vocabulary::Vocabulary;

/// One-token lookahead over a [`Lexer`].
///
/// `peek` pulls at most one token ahead of the consumed input and caches it;
/// `advance` hands the cached token out. A token handed out is never handed
/// back.
struct TokenCursor {
    lexer: Lexer,
    lookahead: Option<Token>,
    last_end: usize,
}

impl TokenCursor {
    fn new(lexer: Lexer) -> Self {
        TokenCursor {
            lexer,
            lookahead: None,
            last_end: 0,
        }
    }

    fn fill(&mut self) -> Result<(), LexError> {
        if self.lookahead.is_none() && self.lexer.has_next() {
            self.lookahead = Some(self.lexer.next_token()?);
        }
        Ok(())
    }

    fn peek(&mut self) -> Result<Option<&Token>, LexError> {
        self.fill()?;
        Ok(self.lookahead.as_ref())
    }

    fn advance(&mut self) -> Result<Option<Token>, LexError> {
        self.fill()?;
        let token = self.lookahead.take();
        if let Some(token) = &token {
            self.last_end = token.span.end;
        }
        Ok(token)
    }

    /// Consumes the next token when it is the delimiter `ch`.
    fn accept_delimiter(&mut self, ch: char) -> Result<bool, LexError> {
        let matches = match self.peek()? {
            Some(token) => token.kind == TokenKind::Delimiter(ch),
            None => false,
        };
        if matches {
            self.advance()?;
        }
        Ok(matches)
    }
}

/// Recursive descent parser for a single query expression.
///
/// The grammar is predictive with one token of lookahead; nothing is ever
/// un-consumed. A parser is single-use: [`parse`](Parser::parse) takes it by
/// value, so re-parsing means constructing a fresh one.
///
/// ```
/// use caraway_lang::{BinaryOp, Expr, Parser};
///
/// let expr = Parser::new("age gt 5").parse().unwrap();
/// assert!(matches!(
///     expr,
///     Expr::Binary { operator: BinaryOp::GreaterThan, .. }
/// ));
/// ```
pub struct Parser {
    input: String,
    cursor: TokenCursor,
    vocabulary: Vocabulary,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Parser::with_vocabulary(input, Vocabulary::default())
    }

    pub fn with_vocabulary(input: &str, vocabulary: Vocabulary) -> Self {
        let lexer = Lexer::with_vocabulary(input, vocabulary.clone());
        Parser {
            input: input.to_string(),
            cursor: TokenCursor::new(lexer),
            vocabulary,
        }
    }

    /// Parses the input as one complete query expression.
    ///
    /// Anything left over after the root expression is an error; a malformed
    /// query yields exactly one error and no partial tree.
    pub fn parse(mut self) -> Result<Expr, QueryError> {
        let expr = self.parse_query(None)?;

        if let Some(token) = self.cursor.advance()? {
            return Err(ParseError::TrailingTokens {
                found: format!("'{}'", token.text),
                near: near_excerpt(&self.input, token.span.end),
                span: token.span,
            }
            .into());
        }

        Ok(expr)
    }

    /// query := '(' query ')' [and_or]
    ///        | member ['.' method_call | comparison] [and_or]
    ///
    /// `binder` is the lambda parameter in scope, if any; it threads down
    /// through every recursive call and falls away when the call returns.
    fn parse_query(&mut self, binder: Option<&str>) -> Result<Expr, QueryError> {
        let left = if self.cursor.accept_delimiter('(')? {
            let inner = self.parse_query(binder)?;
            self.expect_closing_paren()?;
            inner
        } else {
            let member = self.parse_member(binder)?;
            if self.cursor.accept_delimiter('.')? {
                self.parse_method_call(member)?
            } else if let Some(operator) = self.peek_comparison()? {
                self.cursor.advance()?;
                let right = self.parse_literal_operand()?;
                Expr::binary(operator, member, right)
            } else {
                member
            }
        };

        // and_or := ('and' | 'or') query
        if let Some(operator) = self.peek_combinator()? {
            self.cursor.advance()?;
            let right = self.parse_query(binder)?;
            return Ok(Expr::binary(operator, left, right));
        }

        Ok(left)
    }

    /// member := IDENT ['/' member]
    ///
    /// Inside a lambda body the outermost segment must be the active binder;
    /// segments past the first are plain field names and go unchecked.
    fn parse_member(&mut self, binder: Option<&str>) -> Result<Expr, QueryError> {
        let head = self.expect_identifier("member name")?;

        if let Some(binder) = binder {
            if head.text != binder {
                return Err(ParseError::BinderMismatch {
                    binder: binder.to_string(),
                    found: head.text.clone(),
                    near: near_excerpt(&self.input, head.span.end),
                    span: head.span,
                }
                .into());
            }
        }

        let nested = if self.cursor.accept_delimiter('/')? {
            Some(self.parse_member_tail()?)
        } else {
            None
        };

        Ok(Expr::member(&head.text, nested)?)
    }

    fn parse_member_tail(&mut self) -> Result<Expr, QueryError> {
        let segment = self.expect_identifier("member name")?;
        let nested = if self.cursor.accept_delimiter('/')? {
            Some(self.parse_member_tail()?)
        } else {
            None
        };
        Ok(Expr::member(&segment.text, nested)?)
    }

    /// method_call := KEYWORD '(' (lambda | args) ')'
    ///
    /// Quantifiers take a lambda; every other keyword takes literal
    /// arguments. The vocabulary decides which is which.
    fn parse_method_call(&mut self, member: Expr) -> Result<Expr, QueryError> {
        let name = match self.cursor.advance()? {
            Some(token) if token.kind == TokenKind::Keyword => token,
            Some(token) => return Err(self.unexpected_token("method name", &token).into()),
            None => return Err(self.unexpected_end("method name").into()),
        };

        self.expect_delimiter('(')?;

        let args = if self.vocabulary.takes_lambda(&name.text) {
            MethodArgs::Lambda(Box::new(self.parse_lambda()?))
        } else {
            MethodArgs::Args(self.parse_args()?)
        };

        self.expect_closing_paren()?;

        Ok(Expr::method_call(&name.text, member, args))
    }

    /// lambda := IDENT ':' query
    ///
    /// The parameter becomes the active binder for the body, shadowing any
    /// outer one for exactly the body's extent.
    fn parse_lambda(&mut self) -> Result<Expr, QueryError> {
        let parameter = self.expect_identifier("lambda parameter")?;
        self.expect_delimiter(':')?;
        let body = self.parse_query(Some(parameter.text.as_str()))?;
        Ok(Expr::lambda(&parameter.text, body)?)
    }

    /// args := literal (',' literal)*
    fn parse_args(&mut self) -> Result<Vec<Expr>, QueryError> {
        let mut args = vec![self.parse_literal_operand()?];
        while self.cursor.accept_delimiter(',')? {
            args.push(self.parse_literal_operand()?);
        }
        Ok(args)
    }

    fn parse_literal_operand(&mut self) -> Result<Expr, QueryError> {
        match self.cursor.advance()? {
            Some(Token {
                kind: TokenKind::Literal(value),
                ..
            }) => Ok(Expr::literal(value)),
            Some(token) => Err(self.unexpected_token("literal", &token).into()),
            None => Err(self.unexpected_end("literal").into()),
        }
    }

    fn peek_comparison(&mut self) -> Result<Option<BinaryOp>, LexError> {
        Ok(match self.cursor.peek()? {
            Some(Token {
                kind: TokenKind::Operator(op),
                ..
            }) if !op.is_combinator() => Some(*op),
            _ => None,
        })
    }

    fn peek_combinator(&mut self) -> Result<Option<BinaryOp>, LexError> {
        Ok(match self.cursor.peek()? {
            Some(Token {
                kind: TokenKind::Operator(op),
                ..
            }) if op.is_combinator() => Some(*op),
            _ => None,
        })
    }

    fn expect_identifier(&mut self, expected: &str) -> Result<Token, QueryError> {
        match self.cursor.advance()? {
            Some(token) if token.kind == TokenKind::Identifier => Ok(token),
            Some(token) => Err(self.unexpected_token(expected, &token).into()),
            None => Err(self.unexpected_end(expected).into()),
        }
    }

    fn expect_delimiter(&mut self, ch: char) -> Result<(), QueryError> {
        match self.cursor.advance()? {
            Some(token) if token.kind == TokenKind::Delimiter(ch) => Ok(()),
            Some(token) => Err(self.unexpected_token(&format!("'{}'", ch), &token).into()),
            None => Err(self.unexpected_end(&format!("'{}'", ch)).into()),
        }
    }

    /// Closes the paren the current grammar level opened; a grouping never
    /// outlives the level that started it.
    fn expect_closing_paren(&mut self) -> Result<(), QueryError> {
        match self.cursor.advance()? {
            Some(token) if token.kind == TokenKind::Delimiter(')') => Ok(()),
            Some(token) => Err(ParseError::ExpectedClosingParen {
                near: near_excerpt(&self.input, token.span.end),
                span: token.span,
            }
            .into()),
            None => {
                let end = self.cursor.last_end;
                Err(ParseError::ExpectedClosingParen {
                    near: near_excerpt(&self.input, end),
                    span: Span::new(end, end),
                }
                .into())
            }
        }
    }

    fn unexpected_token(&self, expected: &str, token: &Token) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: format!("'{}'", token.text),
            near: near_excerpt(&self.input, token.span.end),
            span: token.span,
        }
    }

    fn unexpected_end(&self, expected: &str) -> ParseError {
        let end = self.cursor.last_end;
        ParseError::UnexpectedEndOfInput {
            expected: expected.to_string(),
            near: near_excerpt(&self.input, end),
            span: Span::new(end, end),
        }
    }
}
