//! Parser state and error handling
//!
//! The cursor walks the token slice strictly left to right. Lookahead is
//! bounded: grammar rules inspect at most the current token and the one
//! after it (see `statements::parse_statement`). The first mismatch aborts
//! the whole parse; nothing is collected or recovered.

use crate::frontend::lexer::tokens::{Token, TokenKind};
use crate::util::span::Span;

/// Parse error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found:?} '{text}' at {span}")]
    ExpectedToken {
        expected: String,
        found: TokenKind,
        text: String,
        span: Span,
    },
    #[error("unexpected token {found:?} '{text}' at {span}")]
    UnexpectedToken {
        found: TokenKind,
        text: String,
        span: Span,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
}

/// Parser cursor over the token slice
pub struct ParserState<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> ParserState<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// The second token of the two-token lookahead window
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    pub fn span(&self) -> Span {
        self.current().map(|t| t.span).unwrap_or_else(Span::dummy)
    }

    /// Consume and return the current token
    pub fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    /// Check the current token's kind
    pub fn at(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    /// Check the current token's kind and text
    pub fn at_text(
        &self,
        kind: TokenKind,
        text: &str,
    ) -> bool {
        self.current().is_some_and(|t| t.is(kind, text))
    }

    pub fn at_keyword(
        &self,
        keyword: &str,
    ) -> bool {
        self.at_text(TokenKind::Keyword, keyword)
    }

    pub fn at_delim(
        &self,
        delim: &str,
    ) -> bool {
        self.at_text(TokenKind::Delimiter, delim)
    }

    pub fn at_op(
        &self,
        op: &str,
    ) -> bool {
        self.at_text(TokenKind::Operator, op)
    }

    /// Current operator text, if the current token is an operator drawn
    /// from `ops`
    pub fn current_op_in(
        &self,
        ops: &[&str],
    ) -> Option<String> {
        let token = self.current()?;
        if token.kind == TokenKind::Operator && ops.contains(&token.text.as_str()) {
            Some(token.text.clone())
        } else {
            None
        }
    }

    /// Consume a token of the given kind (and text, when given), or fail
    pub fn expect(
        &mut self,
        kind: TokenKind,
        text: Option<&str>,
    ) -> Result<Token, ParseError> {
        let matched = self
            .current()
            .is_some_and(|t| t.kind == kind && text.is_none_or(|x| t.text == x));
        if matched {
            if let Some(token) = self.bump() {
                return Ok(token);
            }
        }

        let expected = describe(kind, text);
        Err(match self.current() {
            Some(token) => ParseError::ExpectedToken {
                expected,
                found: token.kind,
                text: token.text.clone(),
                span: token.span,
            },
            None => ParseError::UnexpectedEof { expected },
        })
    }

    /// Build an error for the current token without consuming it
    pub fn unexpected(
        &self,
        expected: &str,
    ) -> ParseError {
        match self.current() {
            Some(token) => ParseError::ExpectedToken {
                expected: expected.to_string(),
                found: token.kind,
                text: token.text.clone(),
                span: token.span,
            },
            None => ParseError::UnexpectedEof {
                expected: expected.to_string(),
            },
        }
    }
}

fn describe(
    kind: TokenKind,
    text: Option<&str>,
) -> String {
    match text {
        Some(text) => format!("{kind:?} '{text}'"),
        None => format!("{kind:?}"),
    }
}
