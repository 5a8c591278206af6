//! Token types and reserved-word classification

use crate::util::span::{Position, Span};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Lexer error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {position} (byte {})", .position.offset)]
    UnexpectedChar { ch: char, position: Position },
    #[error("unterminated string literal starting at {position}")]
    UnterminatedString { position: Position },
    #[error("malformed character literal starting at {position}")]
    UnterminatedChar { position: Position },
}

/// Token kind
///
/// The set is closed: reserved words split into [`TokenKind::Keyword`] and
/// [`TokenKind::Type`], the two console output forms lex as a single
/// [`TokenKind::Output`] token, and everything unscannable is
/// [`TokenKind::Unrecognized`] (reported as a [`LexError`], never part of a
/// successful token stream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Type,
    Identifier,
    Number,
    String,
    Char,
    Operator,
    Delimiter,
    Output,
    Unrecognized,
}

/// Token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Check kind and literal text at once
    #[inline]
    pub fn is(
        &self,
        kind: TokenKind,
        text: &str,
    ) -> bool {
        self.kind == kind && self.text == text
    }
}

/// Reserved keywords
pub static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "public",
        "private",
        "static",
        "return",
        "if",
        "else",
        "do",
        "while",
        "for",
        "using",
        "namespace",
        "true",
        "false",
    ]
    .into_iter()
    .collect()
});

/// Built-in type names (`class` included, as in the source language)
pub static TYPE_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "class", "int", "float", "double", "string", "char", "bool", "void",
    ]
    .into_iter()
    .collect()
});

/// Classify a scanned word as keyword, type name, or plain identifier
pub fn classify_word(word: &str) -> TokenKind {
    if KEYWORDS.contains(word) {
        TokenKind::Keyword
    } else if TYPE_NAMES.contains(word) {
        TokenKind::Type
    } else {
        TokenKind::Identifier
    }
}
