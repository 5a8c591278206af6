//! Tokenizer implementation
//!
//! Single-pass scanner over the source text. Scan dispatch order encodes
//! token precedence: the console output forms are checked before the generic
//! identifier rule, and multi-character operators before their
//! single-character prefixes, so tokens never fragment.

use super::tokens::{classify_word, LexError, Token, TokenKind};
use crate::util::span::{Position, Span};
use std::iter::Peekable;
use std::str::Chars;

/// Identifier start character (ASCII letters and underscore)
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Identifier continuation character
#[inline]
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Main lexer structure
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    offset: usize,
    line: usize,
    column: usize,
    start_offset: usize,
    start_line: usize,
    start_column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            offset: 0,
            line: 1,
            column: 1,
            start_offset: 0,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.offset)
    }

    /// Get start position of current token
    pub fn start_position(&self) -> Position {
        Position::with_offset(self.start_line, self.start_column, self.start_offset)
    }

    /// Get span of current token
    pub fn span(&self) -> Span {
        Span::new(self.start_position(), self.position())
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        match self.chars.next() {
            Some('\n') => {
                self.offset += 1;
                self.line += 1;
                self.column = 1;
                Some('\n')
            }
            Some(c) => {
                self.offset += c.len_utf8();
                self.column += 1;
                Some(c)
            }
            None => None,
        }
    }

    /// Peek at next character
    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    /// Peek at character after next
    fn peek_next(&mut self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    /// Consume the next character if it matches
    fn eat(
        &mut self,
        expected: char,
    ) -> bool {
        if self.peek() == Some(&expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip whitespace and comments
    ///
    /// Comment recognition must run before `/` is scanned as an operator.
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '/' => {
                    if self.peek_next() == Some('/') {
                        // Single line comment
                        self.advance();
                        self.advance();
                        while let Some(&c) = self.peek() {
                            if c == '\n' {
                                break;
                            }
                            self.advance();
                        }
                    } else if self.peek_next() == Some('*') {
                        // Block comment, closed by the first `*/`
                        self.advance();
                        self.advance();
                        while let Some(c) = self.advance() {
                            if c == '*' && self.peek() == Some(&'/') {
                                self.advance();
                                break;
                            }
                        }
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
    }

    /// Generate next token, `Ok(None)` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace_and_comments();

        self.start_offset = self.offset;
        self.start_line = self.line;
        self.start_column = self.column;

        let c = match self.advance() {
            Some(c) => c,
            None => return Ok(None),
        };

        match c {
            c if is_identifier_start(c) => Ok(Some(self.scan_word(c))),
            c if c.is_ascii_digit() => Ok(Some(self.scan_number(c))),
            '"' => self.scan_string().map(Some),
            '\'' => self.scan_char().map(Some),
            ';' | ',' | '(' | ')' | '{' | '}' => {
                Ok(Some(self.make_token(TokenKind::Delimiter, c.to_string())))
            }
            '+' | '-' | '*' | '/' | '%' | '<' | '>' | '=' | '!' | '&' | '|' | '.' => {
                Ok(Some(self.scan_operator(c)))
            }
            c => Err(LexError::UnexpectedChar {
                ch: c,
                position: self.start_position(),
            }),
        }
    }

    /// Scan an operator, longest form first
    fn scan_operator(
        &mut self,
        first: char,
    ) -> Token {
        let text = match first {
            '+' | '-' => {
                if self.eat('=') {
                    format!("{first}=")
                } else if self.eat(first) {
                    format!("{first}{first}")
                } else {
                    first.to_string()
                }
            }
            '*' | '/' | '%' | '=' | '!' | '<' | '>' => {
                if self.eat('=') {
                    format!("{first}=")
                } else {
                    first.to_string()
                }
            }
            '&' => {
                if self.eat('&') {
                    "&&".to_string()
                } else {
                    "&".to_string()
                }
            }
            '|' => {
                if self.eat('|') {
                    "||".to_string()
                } else {
                    "|".to_string()
                }
            }
            // '.'
            _ => first.to_string(),
        };
        self.make_token(TokenKind::Operator, text)
    }

    /// Scan an identifier-shaped word, then reclassify
    ///
    /// `Console.WriteLine` / `Console.Write` collapse into one Output token;
    /// the lookahead is bounded by the longer of the two member names.
    fn scan_word(
        &mut self,
        first_char: char,
    ) -> Token {
        let mut word = String::new();
        word.push(first_char);

        while let Some(&c) = self.peek() {
            if is_identifier_char(c) {
                word.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if word == "Console" && self.peek() == Some(&'.') {
            if let Some(member) = self.try_output_member() {
                let text = format!("Console.{member}");
                return self.make_token(TokenKind::Output, text);
            }
        }

        let kind = classify_word(&word);
        self.make_token(kind, word)
    }

    /// Try to consume `.WriteLine` or `.Write` after `Console`
    fn try_output_member(&mut self) -> Option<String> {
        let mut look = self.chars.clone();
        if look.next() != Some('.') {
            return None;
        }
        let mut member = String::new();
        for c in look {
            if is_identifier_char(c) {
                member.push(c);
            } else {
                break;
            }
        }
        if member == "WriteLine" || member == "Write" {
            // The dot plus the member name
            for _ in 0..=member.len() {
                self.advance();
            }
            Some(member)
        } else {
            None
        }
    }

    /// Scan a numeric literal: digits, optional fraction, optional `f` suffix
    fn scan_number(
        &mut self,
        first_digit: char,
    ) -> Token {
        let mut text = String::new();
        text.push(first_digit);

        while let Some(&c) = self.peek() {
            if c.is_ascii_digit() {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if self.peek() == Some(&'.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            text.push('.');
            self.advance();
            while let Some(&c) = self.peek() {
                if c.is_ascii_digit() {
                    text.push(c);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        if self.eat('f') {
            text.push('f');
        }

        self.make_token(TokenKind::Number, text)
    }

    /// Scan a string literal with backslash escapes; text keeps the quotes
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let start = self.start_position();
        let mut text = String::from('"');

        loop {
            match self.advance() {
                None => return Err(LexError::UnterminatedString { position: start }),
                Some('"') => {
                    text.push('"');
                    break;
                }
                Some('\\') => {
                    text.push('\\');
                    match self.advance() {
                        Some(escaped) => text.push(escaped),
                        None => return Err(LexError::UnterminatedString { position: start }),
                    }
                }
                Some(c) => text.push(c),
            }
        }

        Ok(self.make_token(TokenKind::String, text))
    }

    /// Scan a char literal: exactly one character or one escape
    fn scan_char(&mut self) -> Result<Token, LexError> {
        let start = self.start_position();
        let mut text = String::from('\'');

        match self.advance() {
            None | Some('\'') => return Err(LexError::UnterminatedChar { position: start }),
            Some('\\') => {
                text.push('\\');
                match self.advance() {
                    Some(escaped) => text.push(escaped),
                    None => return Err(LexError::UnterminatedChar { position: start }),
                }
            }
            Some(c) => text.push(c),
        }

        if self.advance() != Some('\'') {
            return Err(LexError::UnterminatedChar { position: start });
        }
        text.push('\'');

        Ok(self.make_token(TokenKind::Char, text))
    }

    /// Create token with current span
    fn make_token(
        &self,
        kind: TokenKind,
        text: String,
    ) -> Token {
        Token::new(kind, text, self.span())
    }
}
