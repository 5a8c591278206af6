//! Lexer module
//!
//! Converts raw source text into an ordered token sequence. The scan is a
//! single pass with no backtracking; the first unscannable character aborts
//! the whole run with a [`LexError`].

pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

// Re-export types
pub use tokenizer::Lexer;
pub use tokens::{LexError, Token, TokenKind};

/// Tokenize source code
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tracing::debug!("lexing {} bytes of source", source.len());

    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    tracing::debug!("lexing complete, {} tokens", tokens.len());
    Ok(tokens)
}
