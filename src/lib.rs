//! cs2js - a demonstration C# to JavaScript transpiler
//!
//! The pipeline is three stages over one in-memory source string:
//! text → [lexer] → tokens → [parser] → AST → [code generator] → text.
//!
//! # Example
//!
//! ```
//! use cs2js::translate;
//!
//! let source = "namespace N { class C { public static void Main() { int x = 3; } } }";
//! let generated = translate(source).unwrap();
//! assert!(generated.code.ends_with("C.Main()"));
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod middle;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

use crate::frontend::lexer::{self, LexError};
use crate::frontend::parser::{self, ParseError};
use crate::middle::codegen::{self, CodegenError, Generated};
use tracing::debug;

/// Tool version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "cs2js";

/// Translation error
///
/// Exactly one of the three stage errors; callers branch on the kind
/// instead of parsing message text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
    #[error("code generation error: {0}")]
    Codegen(#[from] CodegenError),
}

/// Translate one source string into JavaScript
///
/// The first failing stage aborts the run; there is no partial output.
pub fn translate(source: &str) -> std::result::Result<Generated, TranslateError> {
    debug!("translating {} bytes", source.len());
    let tokens = lexer::tokenize(source)?;
    let ast = parser::parse(&tokens)?;
    let generated = codegen::generate(&ast)?;
    debug!("translation complete");
    Ok(generated)
}

use std::fs;
use std::path::Path;

/// Translate a source file
pub fn translate_file(path: &Path) -> Result<Generated> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    debug!("read {}", path.display());
    translate(&source).with_context(|| format!("Failed to translate: {}", path.display()))
}
