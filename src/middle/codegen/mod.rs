//! Code generator module
//!
//! Walks the AST once, top-down, and emits JavaScript text. All per-run
//! state (the entry-point latch) lives in a [`Generator`] value that the
//! call consumes, so repeated generation runs cannot leak into one another.

pub mod generator;

#[cfg(test)]
mod tests;

pub use generator::{Generator, INDENT};

use crate::frontend::parser::Node;

/// Code generation error
///
/// Signals a grammar/generator mismatch (a node kind reaching a position
/// that has no emission rule), never a user-input defect.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodegenError {
    #[error("no emission rule for {kind} node in {position} position")]
    UnsupportedNode {
        kind: &'static str,
        position: &'static str,
    },
}

/// Result of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// The emitted JavaScript, trailing entry-point invocation included
    pub code: String,
    /// Dotted path of the designated entry point, when one was seen
    pub entry_point: Option<String>,
}

/// Generate JavaScript for the given tree with a fresh generator
pub fn generate(root: &Node) -> Result<Generated, CodegenError> {
    tracing::debug!("generating code for {} tree", root.kind_name());

    let generated = Generator::new().generate(root)?;

    tracing::debug!(
        "generation complete, {} bytes, entry point: {:?}",
        generated.code.len(),
        generated.entry_point
    );
    Ok(generated)
}
