//! Back end: JavaScript code generation

pub mod codegen;

pub use codegen::{generate, CodegenError, Generated};
