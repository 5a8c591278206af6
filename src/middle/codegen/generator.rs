//! JavaScript emitter
//!
//! One exhaustive dispatch per node kind. Indentation depth is threaded
//! through every call as a column count; no rule consults global state for
//! layout, so nested blocks compose without post-hoc adjustment.

use super::{CodegenError, Generated};
use crate::frontend::parser::Node;

/// Columns added per nesting level
pub const INDENT: usize = 2;

/// Designated entry-point method name
const ENTRY_METHOD: &str = "Main";

/// Code generator for one run
///
/// Holds the entry-point latch. `generate` consumes the value, so a second
/// run always starts from a fresh generator.
#[derive(Debug, Default)]
pub struct Generator {
    entry_point: Option<String>,
}

impl Generator {
    /// Create a fresh generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the whole tree, then the trailing entry-point invocation if a
    /// method named `Main` was seen anywhere in it
    pub fn generate(
        mut self,
        root: &Node,
    ) -> Result<Generated, CodegenError> {
        let mut code = self.emit(root, 0)?;
        if let Some(path) = &self.entry_point {
            code.push('\n');
            code.push_str(path);
            code.push_str("()");
        }
        Ok(Generated {
            code,
            entry_point: self.entry_point,
        })
    }

    /// Emit one node at the given indentation depth
    fn emit(
        &mut self,
        node: &Node,
        depth: usize,
    ) -> Result<String, CodegenError> {
        match node {
            Node::Program { items } => self.emit_sequence(items, depth),
            Node::Namespace { classes, .. } => self.emit_sequence(classes, depth),
            Node::LibraryImport { path } => {
                // Imports have no executable effect in the target
                Ok(format!("// Imported library: {path}"))
            }
            Node::Class { name, members, .. } => self.emit_class(name, members, depth),
            Node::Method {
                name, params, body, ..
            } => self.emit_method(name, params, body, depth),
            Node::VariableDeclaration { name, init, .. } => {
                let code = match init {
                    Some(init) => {
                        format!("{}let {} = {};", pad(depth), name, self.emit_expr(init)?)
                    }
                    None => format!("{}let {};", pad(depth), name),
                };
                Ok(code)
            }
            Node::Assignment { target, value } => Ok(format!(
                "{}{} = {};",
                pad(depth),
                target,
                self.emit_expr(value)?
            )),
            Node::CompoundAssignment { target, op, value } => Ok(format!(
                "{}{} {} {};",
                pad(depth),
                target,
                op,
                self.emit_expr(value)?
            )),
            Node::If {
                condition,
                then_block,
                else_block,
            } => {
                let indent = pad(depth);
                let condition = self.emit_expr(condition)?;
                let then_branch = self.emit(then_block, depth)?;
                match else_block {
                    Some(else_block) => {
                        let else_branch = self.emit(else_block, depth)?;
                        Ok(format!(
                            "{indent}if ({condition}) {{\n{then_branch}\n{indent}}} else {{\n{else_branch}\n{indent}}}"
                        ))
                    }
                    None => Ok(format!(
                        "{indent}if ({condition}) {{\n{then_branch}\n{indent}}}"
                    )),
                }
            }
            Node::While { condition, body } => {
                let indent = pad(depth);
                let condition = self.emit_expr(condition)?;
                let body = self.emit(body, depth)?;
                Ok(format!("{indent}while ({condition}) {{\n{body}\n{indent}}}"))
            }
            Node::DoWhile { body, condition } => {
                let indent = pad(depth);
                let body = self.emit(body, depth)?;
                let condition = self.emit_expr(condition)?;
                Ok(format!(
                    "{indent}do {{\n{body}\n{indent}}} while ({condition});"
                ))
            }
            Node::Block { statements } | Node::ElseBlock { statements } => {
                self.emit_sequence(statements, depth + INDENT)
            }
            Node::Return { value } => {
                let code = match value {
                    Some(value) => format!("{}return {};", pad(depth), self.emit_expr(value)?),
                    None => format!("{}return;", pad(depth)),
                };
                Ok(code)
            }
            Node::MethodCall { name, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.emit_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?
                    .join(", ");
                Ok(format!("{}{}({});", pad(depth), name, args))
            }
            Node::ExpressionStatement { expr } => {
                Ok(format!("{}{};", pad(depth), self.emit_expr(expr)?))
            }
            Node::Output { arg } => Ok(format!(
                "{}console.log({})",
                pad(depth),
                self.emit_expr(arg)?
            )),
            Node::BinaryOperation { .. }
            | Node::UnaryOperation { .. }
            | Node::Variable { .. }
            | Node::Number { .. }
            | Node::String { .. }
            | Node::Boolean { .. } => self.emit_expr(node),
        }
    }

    /// Emit nodes one per line at the given depth
    fn emit_sequence(
        &mut self,
        nodes: &[Node],
        depth: usize,
    ) -> Result<String, CodegenError> {
        let lines = nodes
            .iter()
            .map(|node| self.emit(node, depth))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    /// Class header at the current depth, members one level deeper
    ///
    /// When the entry-point latch flips inside this class, the recorded
    /// path gains the class name as its qualifier.
    fn emit_class(
        &mut self,
        name: &str,
        members: &[Node],
        depth: usize,
    ) -> Result<String, CodegenError> {
        let latched_before = self.entry_point.is_some();

        let mut code = format!("class {name} {{");
        for member in members {
            code.push('\n');
            code.push_str(&self.emit(member, depth + INDENT)?);
        }
        code.push_str("\n}");

        if !latched_before {
            if let Some(entry) = self.entry_point.take() {
                self.entry_point = Some(format!("{name}.{entry}"));
            }
        }

        Ok(code)
    }

    fn emit_method(
        &mut self,
        name: &str,
        params: &[String],
        body: &[Node],
        depth: usize,
    ) -> Result<String, CodegenError> {
        if name == ENTRY_METHOD && self.entry_point.is_none() {
            self.entry_point = Some(name.to_string());
        }

        let indent = pad(depth);
        let mut code = format!("{}function {}({}) {{", indent, name, params.join(", "));
        for statement in body {
            code.push('\n');
            code.push_str(&self.emit(statement, depth + INDENT)?);
        }
        code.push('\n');
        code.push_str(&indent);
        code.push('}');
        Ok(code)
    }

    /// Emit an expression-position node
    fn emit_expr(
        &self,
        node: &Node,
    ) -> Result<String, CodegenError> {
        match node {
            Node::BinaryOperation { op, lhs, rhs } => Ok(format!(
                "({} {} {})",
                self.emit_expr(lhs)?,
                op,
                self.emit_expr(rhs)?
            )),
            Node::UnaryOperation { op, operand } => {
                Ok(format!("{}{}", op, self.emit_expr(operand)?))
            }
            Node::Variable { name } => Ok(name.clone()),
            // The float suffix has no meaning in the untyped target
            Node::Number { text } => Ok(text.strip_suffix('f').unwrap_or(text).to_string()),
            Node::String { text } => Ok(text.clone()),
            Node::Boolean { value } => Ok(value.to_string()),
            other => Err(CodegenError::UnsupportedNode {
                kind: other.kind_name(),
                position: "expression",
            }),
        }
    }
}

fn pad(depth: usize) -> String {
    " ".repeat(depth)
}
