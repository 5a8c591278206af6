//! Abstract Syntax Tree types
//!
//! One closed node enum covers every construct the grammar can produce; the
//! code generator pattern-matches it exhaustively, so a new variant cannot be
//! added without also deciding its emission rule.

use std::fmt::Write as _;

/// AST node
///
/// Child order is structural and load-bearing: an `If` always carries
/// condition, then-block, optional else-block; a `DoWhile` carries its body
/// before its guard, mirroring source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program {
        items: Vec<Node>,
    },
    LibraryImport {
        path: String,
    },
    Namespace {
        name: String,
        classes: Vec<Node>,
    },
    Class {
        name: String,
        modifiers: Vec<String>,
        members: Vec<Node>,
    },
    Method {
        name: String,
        modifiers: Vec<String>,
        params: Vec<String>,
        return_type: String,
        body: Vec<Node>,
    },
    VariableDeclaration {
        ty: String,
        name: String,
        init: Option<Box<Node>>,
    },
    Assignment {
        target: String,
        value: Box<Node>,
    },
    CompoundAssignment {
        target: String,
        op: String,
        value: Box<Node>,
    },
    BinaryOperation {
        op: String,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    UnaryOperation {
        op: String,
        operand: Box<Node>,
    },
    Variable {
        name: String,
    },
    Number {
        text: String,
    },
    String {
        text: String,
    },
    Boolean {
        value: bool,
    },
    If {
        condition: Box<Node>,
        then_block: Box<Node>,
        else_block: Option<Box<Node>>,
    },
    Block {
        statements: Vec<Node>,
    },
    ElseBlock {
        statements: Vec<Node>,
    },
    Return {
        value: Option<Box<Node>>,
    },
    DoWhile {
        body: Box<Node>,
        condition: Box<Node>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    MethodCall {
        name: String,
        args: Vec<Node>,
    },
    ExpressionStatement {
        expr: Box<Node>,
    },
    Output {
        arg: Box<Node>,
    },
}

impl Node {
    /// Kind label for diagnostics and tree dumps
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Program { .. } => "Program",
            Node::LibraryImport { .. } => "LibraryImport",
            Node::Namespace { .. } => "Namespace",
            Node::Class { .. } => "Class",
            Node::Method { .. } => "Method",
            Node::VariableDeclaration { .. } => "VariableDeclaration",
            Node::Assignment { .. } => "Assignment",
            Node::CompoundAssignment { .. } => "CompoundAssignment",
            Node::BinaryOperation { .. } => "BinaryOperation",
            Node::UnaryOperation { .. } => "UnaryOperation",
            Node::Variable { .. } => "Variable",
            Node::Number { .. } => "Number",
            Node::String { .. } => "String",
            Node::Boolean { .. } => "Boolean",
            Node::If { .. } => "If",
            Node::Block { .. } => "Block",
            Node::ElseBlock { .. } => "ElseBlock",
            Node::Return { .. } => "Return",
            Node::DoWhile { .. } => "DoWhile",
            Node::While { .. } => "While",
            Node::MethodCall { .. } => "MethodCall",
            Node::ExpressionStatement { .. } => "ExpressionStatement",
            Node::Output { .. } => "Output",
        }
    }

    /// Render the tree as indented text, one node per line
    pub fn tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(
        &self,
        out: &mut String,
        level: usize,
    ) {
        let indent = "  ".repeat(level);
        let _ = writeln!(out, "{}{}{}", indent, self.kind_name(), self.summary());
        for child in self.children() {
            child.write_tree(out, level + 1);
        }
    }

    /// One-line payload summary for the tree dump
    fn summary(&self) -> String {
        match self {
            Node::LibraryImport { path } => format!("({path})"),
            Node::Namespace { name, .. } | Node::Class { name, .. } => format!("({name})"),
            Node::Method { name, params, return_type, .. } => {
                format!("({} {}({}))", return_type, name, params.join(", "))
            }
            Node::VariableDeclaration { ty, name, .. } => format!("({ty} {name})"),
            Node::Assignment { target, .. } => format!("({target} =)"),
            Node::CompoundAssignment { target, op, .. } => format!("({target} {op})"),
            Node::BinaryOperation { op, .. } | Node::UnaryOperation { op, .. } => {
                format!("({op})")
            }
            Node::Variable { name } => format!("({name})"),
            Node::Number { text } | Node::String { text } => format!("({text})"),
            Node::Boolean { value } => format!("({value})"),
            Node::MethodCall { name, .. } => format!("({name})"),
            _ => String::new(),
        }
    }

    /// Immediate children in source order
    fn children(&self) -> Vec<&Node> {
        match self {
            Node::Program { items } => items.iter().collect(),
            Node::Namespace { classes, .. } => classes.iter().collect(),
            Node::Class { members, .. } => members.iter().collect(),
            Node::Method { body, .. } => body.iter().collect(),
            Node::Block { statements } | Node::ElseBlock { statements } => {
                statements.iter().collect()
            }
            Node::VariableDeclaration { init, .. } => init.iter().map(|n| &**n).collect(),
            Node::Assignment { value, .. } | Node::CompoundAssignment { value, .. } => {
                vec![&**value]
            }
            Node::BinaryOperation { lhs, rhs, .. } => vec![&**lhs, &**rhs],
            Node::UnaryOperation { operand, .. } => vec![&**operand],
            Node::If {
                condition,
                then_block,
                else_block,
            } => {
                let mut children: Vec<&Node> = vec![&**condition, &**then_block];
                if let Some(else_block) = else_block {
                    children.push(&**else_block);
                }
                children
            }
            Node::Return { value } => value.iter().map(|n| &**n).collect(),
            Node::DoWhile { body, condition } => vec![&**body, &**condition],
            Node::While { condition, body } => vec![&**condition, &**body],
            Node::MethodCall { args, .. } => args.iter().collect(),
            Node::ExpressionStatement { expr } => vec![&**expr],
            Node::Output { arg } => vec![&**arg],
            Node::LibraryImport { .. }
            | Node::Variable { .. }
            | Node::Number { .. }
            | Node::String { .. }
            | Node::Boolean { .. } => Vec::new(),
        }
    }
}
