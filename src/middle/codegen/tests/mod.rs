//! Code generator tests
//!
//! - expr: expression emission
//! - stmt: statement emission and layout
//! - program: whole-tree emission and the entry-point latch


use crate::frontend::parser::Node;
use crate::middle::codegen::{generate, Generated};

/// Generate with a fresh generator, expecting success
pub fn emit(node: &Node) -> Generated {
    generate(node).expect("generation should succeed")
}

pub fn num(text: &str) -> Node {
    Node::Number {
        text: text.to_string(),
    }
}

pub fn var(name: &str) -> Node {
    Node::Variable {
        name: name.to_string(),
    }
}

pub fn binop(op: &str, lhs: Node, rhs: Node) -> Node {
    Node::BinaryOperation {
        op: op.to_string(),
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

pub fn block(statements: Vec<Node>) -> Node {
    Node::Block { statements }
}
