//! Parser tests module
//!
//! - declarations: imports, namespaces, classes, methods
//! - statements: statement forms and the two-token disambiguation
//! - expressions: precedence and associativity
//! - errors: rejection paths


use crate::frontend::lexer::tokenize;
use crate::frontend::parser::{parse, Node, ParseError};

/// Lex and parse a full program
pub fn parse_source(source: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(source).expect("lexing should succeed");
    parse(&tokens)
}

/// Parse a statement list by wrapping it in a minimal method body
pub fn parse_body(body: &str) -> Vec<Node> {
    let source = format!("namespace N {{ class C {{ void M() {{ {body} }} }} }}");
    let program = parse_source(&source).expect("parsing should succeed");
    let Node::Program { items } = program else {
        panic!("root should be a Program");
    };
    let Some(Node::Namespace { classes, .. }) = items.into_iter().next() else {
        panic!("expected a namespace");
    };
    let Some(Node::Class { members, .. }) = classes.into_iter().next() else {
        panic!("expected a class");
    };
    let Some(Node::Method { body, .. }) = members.into_iter().next() else {
        panic!("expected a method");
    };
    body
}

/// Parse a single statement
pub fn parse_stmt(statement: &str) -> Node {
    let mut body = parse_body(statement);
    assert_eq!(body.len(), 1, "expected exactly one statement");
    body.remove(0)
}

/// Parse a single expression by embedding it in a declaration
pub fn parse_expr(expression: &str) -> Node {
    match parse_stmt(&format!("int probe = {expression};")) {
        Node::VariableDeclaration {
            init: Some(init), ..
        } => *init,
        other => panic!("expected an initialized declaration, got {other:?}"),
    }
}
