//! Statement parsing
//!
//! `parse_statement` is the single decision point for statement
//! disambiguation. It inspects at most two tokens: the current one selects
//! most productions outright; an identifier-led statement is resolved by the
//! token after it, checked in a fixed order that must not be rearranged.

pub mod control_flow;
pub mod declarations;
pub mod simple;

use super::ast::Node;
use super::parser_state::{ParseError, ParserState};
use crate::frontend::lexer::tokens::TokenKind;

/// Compound-assignment operator spellings
pub const COMPOUND_OPS: [&str; 5] = ["+=", "-=", "*=", "/=", "%="];

/// Parse one statement
pub fn parse_statement(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let (kind, text) = match state.current() {
        Some(token) => (token.kind, token.text.clone()),
        None => {
            return Err(ParseError::UnexpectedEof {
                expected: "a statement".to_string(),
            })
        }
    };

    match kind {
        TokenKind::Output => simple::parse_output(state),
        TokenKind::Type => simple::parse_variable_declaration(state),
        TokenKind::Identifier => dispatch_identifier_led(state),
        TokenKind::Keyword if text == "return" => control_flow::parse_return(state),
        TokenKind::Keyword if matches!(text.as_str(), "if" | "while" | "do" | "for") => {
            control_flow::parse_control(state)
        }
        _ => Err(state.unexpected("the start of a statement")),
    }
}

/// Resolve an identifier-led statement by its second token
fn dispatch_identifier_led(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let second = state.peek().map(|t| (t.kind, t.text.clone()));
    match second {
        Some((TokenKind::Operator, op)) => {
            if op == "=" {
                simple::parse_assignment(state)
            } else if COMPOUND_OPS.contains(&op.as_str()) {
                simple::parse_compound_assignment(state)
            } else if op == "." {
                simple::parse_method_call(state)
            } else {
                simple::parse_expression_statement(state)
            }
        }
        Some((TokenKind::Delimiter, delim)) if delim == "(" => simple::parse_method_call(state),
        _ => simple::parse_expression_statement(state),
    }
}
