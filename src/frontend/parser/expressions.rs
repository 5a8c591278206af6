//! Expression parsing
//!
//! One left-associative loop per precedence level, lowest first. Each level
//! binds tighter than the one above it, so no precedence table is needed;
//! unary binds tighter than every binary level.

use super::ast::Node;
use super::parser_state::{ParseError, ParserState};
use crate::frontend::lexer::tokens::TokenKind;

/// Parse a full expression
pub fn parse_expression(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    logical_or(state)
}

fn logical_or(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    binary_level(state, &["||"], logical_and)
}

fn logical_and(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    binary_level(state, &["&&"], equality)
}

fn equality(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    binary_level(state, &["==", "!="], relational)
}

fn relational(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    binary_level(state, &["<", ">", "<=", ">="], additive)
}

fn additive(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    binary_level(state, &["+", "-"], multiplicative)
}

fn multiplicative(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    binary_level(state, &["*", "/", "%"], unary)
}

/// One left-associative binary precedence level
fn binary_level(
    state: &mut ParserState<'_>,
    ops: &[&str],
    next: fn(&mut ParserState<'_>) -> Result<Node, ParseError>,
) -> Result<Node, ParseError> {
    let mut node = next(state)?;
    while let Some(op) = state.current_op_in(ops) {
        state.bump();
        let rhs = next(state)?;
        node = Node::BinaryOperation {
            op,
            lhs: Box::new(node),
            rhs: Box::new(rhs),
        };
    }
    Ok(node)
}

fn unary(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    if let Some(op) = state.current_op_in(&["-", "!", "++", "--"]) {
        state.bump();
        let operand = unary(state)?;
        return Ok(Node::UnaryOperation {
            op,
            operand: Box::new(operand),
        });
    }
    primary(state)
}

fn primary(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let token = match state.current() {
        Some(token) => token.clone(),
        None => {
            return Err(ParseError::UnexpectedEof {
                expected: "an expression".to_string(),
            })
        }
    };

    match token.kind {
        TokenKind::Number => {
            state.bump();
            Ok(Node::Number { text: token.text })
        }
        TokenKind::String => {
            state.bump();
            Ok(Node::String { text: token.text })
        }
        TokenKind::Identifier => {
            state.bump();
            Ok(Node::Variable { name: token.text })
        }
        TokenKind::Keyword if token.text == "true" || token.text == "false" => {
            state.bump();
            Ok(Node::Boolean {
                value: token.text == "true",
            })
        }
        TokenKind::Delimiter if token.text == "(" => {
            state.bump();
            let expr = parse_expression(state)?;
            state.expect(TokenKind::Delimiter, Some(")"))?;
            Ok(expr)
        }
        _ => Err(ParseError::UnexpectedToken {
            found: token.kind,
            text: token.text,
            span: token.span,
        }),
    }
}
