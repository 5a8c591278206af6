//! Simple statement parsing: output, declarations, assignments, calls

use super::super::ast::Node;
use super::super::expressions::parse_expression;
use super::super::parser_state::{ParseError, ParserState};
use crate::frontend::lexer::tokens::TokenKind;

/// `Console.WriteLine ( expr ) ;` - the whole call name is one Output token
pub fn parse_output(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect(TokenKind::Output, None)?;
    state.expect(TokenKind::Delimiter, Some("("))?;
    let arg = parse_expression(state)?;
    state.expect(TokenKind::Delimiter, Some(")"))?;
    state.expect(TokenKind::Delimiter, Some(";"))?;

    Ok(Node::Output { arg: Box::new(arg) })
}

/// TYPE ID [`=` expr] `;`
pub fn parse_variable_declaration(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let ty = state.expect(TokenKind::Type, None)?.text;
    let name = state.expect(TokenKind::Identifier, None)?.text;

    let init = if state.at_op("=") {
        state.bump();
        Some(Box::new(parse_expression(state)?))
    } else {
        None
    };

    state.expect(TokenKind::Delimiter, Some(";"))?;
    Ok(Node::VariableDeclaration { ty, name, init })
}

/// ID `=` expr `;`
pub fn parse_assignment(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let target = state.expect(TokenKind::Identifier, None)?.text;
    state.expect(TokenKind::Operator, Some("="))?;
    let value = parse_expression(state)?;
    state.expect(TokenKind::Delimiter, Some(";"))?;

    Ok(Node::Assignment {
        target,
        value: Box::new(value),
    })
}

/// ID compound-op expr `;` - the operator survives into the AST verbatim
pub fn parse_compound_assignment(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let target = state.expect(TokenKind::Identifier, None)?.text;
    let op = state.expect(TokenKind::Operator, None)?.text;
    let value = parse_expression(state)?;
    state.expect(TokenKind::Delimiter, Some(";"))?;

    Ok(Node::CompoundAssignment {
        target,
        op,
        value: Box::new(value),
    })
}

/// Dotted call chain: ID (`.` ID)* `(` args `)` `;`
pub fn parse_method_call(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let mut name = state.expect(TokenKind::Identifier, None)?.text;
    while !state.at_delim("(") {
        state.expect(TokenKind::Operator, Some("."))?;
        name.push('.');
        name.push_str(&state.expect(TokenKind::Identifier, None)?.text);
    }
    state.expect(TokenKind::Delimiter, Some("("))?;

    let mut args = Vec::new();
    if !state.at_delim(")") {
        loop {
            args.push(parse_expression(state)?);
            if state.at_delim(",") {
                state.bump();
            } else {
                break;
            }
        }
    }
    state.expect(TokenKind::Delimiter, Some(")"))?;
    state.expect(TokenKind::Delimiter, Some(";"))?;

    Ok(Node::MethodCall { name, args })
}

/// expr `;`
pub fn parse_expression_statement(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let expr = parse_expression(state)?;
    state.expect(TokenKind::Delimiter, Some(";"))?;

    Ok(Node::ExpressionStatement {
        expr: Box::new(expr),
    })
}
