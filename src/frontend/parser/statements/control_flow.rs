//! Control flow statement parsing: if/else, while, do-while, return

use super::super::ast::Node;
use super::super::expressions::parse_expression;
use super::super::parser_state::{ParseError, ParserState};
use super::parse_statement;
use crate::frontend::lexer::tokens::TokenKind;

/// Dispatch a control-flow keyword
///
/// `for` is reserved by the lexer but has no production; it fails here.
pub fn parse_control(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    if state.at_keyword("if") {
        parse_if(state)
    } else if state.at_keyword("while") {
        parse_while(state)
    } else if state.at_keyword("do") {
        parse_do_while(state)
    } else {
        Err(state.unexpected("a control statement ('if', 'while' or 'do')"))
    }
}

/// `if (cond) { ... }` with optional `else` block or chained `else if`
pub fn parse_if(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect(TokenKind::Keyword, Some("if"))?;
    state.expect(TokenKind::Delimiter, Some("("))?;
    let condition = parse_expression(state)?;
    state.expect(TokenKind::Delimiter, Some(")"))?;

    let then_statements = parse_braced_statements(state)?;

    let else_block = if state.at_keyword("else") {
        state.bump();
        if state.at_keyword("if") {
            // Chained alternative: the nested if is the whole else branch
            let nested = parse_if(state)?;
            Some(Box::new(Node::ElseBlock {
                statements: vec![nested],
            }))
        } else {
            let statements = parse_braced_statements(state)?;
            Some(Box::new(Node::ElseBlock { statements }))
        }
    } else {
        None
    };

    Ok(Node::If {
        condition: Box::new(condition),
        then_block: Box::new(Node::Block {
            statements: then_statements,
        }),
        else_block,
    })
}

/// `while (cond) { ... }`
pub fn parse_while(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect(TokenKind::Keyword, Some("while"))?;
    state.expect(TokenKind::Delimiter, Some("("))?;
    let condition = parse_expression(state)?;
    state.expect(TokenKind::Delimiter, Some(")"))?;

    let statements = parse_braced_statements(state)?;

    Ok(Node::While {
        condition: Box::new(condition),
        body: Box::new(Node::Block { statements }),
    })
}

/// `do { ... } while (cond);` - body precedes guard, as in source order
pub fn parse_do_while(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect(TokenKind::Keyword, Some("do"))?;
    let statements = parse_braced_statements(state)?;

    state.expect(TokenKind::Keyword, Some("while"))?;
    state.expect(TokenKind::Delimiter, Some("("))?;
    let condition = parse_expression(state)?;
    state.expect(TokenKind::Delimiter, Some(")"))?;
    state.expect(TokenKind::Delimiter, Some(";"))?;

    Ok(Node::DoWhile {
        body: Box::new(Node::Block { statements }),
        condition: Box::new(condition),
    })
}

/// `return [expr];`
pub fn parse_return(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect(TokenKind::Keyword, Some("return"))?;

    let value = if state.at_delim(";") {
        None
    } else {
        Some(Box::new(parse_expression(state)?))
    };

    state.expect(TokenKind::Delimiter, Some(";"))?;
    Ok(Node::Return { value })
}

/// Bodies are always brace-delimited; single-statement bodies are rejected
fn parse_braced_statements(state: &mut ParserState<'_>) -> Result<Vec<Node>, ParseError> {
    state.expect(TokenKind::Delimiter, Some("{"))?;
    let mut statements = Vec::new();
    while !state.at_delim("}") {
        statements.push(parse_statement(state)?);
    }
    state.expect(TokenKind::Delimiter, Some("}"))?;
    Ok(statements)
}
