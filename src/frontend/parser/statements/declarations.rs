//! Top-level declaration parsing: imports, namespaces, classes, methods

use super::super::ast::Node;
use super::super::parser_state::{ParseError, ParserState};
use super::parse_statement;
use crate::frontend::lexer::tokens::TokenKind;

/// Declaration modifiers accepted before classes and methods
const MODIFIERS: [&str; 4] = ["public", "private", "protected", "static"];

/// Parse the whole program: imports and namespaces until end of input
pub fn parse_program(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let mut items = Vec::new();
    while !state.at_end() {
        if state.at_keyword("using") {
            items.push(parse_library_import(state)?);
        } else {
            items.push(parse_namespace(state)?);
        }
    }
    Ok(Node::Program { items })
}

/// `using` dotted-identifier `;`
pub fn parse_library_import(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect(TokenKind::Keyword, Some("using"))?;

    let mut parts = Vec::new();
    loop {
        let part = state.expect(TokenKind::Identifier, None)?;
        parts.push(part.text);
        if state.at_op(".") {
            state.bump();
        } else {
            break;
        }
    }

    state.expect(TokenKind::Delimiter, Some(";"))?;
    Ok(Node::LibraryImport {
        path: parts.join("."),
    })
}

/// `namespace` ID `{` Class* `}`
pub fn parse_namespace(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect(TokenKind::Keyword, Some("namespace"))?;
    let name = state.expect(TokenKind::Identifier, None)?.text;
    state.expect(TokenKind::Delimiter, Some("{"))?;

    let mut classes = Vec::new();
    while !state.at_delim("}") {
        classes.push(parse_class(state)?);
    }
    state.expect(TokenKind::Delimiter, Some("}"))?;

    Ok(Node::Namespace { name, classes })
}

/// modifier* `class` ID `{` Method* `}`
pub fn parse_class(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let modifiers = parse_modifiers(state);
    state.expect(TokenKind::Type, Some("class"))?;
    let name = state.expect(TokenKind::Identifier, None)?.text;
    state.expect(TokenKind::Delimiter, Some("{"))?;

    let mut members = Vec::new();
    while !state.at_delim("}") {
        members.push(parse_method(state)?);
    }
    state.expect(TokenKind::Delimiter, Some("}"))?;

    Ok(Node::Class {
        name,
        modifiers,
        members,
    })
}

/// modifier* TYPE ID `(` ParamList `)` `{` Statement* `}`
pub fn parse_method(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let modifiers = parse_modifiers(state);
    let return_type = state.expect(TokenKind::Type, None)?.text;
    let name = state.expect(TokenKind::Identifier, None)?.text;

    state.expect(TokenKind::Delimiter, Some("("))?;
    let params = parse_parameters(state)?;
    state.expect(TokenKind::Delimiter, Some(")"))?;

    state.expect(TokenKind::Delimiter, Some("{"))?;
    let mut body = Vec::new();
    while !state.at_delim("}") {
        body.push(parse_statement(state)?);
    }
    state.expect(TokenKind::Delimiter, Some("}"))?;

    Ok(Node::Method {
        name,
        modifiers,
        params,
        return_type,
        body,
    })
}

/// TYPE-then-ID pairs; only the names survive into the AST, the target
/// syntax is untyped
fn parse_parameters(state: &mut ParserState<'_>) -> Result<Vec<String>, ParseError> {
    let mut params = Vec::new();
    if state.at_delim(")") {
        return Ok(params);
    }

    loop {
        state.expect(TokenKind::Type, None)?;
        let name = state.expect(TokenKind::Identifier, None)?.text;
        params.push(name);
        if state.at_delim(",") {
            state.bump();
        } else {
            break;
        }
    }
    Ok(params)
}

fn parse_modifiers(state: &mut ParserState<'_>) -> Vec<String> {
    let mut modifiers = Vec::new();
    loop {
        let is_modifier = state
            .current()
            .is_some_and(|t| t.kind == TokenKind::Keyword && MODIFIERS.contains(&t.text.as_str()));
        if !is_modifier {
            break;
        }
        if let Some(token) = state.bump() {
            modifiers.push(token.text);
        }
    }
    modifiers
}
