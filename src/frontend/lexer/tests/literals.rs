//! Literal scanning tests - numbers, strings, chars

use crate::frontend::lexer::{tokenize, TokenKind};

#[test]
fn test_integer() {
    let tokens = tokenize("42").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "42");
}

#[test]
fn test_float() {
    let tokens = tokenize("3.14").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "3.14");
}

#[test]
fn test_float_suffix() {
    let tokens = tokenize("2.5f 3f").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "2.5f");
    assert_eq!(tokens[1].text, "3f");
}

#[test]
fn test_trailing_dot_is_not_a_fraction() {
    // `3.` scans as a number then a dot operator
    let tokens = tokenize("3.").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "3");
    assert_eq!(tokens[1].kind, TokenKind::Operator);
}

#[test]
fn test_string_literal_keeps_quotes() {
    let tokens = tokenize(r#""hello""#).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, r#""hello""#);
}

#[test]
fn test_string_with_escapes() {
    let tokens = tokenize(r#""a\"b\n""#).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, r#""a\"b\n""#);
}

#[test]
fn test_empty_string() {
    let tokens = tokenize(r#""""#).unwrap();
    assert_eq!(tokens[0].text, r#""""#);
}

#[test]
fn test_char_literal() {
    let tokens = tokenize("'a'").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[0].text, "'a'");
}

#[test]
fn test_char_escape() {
    let tokens = tokenize(r"'\n'").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[0].text, r"'\n'");
}

#[test]
fn test_number_then_identifier() {
    let tokens = tokenize("3x").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "3");
    assert_eq!(tokens[1].text, "x");
}
