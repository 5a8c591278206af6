//! Error taxonomy tests: callers branch on the error kind

use cs2js::frontend::lexer::LexError;
use cs2js::frontend::parser::ParseError;
use cs2js::{translate, TranslateError};

#[test]
fn test_lex_error_kind() {
    let err = translate("namespace N { class C { void M() { int x = @; } } }").unwrap_err();
    match err {
        TranslateError::Lex(LexError::UnexpectedChar { ch, position }) => {
            assert_eq!(ch, '@');
            assert!(position.offset > 0);
        }
        other => panic!("expected a lexical error, got {other:?}"),
    }
}

#[test]
fn test_parse_error_kind() {
    let err = translate("namespace N { class C { void M() { int x = 1 } } }").unwrap_err();
    assert!(matches!(err, TranslateError::Parse(ParseError::ExpectedToken { .. })));
}

#[test]
fn test_eof_error_kind() {
    let err = translate("namespace N {").unwrap_err();
    assert!(matches!(err, TranslateError::Parse(ParseError::UnexpectedEof { .. })));
}

#[test]
fn test_error_message_is_descriptive() {
    let err = translate("namespace N { class C { void M() { int x = @; } } }").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("lexical error"), "got: {message}");
    assert!(message.contains('@'), "got: {message}");
}

#[test]
fn test_no_partial_output_on_failure() {
    // A translation either succeeds whole or yields only an error value
    let result = translate("namespace N { class C { void M() { int x = ; } } }");
    assert!(result.is_err());
}
