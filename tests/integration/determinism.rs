//! Determinism properties: identical input, identical output

use cs2js::frontend::lexer::tokenize;
use cs2js::frontend::parser::parse;
use cs2js::middle::codegen::generate;
use cs2js::translate;
use proptest::prelude::*;

proptest! {
    /// Tokenization is a pure function of the input, success or failure
    #[test]
    fn tokenize_is_deterministic(source in "[ -~]{0,64}") {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    /// The whole pipeline is deterministic, even when it rejects the input
    #[test]
    fn pipeline_is_deterministic(name in "[a-z][a-z0-9_]{0,6}", value in 0u32..10_000) {
        let source = format!(
            "namespace N {{ class C {{ public static void Main() {{ int {name} = {value}; }} }} }}"
        );
        prop_assert_eq!(translate(&source), translate(&source));
    }
}

#[test]
fn test_parse_twice_yields_identical_trees() {
    let source = "namespace N { class C { void M() { if (a < b) { a += 1; } } } }";
    let tokens = tokenize(source).unwrap();
    let first = parse(&tokens).unwrap();
    let second = parse(&tokens).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_twice_on_same_tree() {
    let source = "namespace N { class C { static void Main() { Console.Write(1); } } }";
    let tokens = tokenize(source).unwrap();
    let ast = parse(&tokens).unwrap();
    let first = generate(&ast).unwrap();
    let second = generate(&ast).unwrap();
    assert_eq!(first, second);
}
