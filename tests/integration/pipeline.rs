//! End-to-end pipeline tests: source text in, JavaScript out

use cs2js::translate;

#[test]
fn test_full_program() {
    let source = r#"
using System;

namespace Hello {
    public class World {
        public static void Main() {
            int x = 3;
            string y = "sgg";
            x += 5;
            z = y + 2;
            if (z != z) {
                return 0;
            }
        }

        private int NotMain() {
            do {
                return 0;
            } while (true);
        }
    }
}
"#;

    let expected = "\
// Imported library: System
class World {
  function Main() {
    let x = 3;
    let y = \"sgg\";
    x += 5;
    z = (y + 2);
    if ((z != z)) {
      return 0;
    }
  }
  function NotMain() {
    do {
      return 0;
    } while (true);
  }
}
World.Main()";

    let generated = translate(source).unwrap();
    assert_eq!(generated.code, expected);
    assert_eq!(generated.entry_point.as_deref(), Some("World.Main"));
}

#[test]
fn test_compound_assignment_survives_verbatim() {
    let source = "namespace N { class C { void M() { int x = 0; x += 5; } } }";
    let generated = translate(source).unwrap();
    assert!(generated.code.contains("x += 5;"), "got: {}", generated.code);
    assert!(!generated.code.contains("x = x + 5"), "must not desugar");
}

#[test]
fn test_boolean_literals_round_trip() {
    let source = "namespace N { class C { void M() { bool t = true; bool f = false; } } }";
    let generated = translate(source).unwrap();
    assert!(generated.code.contains("let t = true;"));
    assert!(generated.code.contains("let f = false;"));
}

#[test]
fn test_if_else_structure() {
    let source =
        "namespace N { class C { void M() { if (a == b) { return 1; } else { return 2; } } } }";
    let generated = translate(source).unwrap();
    let expected_fragment = "\
    if ((a == b)) {
      return 1;
    } else {
      return 2;
    }";
    assert!(
        generated.code.contains(expected_fragment),
        "got: {}",
        generated.code
    );
}

#[test]
fn test_uninitialized_declaration() {
    let source = "namespace N { class C { void M() { string s; } } }";
    let generated = translate(source).unwrap();
    assert!(generated.code.contains("let s;"), "got: {}", generated.code);
}

#[test]
fn test_output_call_lowered() {
    let source = "namespace N { class C { void M() { Console.WriteLine(\"hi\"); } } }";
    let generated = translate(source).unwrap();
    assert!(generated.code.contains("console.log(\"hi\")"));
}

#[test]
fn test_while_loop() {
    let source = "namespace N { class C { void M() { while (i < 3) { i += 1; } } } }";
    let generated = translate(source).unwrap();
    let expected_fragment = "\
    while ((i < 3)) {
      i += 1;
    }";
    assert!(
        generated.code.contains(expected_fragment),
        "got: {}",
        generated.code
    );
}

#[test]
fn test_method_call_chain() {
    let source = "namespace N { class C { void M() { helper.run(1, 2); } } }";
    let generated = translate(source).unwrap();
    assert!(generated.code.contains("helper.run(1, 2);"));
}

#[test]
fn test_comments_do_not_reach_output() {
    let source =
        "namespace N { // note\n class C { /* block */ void M() { int x = 1; } } }";
    let generated = translate(source).unwrap();
    assert!(!generated.code.contains("note"));
    assert!(!generated.code.contains("block"));
}

#[test]
fn test_float_suffix_dropped_in_output() {
    let source = "namespace N { class C { void M() { float f = 2.5f; } } }";
    let generated = translate(source).unwrap();
    assert!(generated.code.contains("let f = 2.5;"));
}
