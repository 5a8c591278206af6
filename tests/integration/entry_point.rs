//! Entry-point latch and trailing invocation tests

use cs2js::translate;

#[test]
fn test_main_gets_trailing_invocation() {
    let source = "namespace N { class C { public static void Main() { int x = 3; } } }";
    let generated = translate(source).unwrap();
    assert!(generated.code.contains("class C {"));
    assert!(generated.code.contains("function Main()"));
    assert!(generated.code.ends_with("\nC.Main()"));
    assert_eq!(generated.code.matches("C.Main()").count(), 1);
    assert_eq!(generated.entry_point.as_deref(), Some("C.Main"));
}

#[test]
fn test_no_main_no_invocation() {
    let source = "namespace N { class C { public static void Run() { } } }";
    let generated = translate(source).unwrap();
    assert!(generated.entry_point.is_none());
    assert!(generated.code.ends_with('}'));
}

#[test]
fn test_main_never_called_in_source() {
    // The source never invokes Main; the target still runs it exactly once
    let source = "namespace N { class App { static void Main() { Console.Write(1); } } }";
    let generated = translate(source).unwrap();
    assert_eq!(generated.code.matches("App.Main()").count(), 1);
}

#[test]
fn test_first_main_wins_across_classes() {
    let source = "\
namespace N {
    class A { static void Main() { } }
    class B { static void Main() { } }
}";
    let generated = translate(source).unwrap();
    assert_eq!(generated.entry_point.as_deref(), Some("A.Main"));
    assert!(generated.code.ends_with("\nA.Main()"));
}

#[test]
fn test_lowercase_main_is_not_the_entry_point() {
    let source = "namespace N { class C { static void main() { } } }";
    let generated = translate(source).unwrap();
    assert!(generated.entry_point.is_none());
}

#[test]
fn test_repeated_translations_are_independent() {
    let with_main = "namespace N { class C { static void Main() { } } }";
    let without_main = "namespace N { class C { static void Other() { } } }";
    let _ = translate(with_main).unwrap();
    let generated = translate(without_main).unwrap();
    assert!(generated.entry_point.is_none());
    assert!(!generated.code.contains("Main"));
}
