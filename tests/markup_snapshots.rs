//! Markup engine output on small inputs

use std::cell::RefCell;
use std::rc::Rc;
use widl::widl::ast::Node;
use widl::widl::formats::{HookMarker, Markup, MarkupError, NullMarker, TagMarker};
use widl::widl::parser::parse;

fn tag(source: &str) -> String {
    parse(source).markup(&mut TagMarker)
}

#[test]
fn test_typedef_union() {
    insta::assert_snapshot!(
        tag("typedef (long or Foo?) T;"),
        @"<typedef><KEYWORD for=typedef>typedef</KEYWORD> <TYPE for=typedef>(<KEYWORD for=typedef>long</KEYWORD> <KEYWORD for=typedef>or</KEYWORD> <TYPE-NAME for=typedef>Foo</TYPE-NAME>?)</TYPE> <NAME for=typedef>T</NAME>;</typedef>"
    );
}

#[test]
fn test_operation_arguments() {
    insta::assert_snapshot!(
        tag("interface I { void f(optional sequence<long> a); };"),
        @"<interface><KEYWORD for=interface>interface</KEYWORD> <NAME for=interface>I</NAME> { <method><TYPE for=method><KEYWORD for=method>void</KEYWORD></TYPE> <NAME for=method>f</NAME>(<KEYWORD for=argument>optional</KEYWORD> <TYPE for=argument><KEYWORD for=argument>sequence</KEYWORD>&lt;<KEYWORD for=argument>long</KEYWORD>&gt;</TYPE> <NAME for=argument>a</NAME>);</method> };</interface>"
    );
}

#[test]
fn test_trivia_and_junk_are_encoded_not_marked() {
    insta::assert_snapshot!(
        tag("// a < b\nenum E { \"x\" };\n}}"),
        @r#"// a &lt; b
<enum><KEYWORD for=enum>enum</KEYWORD> <NAME for=enum>E</NAME> { <ENUM-VALUE for=enum>&quot;x&quot;</ENUM-VALUE> };</enum>
}}"#
    );
}

#[test]
fn test_null_marker_is_identity() {
    let source = "[Exposed=Window] interface A : B { attribute (long or DOMString)? x; };\n";
    let mut marker = NullMarker::new();
    assert_eq!(parse(source).markup(&mut marker), source);
}

#[test]
fn test_hooks_see_span_text_and_node() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let record = {
        let seen = Rc::clone(&seen);
        move |text: &str, node: Node<'_>| -> Option<Markup> {
            seen.borrow_mut().push(format!("{}:{}", node.idl_type(), text));
            None
        }
    };
    let mut marker = HookMarker::builder()
        .construct(|_, _| None)
        .type_(|_, _| None)
        .type_name(|_, _| Some(Markup::new("[", "]")))
        .name(record)
        .keyword(|_, _| None)
        .enum_value(|_, _| None)
        .build()
        .expect("all hooks present");

    let output = parse("dictionary D : Base { Foo member; };").markup(&mut marker);
    assert_eq!(output, "dictionary D : [Base] { [Foo] member; };");
    assert_eq!(*seen.borrow(), vec!["dictionary:D", "dict-member:member"]);
}

#[test]
fn test_incomplete_hook_marker_fails_fast() {
    let result = HookMarker::builder().construct(|_, _| None).build();
    assert!(matches!(result, Err(MarkupError::MissingHook("type"))));
}

#[test]
fn test_symbol_markup() {
    let doc = parse("interface A { attribute long x; void f(); };");
    let symbol = doc.find("A.f").expect("method to exist");
    insta::assert_snapshot!(
        doc.markup_symbol(&symbol, &mut TagMarker),
        @"<method><TYPE for=method><KEYWORD for=method>void</KEYWORD></TYPE> <NAME for=method>f</NAME>();</method>"
    );
}
