//! Lookup and overload normalization against the kitchen sink sample

use rstest::rstest;
use widl::widl::testing::IdlSources;
use widl::Document;

fn kitchen_sink() -> Document {
    IdlSources::KitchenSink.parse()
}

#[rstest]
#[case::argument_anywhere("round", "Foo/anotherMethod(short)/round")]
#[case::argument_path("Foo/method/y", "Foo/method(short, unsigned long long, double, sequence<Foo>)/y")]
#[case::member_path("Foo.method", "Foo/method(short, unsigned long long, double, sequence<Foo>)")]
#[case::constructor("Foo(constructor)", "Foo(Constructor)")]
#[case::constructor_argument("longest", "Foo(NamedConstructor=MyOtherConstructor)/longest")]
#[case::construct("Window", "Window")]
#[case::attribute("mediaText", "LinkStyle/mediaText")]
fn test_find(#[case] path: &str, #[case] expected: &str) {
    let doc = kitchen_sink();
    let symbol = doc.find(path).unwrap_or_else(|| panic!("`{}` to resolve", path));
    assert_eq!(symbol.full_name(), expected);
}

#[test]
fn test_find_all_keeps_overloads() {
    let doc = kitchen_sink();
    let names: Vec<String> = doc.find_all("Foo.method").iter().map(|s| s.full_name()).collect();
    assert_eq!(
        names,
        vec![
            "Foo/method(short, unsigned long long, double, sequence<Foo>)",
            "Foo/method(DOMString)",
        ]
    );
}

#[test]
fn test_find_misses() {
    let doc = kitchen_sink();
    assert!(doc.find("NoSuchThing").is_none());
    assert!(doc.find_all("Foo.noSuchMember").is_empty());
}

#[rstest]
#[case::no_arguments("foo", None, Some("foo()"))]
#[case::unknown("unknown", None, None)]
#[case::unmatched_signature("testMethod(short one, double two)", None, None)]
#[case::renamed_argument("bob(xxx)", Some("LinkStyle"), Some("bob(DOMString)"))]
#[case::bare_in_container("bob", Some("LinkStyle"), Some("bob(DOMString)"))]
#[case::empty_call("bob()", Some("LinkStyle"), Some("bob(DOMString)"))]
#[case::too_many_arguments("bob(a, b, c)", Some("LinkStyle"), None)]
#[case::container_narrows("foo", Some("Foo"), Some("foo(long, long)"))]
fn test_normalized_method_name(
    #[case] method: &str,
    #[case] container: Option<&str>,
    #[case] expected: Option<&str>,
) {
    let doc = kitchen_sink();
    assert_eq!(
        doc.normalized_method_name(method, container).as_deref(),
        expected
    );
}

#[test]
fn test_normalized_method_names_counts_overloads() {
    let doc = kitchen_sink();
    assert_eq!(doc.normalized_method_names("method", Some("Foo")).len(), 2);
    assert!(doc.normalized_method_names("nothing", None).is_empty());
}
