//! Overload normalization
//!
//! Overloaded operations stay separate members; what groups them is their
//! method name, and what tells them apart is their normalized name,
//! `name(Type, Type)`. Given a method reference the way a prose author writes
//! it (`bob`, `bob(name)`, `bob(DOMString xxx)`) the normalizer finds the
//! overload it most plausibly means and returns that overload's normalized
//! name.
//!
//! Resolution:
//!
//! - candidates are the methods with the given name, in document order,
//!   limited to the container's constructs when a container is given;
//! - a bare name, or an empty argument list, picks the first candidate;
//! - otherwise candidates whose arity cannot fit are set aside and the rest
//!   are scored entry by entry (see [`ArgumentPattern::score`]); the best
//!   score wins, earlier overloads winning ties.
//!
//! A name with no candidates, or an argument list no candidate accepts, is
//! not found.

mod signature;

pub use signature::{ArgumentPattern, Signature};

use crate::widl::ast::{Document, Member};
use indexmap::IndexSet;

/// Canonical name of the overload `method` refers to, or `None` if there is
/// no such method
pub fn normalized_method_name(
    doc: &Document,
    method: &str,
    container: Option<&str>,
) -> Option<String> {
    let signature = Signature::parse(method);
    let candidates = candidates(doc, &signature.name, container);
    let first = candidates.first()?;

    let patterns = match &signature.arguments {
        Some(patterns) if !patterns.is_empty() => patterns,
        _ => return Some(first.normalized_name.clone()),
    };

    let mut best: Option<(&Member, usize)> = None;
    for &candidate in &candidates {
        let Some(score) = score(candidate, patterns) else {
            continue;
        };
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }
    best.map(|(member, _)| member.normalized_name.clone())
}

/// Every distinct normalized name among the methods called `name`
pub fn normalized_method_names(
    doc: &Document,
    name: &str,
    container: Option<&str>,
) -> IndexSet<String> {
    let signature = Signature::parse(name);
    candidates(doc, &signature.name, container)
        .into_iter()
        .map(|member| member.normalized_name.clone())
        .collect()
}

/// How well `patterns` describe the member's arguments, or `None` if the
/// number of patterns cannot be a call to it
pub(crate) fn score(member: &Member, patterns: &[ArgumentPattern]) -> Option<usize> {
    let count = patterns.len();
    if count < member.required_argument_count() {
        return None;
    }
    if count > member.arguments.len() && !member.is_variadic() {
        return None;
    }

    let mut total = 0;
    for (i, pattern) in patterns.iter().enumerate() {
        // Extra entries all land on the trailing variadic argument
        let argument = member.arguments.get(i).or(member.arguments.last())?;
        total += pattern.score(argument);
    }
    Some(total)
}

fn candidates<'a>(doc: &'a Document, name: &'a str, container: Option<&str>) -> Vec<&'a Member> {
    let constructs: Vec<_> = match container {
        Some(container) => doc
            .index()
            .constructs_named(container)
            .iter()
            .filter_map(|&index| doc.constructs().get(index))
            .collect(),
        None => doc.constructs().iter().collect(),
    };
    constructs
        .into_iter()
        .flat_map(|construct| construct.methods_named(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widl::parser::parse;
    use crate::widl::testing::IdlSources;

    #[test]
    fn test_bare_name_takes_first_overload() {
        let doc = IdlSources::Overloads.parse();
        assert_eq!(
            normalized_method_name(&doc, "fill", None).as_deref(),
            Some("fill(CanvasFillRule)")
        );
    }

    #[test]
    fn test_arity_selects_overload() {
        let doc = IdlSources::Overloads.parse();
        assert_eq!(
            normalized_method_name(&doc, "fill(path, rule)", None).as_deref(),
            Some("fill(Path2D, CanvasFillRule)")
        );
        assert_eq!(
            normalized_method_name(&doc, "fill()", None).as_deref(),
            Some("fill(CanvasFillRule)")
        );
    }

    #[test]
    fn test_unacceptable_arity_is_not_found() {
        let doc = IdlSources::Overloads.parse();
        assert_eq!(normalized_method_name(&doc, "fill(a, b, c)", None), None);
        assert_eq!(normalized_method_name(&doc, "round(a, b)", Some("Canvas")), None);
        assert_eq!(
            normalized_method_name(&doc, "round(a, b)", None).as_deref(),
            Some("round(double, long)")
        );
    }

    #[test]
    fn test_types_select_among_same_arity() {
        let doc = IdlSources::Overloads.parse();
        assert_eq!(
            normalized_method_name(&doc, "createImageData(ImageData data)", Some("Canvas"))
                .as_deref(),
            Some("createImageData(ImageData)")
        );
        assert_eq!(
            normalized_method_name(&doc, "createImageData(sw, sh)", Some("Canvas")).as_deref(),
            Some("createImageData(long, long)")
        );
    }

    #[test]
    fn test_container_limits_candidates() {
        let doc = IdlSources::Overloads.parse();
        assert_eq!(
            normalized_method_name(&doc, "round", None).as_deref(),
            Some("round(double)")
        );
        assert_eq!(
            normalized_method_name(&doc, "round", Some("Geometry")).as_deref(),
            Some("round(double, long)")
        );
        assert_eq!(normalized_method_name(&doc, "round", Some("Nowhere")), None);
    }

    #[test]
    fn test_variadic_accepts_many() {
        let doc = IdlSources::Overloads.parse();
        assert_eq!(
            normalized_method_name(&doc, "sum(a, b, c, d)", None).as_deref(),
            Some("sum(double...)")
        );
    }

    #[test]
    fn test_unnamed_specials_by_keyword() {
        let doc = IdlSources::Overloads.parse();
        assert_eq!(
            normalized_method_name(&doc, "setter", Some("Geometry")).as_deref(),
            Some("setter(unsigned long, double)")
        );
        assert_eq!(
            normalized_method_name(&doc, "stringifier", None).as_deref(),
            Some("stringifier()")
        );
    }

    #[test]
    fn test_unknown_method() {
        let doc = parse("interface A { void f(); };");
        assert_eq!(normalized_method_name(&doc, "g", None), None);
        assert_eq!(normalized_method_name(&doc, "g(long x)", None), None);
        assert!(normalized_method_names(&doc, "g", None).is_empty());
    }

    #[test]
    fn test_names_are_distinct_and_ordered() {
        let doc = IdlSources::Overloads.parse();
        let names = normalized_method_names(&doc, "drawImage", Some("Canvas"));
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(
            names,
            vec![
                "drawImage(CanvasImageSource, unrestricted double, unrestricted double)",
                "drawImage(CanvasImageSource, unrestricted double, unrestricted double, unrestricted double, unrestricted double)",
            ]
        );

        let doc = parse("interface A { void f(long x); void f(long y); };");
        assert_eq!(normalized_method_names(&doc, "f", None).len(), 1);
    }
}
