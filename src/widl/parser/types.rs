//! Type grammar
//!
//! ```text
//! Type        := (UnionType | SingleType) Suffix*
//! UnionType   := "(" Type ("or" Type)+ ")"
//! SingleType  := ("sequence" | "FrozenArray" | "Promise") "<" Type ">"
//!              | "unsigned"? ("short" | "long" "long"?)
//!              | "unrestricted"? ("float" | "double")
//!              | identifier
//! Suffix      := "?" | "[" "]"
//! ```
//!
//! Types nested deeper than [`MAX_NESTING`](super::cursor::MAX_NESTING) do not parse.

use super::cursor::Cursor;
use crate::widl::ast::types::is_builtin_word;
use crate::widl::ast::{Type, TypeKind};
use crate::widl::lexer::Token;
use std::ops::Range;

pub(crate) fn parse_type(c: &mut Cursor<'_>) -> Option<Type> {
    c.nested(nested_type)
}

fn nested_type(c: &mut Cursor<'_>) -> Option<Type> {
    let start = c.next_start();
    let mut ty = if c.at(Token::OpenParen) {
        union_type(c)?
    } else {
        single_type(c)?
    };

    loop {
        if c.eat(Token::Question).is_some() {
            ty = Type::new(TypeKind::Nullable(Box::new(ty)), start..c.last_end());
        } else if c.at(Token::OpenBracket) && c.nth_is(1, Token::CloseBracket) {
            c.bump();
            c.bump();
            ty = Type::new(TypeKind::Array(Box::new(ty)), start..c.last_end());
        } else {
            break;
        }
    }
    Some(ty)
}

fn union_type(c: &mut Cursor<'_>) -> Option<Type> {
    let start = c.next_start();
    c.eat(Token::OpenParen)?;
    let mut alternatives = vec![parse_type(c)?];
    let mut separators = Vec::new();
    while let Some(or) = c.eat_keyword("or") {
        separators.push(or);
        alternatives.push(parse_type(c)?);
    }
    c.eat(Token::CloseParen)?;
    if separators.is_empty() {
        return None;
    }
    Some(Type::new(
        TypeKind::Union {
            alternatives,
            separators,
        },
        start..c.last_end(),
    ))
}

fn single_type(c: &mut Cursor<'_>) -> Option<Type> {
    let start = c.next_start();
    for generic in ["sequence", "FrozenArray", "Promise"] {
        if c.at_keyword(generic) && c.nth_is(1, Token::OpenAngle) {
            return generic_type(c, generic, start);
        }
    }

    let words = if ["unsigned", "unrestricted", "long"]
        .iter()
        .any(|word| c.at_keyword(word))
    {
        primitive_words(c)?
    } else {
        vec![c.identifier()?.range]
    };
    let name = words
        .iter()
        .map(|range| c.text(range))
        .collect::<Vec<_>>()
        .join(" ");
    let builtin = name.split(' ').all(is_builtin_word);
    Some(Type::new(
        TypeKind::Named {
            name,
            words,
            builtin,
        },
        start..c.last_end(),
    ))
}

fn generic_type(c: &mut Cursor<'_>, generic: &str, start: usize) -> Option<Type> {
    let keyword = c.eat_keyword(generic)?;
    c.eat(Token::OpenAngle)?;
    let inner = Box::new(parse_type(c)?);
    c.eat(Token::CloseAngle)?;
    let kind = match generic {
        "sequence" => TypeKind::Sequence { keyword, inner },
        "FrozenArray" => TypeKind::FrozenArray { keyword, inner },
        _ => TypeKind::Promise { keyword, inner },
    };
    Some(Type::new(kind, start..c.last_end()))
}

/// Multi-word integer and float types
fn primitive_words(c: &mut Cursor<'_>) -> Option<Vec<Range<usize>>> {
    let checkpoint = c.checkpoint();
    let mut words = Vec::new();

    if let Some(word) = c.eat_keyword("unsigned") {
        words.push(word);
        if let Some(word) = c.eat_keyword("short") {
            words.push(word);
        } else {
            words.extend(long_words(c));
        }
    } else if let Some(word) = c.eat_keyword("unrestricted") {
        words.push(word);
        if let Some(word) = c.eat_keyword("float").or_else(|| c.eat_keyword("double")) {
            words.push(word);
        }
    } else {
        words.extend(long_words(c));
    }

    // `unsigned` and `unrestricted` need a following type word
    if words.len() == 1 && !c.text(&words[0]).starts_with("long") {
        c.rewind(checkpoint);
        return None;
    }
    (!words.is_empty()).then_some(words)
}

fn long_words(c: &mut Cursor<'_>) -> Vec<Range<usize>> {
    let mut words = Vec::new();
    if let Some(word) = c.eat_keyword("long") {
        words.push(word);
        if let Some(word) = c.eat_keyword("long") {
            words.push(word);
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widl::parser::cursor::MAX_NESTING;
    use crate::widl::config::ParserConfig;
    use crate::widl::lexer::tokenize;
    use rstest::rstest;

    fn parse(source: &str) -> Option<(Type, bool)> {
        let mut c = Cursor::new(source, tokenize(source), ParserConfig::default());
        let ty = parse_type(&mut c);
        ty.map(|ty| (ty, c.at_end()))
    }

    #[rstest]
    #[case("short", "short")]
    #[case("unsigned   long long", "unsigned long long")]
    #[case("unrestricted double", "unrestricted double")]
    #[case("long long", "long long")]
    #[case("Foo", "Foo")]
    #[case("sequence<Foo[]>?", "sequence<Foo[]>?")]
    #[case("foo [ ] [ ]", "foo[][]")]
    #[case("FrozenArray<(short or Foo)>", "FrozenArray<(short or Foo)>")]
    #[case("Promise<ReallyISwear>?", "Promise<ReallyISwear>?")]
    #[case(
        "(short or sequence < DOMString [ ] ? [ ] > ? or DOMString[]?[] or unsigned long long or unrestricted double)",
        "(short or sequence<DOMString[]?[]>? or DOMString[]?[] or unsigned long long or unrestricted double)"
    )]
    #[case("(short or (long or double) or long long)", "(short or (long or double) or long long)")]
    fn test_canonical_forms(#[case] source: &str, #[case] canonical: &str) {
        let (ty, consumed_all) = parse(source).expect("type to parse");
        assert_eq!(ty.to_string(), canonical);
        assert!(consumed_all, "trailing tokens after {source}");
        assert_eq!(ty.range, 0..source.len());
    }

    #[test]
    fn test_builtin_detection() {
        let (ty, _) = parse("unsigned long long").expect("type to parse");
        assert!(matches!(ty.kind, TypeKind::Named { builtin: true, ref words, .. } if words.len() == 3));
        let (ty, _) = parse("ArrayBuffer").expect("type to parse");
        assert!(matches!(ty.kind, TypeKind::Named { builtin: false, .. }));
    }

    #[test]
    fn test_bracket_without_close_is_not_an_array() {
        let source = "Foo [Clamp]";
        let mut c = Cursor::new(source, tokenize(source), ParserConfig::default());
        let ty = parse_type(&mut c).expect("type to parse");
        assert_eq!(ty.to_string(), "Foo");
        assert!(c.at(Token::OpenBracket));
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |depth: usize| {
            format!("{}short{}", "(short or ".repeat(depth), ")".repeat(depth))
        };
        let (ty, consumed_all) = parse(&nested(MAX_NESTING - 1)).expect("type to parse");
        assert!(consumed_all);
        assert!(matches!(ty.kind, TypeKind::Union { .. }));
        assert!(parse(&nested(MAX_NESTING)).is_none());
        assert!(parse(&"(".repeat(20_000)).is_none());
    }

    #[rstest]
    #[case("(short)")]
    #[case("(short or )")]
    #[case("sequence<short")]
    #[case("unsigned")]
    #[case("?")]
    fn test_rejects_malformed(#[case] source: &str) {
        assert!(parse(source).is_none());
    }
}
