//! Top-level definitions
//!
//! ```text
//! Definition := ExtendedAttributeList? (
//!                 "partial"? ("interface" | "dictionary") identifier Inheritance? Body
//!               | "callback" "interface" identifier Inheritance? Body
//!               | "callback" identifier "=" Type ArgumentList ";"
//!               | "exception" identifier Inheritance? Body
//!               | "enum" identifier EnumBody
//!               | "typedef" Type identifier ";"
//!               | identifier ("implements" | "includes") identifier ";" )
//! Inheritance := ":" identifier ("," identifier)*
//! ```

use super::arguments::argument_list;
use super::cursor::{Cursor, Nesting};
use super::extended_attributes::extended_attribute_list;
use super::members::{body, close_definition, BodyKind};
use super::recovery::terminate;
use super::types::parse_type;
use crate::widl::ast::{Construct, ConstructKind, Spanned};
use crate::widl::lexer::Token;

/// Parse one definition, or return `None` without a meaningful cursor
/// position if the text does not start one
pub(crate) fn definition(c: &mut Cursor<'_>) -> Option<Construct> {
    let start = c.next_start();
    let extended_attributes = extended_attribute_list(c);

    let mut construct = if let Some(partial) = c.eat_keyword("partial") {
        let kind = if c.at_keyword("interface") {
            ConstructKind::PartialInterface
        } else if c.at_keyword("dictionary") {
            ConstructKind::PartialDictionary
        } else {
            return None;
        };
        let mut construct = bodied(c, kind, start)?;
        construct.keywords.insert(0, partial);
        construct
    } else if c.at_keyword("interface") {
        bodied(c, ConstructKind::Interface, start)?
    } else if c.at_keyword("dictionary") {
        bodied(c, ConstructKind::Dictionary, start)?
    } else if c.at_keyword("exception") {
        let construct = bodied(c, ConstructKind::Exception, start)?;
        c.note("legacy exception definition", construct.name.range.clone());
        construct
    } else if c.at_keyword("callback") {
        if c.nth_is_keyword(1, "interface") {
            let callback = c.eat_keyword("callback")?;
            let mut construct = bodied(c, ConstructKind::CallbackInterface, start)?;
            construct.keywords.insert(0, callback);
            construct
        } else {
            callback(c, start)?
        }
    } else if c.at_keyword("enum") {
        enumeration(c, start)?
    } else if c.at_keyword("typedef") {
        typedef(c, start)?
    } else if c.peek_token().is_some_and(|t| t.is_identifier_like())
        && (c.nth_is_keyword(1, "implements") || c.nth_is_keyword(1, "includes"))
    {
        implements(c, start)?
    } else {
        return None;
    };

    construct.extended_attributes = extended_attributes;
    construct.range = start..c.last_end();
    Some(construct)
}

/// Interfaces, dictionaries, exceptions and callback interfaces
fn bodied(c: &mut Cursor<'_>, kind: ConstructKind, start: usize) -> Option<Construct> {
    let keyword = c.bump()?.span;
    let name = c.identifier()?;
    let mut construct = Construct::new(kind, name, start..start);
    construct.keywords.push(keyword);

    if c.eat(Token::Colon).is_some() {
        construct.inherits_from = Some(c.identifier()?);
        while c.eat(Token::Comma).is_some() {
            construct.additional_parents.push(c.identifier()?);
        }
        if let Some(last) = construct.additional_parents.last() {
            let range = construct.name.range.start..last.range.end;
            c.note("legacy multiple inheritance", range);
        }
    }

    let body_kind = match kind {
        ConstructKind::Dictionary | ConstructKind::PartialDictionary => BodyKind::Dictionary,
        ConstructKind::Exception => BodyKind::Exception,
        _ => BodyKind::Interface,
    };
    body(c, &mut construct, body_kind)?;
    Some(construct)
}

fn callback(c: &mut Cursor<'_>, start: usize) -> Option<Construct> {
    let keyword = c.eat_keyword("callback")?;
    let name = c.identifier()?;
    c.eat(Token::Equals)?;
    let mut construct = Construct::new(ConstructKind::Callback, name, start..start);
    construct.keywords.push(keyword);
    construct.ty = Some(parse_type(c)?);
    construct.arguments = argument_list(c)?;
    terminate(c, &mut construct.junk, true);
    Some(construct)
}

fn typedef(c: &mut Cursor<'_>, start: usize) -> Option<Construct> {
    let keyword = c.eat_keyword("typedef")?;
    let ty = parse_type(c)?;
    let name = c.identifier()?;
    let mut construct = Construct::new(ConstructKind::Typedef, name, start..start);
    construct.keywords.push(keyword);
    construct.ty = Some(ty);
    terminate(c, &mut construct.junk, true);
    Some(construct)
}

fn implements(c: &mut Cursor<'_>, start: usize) -> Option<Construct> {
    let name = c.identifier()?;
    let keyword = c.bump()?.span;
    let target = c.identifier()?;
    let mut construct = Construct::new(ConstructKind::ImplementsStatement, name, start..start);
    construct.keywords.push(keyword.clone());
    if c.text(&keyword) == "implements" {
        c.note("legacy implements statement", keyword);
    }
    construct.implements = Some(target);
    terminate(c, &mut construct.junk, true);
    Some(construct)
}

/// `enum Name { "a", "b", };` with a trailing comma allowed and anything
/// else between values kept as junk
fn enumeration(c: &mut Cursor<'_>, start: usize) -> Option<Construct> {
    let keyword = c.eat_keyword("enum")?;
    let name = c.identifier()?;
    let mut construct = Construct::new(ConstructKind::Enum, name, start..start);
    construct.keywords.push(keyword);
    let open = c.eat(Token::OpenBrace)?;

    loop {
        match c.peek_token() {
            None => {
                let message = format!("`{}` is missing its closing `}}`", construct.name());
                c.warn(message, open.start..c.last_end());
                return Some(construct);
            }
            Some(Token::CloseBrace) => {
                c.bump();
                break;
            }
            Some(Token::Comma) => {
                c.bump();
            }
            Some(Token::String) => {
                if let Some(value) = c.bump() {
                    let unquoted = value.text.trim_matches('"').to_string();
                    construct.enum_values.push(Spanned::new(unquoted, value.span));
                }
            }
            Some(_) => {
                let found = c.describe_next();
                let skipped = c.skip_balanced(Nesting::Unwind, |lexeme| {
                    matches!(
                        lexeme.token,
                        Token::Comma | Token::CloseBrace | Token::String | Token::Semicolon
                    )
                });
                match skipped {
                    Some(range) => {
                        c.warn(format!("unexpected {} in enum", found), range.clone());
                        construct.junk.push(range);
                    }
                    // A `;` inside the braces
                    None => {
                        if let Some(range) = c.eat(Token::Semicolon) {
                            c.warn("unexpected `;` in enum", range.clone());
                            construct.junk.push(range);
                        }
                    }
                }
            }
        }
    }
    close_definition(c, construct.name());
    Some(construct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widl::config::ParserConfig;
    use crate::widl::lexer::tokenize;

    fn parse(source: &str) -> Option<Construct> {
        let mut c = Cursor::new(source, tokenize(source), ParserConfig::default());
        definition(&mut c)
    }

    #[test]
    fn test_interface_with_multiple_inheritance() {
        let construct = parse("interface Multi : One  ,  Two   ,   Three     {\n attribute short one;\n};")
            .expect("interface to parse");
        assert_eq!(construct.kind, ConstructKind::Interface);
        assert_eq!(construct.inherits_from(), Some("One"));
        let parents: Vec<&str> = construct.additional_parents.iter().map(|p| p.as_str()).collect();
        assert_eq!(parents, vec!["Two", "Three"]);
        assert_eq!(construct.members.len(), 1);
    }

    #[test]
    fn test_partial_interface_with_constructors() {
        let construct = parse("[Constructor(Foo one)] partial interface Foo: Bar { void f(); };")
            .expect("interface to parse");
        assert_eq!(construct.kind, ConstructKind::PartialInterface);
        assert!(construct.partial);
        assert_eq!(construct.keywords.len(), 2);
        assert_eq!(construct.constructors().count(), 1);
        assert_eq!(construct.range.start, 0);
    }

    #[test]
    fn test_callbacks() {
        let construct = parse("callback callFoo2 = unsigned long long(unrestricted double one, DOMString two, Fubar ... three);")
            .expect("callback to parse");
        assert_eq!(construct.kind, ConstructKind::Callback);
        assert_eq!(construct.arguments.len(), 3);
        assert_eq!(
            construct.ty.as_ref().map(|t| t.to_string()),
            Some("unsigned long long".to_string())
        );

        let construct = parse("callback interface callMe { inherit attribute short round; };")
            .expect("callback interface to parse");
        assert_eq!(construct.kind, ConstructKind::CallbackInterface);
        assert_eq!(construct.idl_type(), "callback-interface");
    }

    #[test]
    fn test_enum_with_comments_and_trailing_comma() {
        let construct = parse("enum comments {\n\"one\", //comment one\n\"two\", //comment two\n\"three\"  , //coment three\n};")
            .expect("enum to parse");
        let values: Vec<&str> = construct.enum_values.iter().map(|v| v.as_str()).collect();
        assert_eq!(values, vec!["one", "two", "three"]);
        assert!(construct.junk.is_empty());
    }

    #[test]
    fn test_enum_junk() {
        let construct = parse("enum E { \"a\" oops, \"b\" };").expect("enum to parse");
        assert_eq!(construct.enum_values.len(), 2);
        assert_eq!(construct.junk.len(), 1);
    }

    #[test]
    fn test_typedef_with_junk() {
        let source = "typedef   short    shorttype  = error this is;";
        let construct = parse(source).expect("typedef to parse");
        assert_eq!(construct.name(), "shorttype");
        assert_eq!(construct.junk.len(), 1);
        assert_eq!(construct.range, 0..source.len());
    }

    #[test]
    fn test_implements_and_includes() {
        let construct = parse("Window   implements     WindowInterface  ;").expect("implements to parse");
        assert_eq!(construct.kind, ConstructKind::ImplementsStatement);
        assert_eq!(construct.name(), "Window");
        assert_eq!(construct.implements.as_ref().map(|t| t.as_str()), Some("WindowInterface"));

        let construct = parse("Window includes Mixin;").expect("includes to parse");
        assert_eq!(construct.kind, ConstructKind::ImplementsStatement);
    }

    #[test]
    fn test_missing_semicolon_after_body() {
        let source = "interface A { attribute long b; }";
        let mut c = Cursor::new(source, tokenize(source), ParserConfig::default());
        let construct = definition(&mut c).expect("interface to parse");
        assert_eq!(construct.range, 0..source.len());
        assert_eq!(c.into_diagnostics().len(), 1);
    }

    #[test]
    fn test_not_a_definition() {
        assert!(parse("const long long one= 2;").is_none());
        assert!(parse("partial enum X {};").is_none());
        assert!(parse("}").is_none());
    }
}
