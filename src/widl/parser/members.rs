//! Members and definition bodies
//!
//! ```text
//! Body            := "{" Member* "}" ";"
//! InterfaceMember := Const | Serializer | Qualifier* (Attribute | Collection | Operation)
//! Qualifier       := "static" | "inherit" | "readonly" | "stringifier"
//! Attribute       := "attribute" Type identifier RaisesClause*
//! Collection      := ("iterable" | "maplike" | "setlike") "<" Type ("," Type)? ">"
//! Operation       := Special* Type identifier? ArgumentList RaisesClause*
//! Const           := "const" Type identifier "=" ConstValue
//! Serializer      := "serializer" ("=" Pattern | Type? identifier? ArgumentList)?
//! DictionaryField := "required"? Type identifier ("=" Default)?
//! RaisesClause    := ("raises" | "getraises" | "setraises") "(" ... ")"
//! ```
//!
//! Raises clauses are legacy syntax; their contents are kept as text.

use super::arguments::argument_list;
use super::cursor::{Cursor, Nesting};
use super::extended_attributes::extended_attribute_list;
use super::recovery::{recover_member, terminate};
use super::types::parse_type;
use crate::widl::ast::{Construct, Member, MemberKind, Special, Spanned};
use crate::widl::lexer::Token;

/// Which member grammar a body uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyKind {
    Interface,
    Dictionary,
    Exception,
}

/// Parse `{ members } ;` into `construct`
pub(crate) fn body(c: &mut Cursor<'_>, construct: &mut Construct, kind: BodyKind) -> Option<()> {
    let open = c.eat(Token::OpenBrace)?;
    loop {
        match c.peek_token() {
            None => {
                let message = format!("`{}` is missing its closing `}}`", construct.name());
                c.warn(message, open.start..c.last_end());
                return Some(());
            }
            Some(Token::CloseBrace) => {
                c.bump();
                break;
            }
            Some(Token::Semicolon) => {
                if let Some(range) = c.eat(Token::Semicolon) {
                    c.warn("stray `;`", range.clone());
                    construct.junk.push(range);
                }
            }
            Some(_) => {
                let checkpoint = c.checkpoint();
                match member(c, kind) {
                    Some(member) => construct.members.push(member),
                    None => {
                        c.rewind(checkpoint);
                        if let Some(range) = recover_member(c) {
                            construct.junk.push(range);
                        }
                    }
                }
            }
        }
    }
    close_definition(c, construct.name());
    Some(())
}

/// The `;` after a definition's closing brace
pub(crate) fn close_definition(c: &mut Cursor<'_>, name: &str) {
    if c.eat(Token::Semicolon).is_none() {
        let end = c.last_end();
        c.warn(format!("missing `;` after `{}`", name), end..end);
    }
}

pub(crate) fn member(c: &mut Cursor<'_>, kind: BodyKind) -> Option<Member> {
    let start = c.next_start();
    let extended_attributes = extended_attribute_list(c);
    let mut member = match kind {
        BodyKind::Interface => interface_member(c)?,
        BodyKind::Dictionary => dictionary_field(c)?,
        BodyKind::Exception if c.at_keyword("const") => const_member(c)?,
        BodyKind::Exception => exception_field(c)?,
    };
    member.extended_attributes = extended_attributes;
    terminate(c, &mut member.junk, false);
    member.range = start..c.last_end();
    member.normalize();
    Some(member)
}

fn interface_member(c: &mut Cursor<'_>) -> Option<Member> {
    if c.at_keyword("const") {
        return const_member(c);
    }
    if c.at_keyword("serializer") {
        return serializer(c);
    }

    let mut member = Member::new(MemberKind::Operation, 0..0);
    loop {
        let qualifier = if let Some(word) = c.eat_keyword("static") {
            member.qualifiers.static_ = true;
            word
        } else if let Some(word) = c.eat_keyword("inherit") {
            member.qualifiers.inherit = true;
            word
        } else if let Some(word) = c.eat_keyword("readonly") {
            member.qualifiers.readonly = true;
            word
        } else if let Some(word) = c.eat_keyword("stringifier") {
            member.qualifiers.stringifier = true;
            word
        } else {
            break;
        };
        member.keywords.push(qualifier);
    }

    // Bare `stringifier;`
    if member.qualifiers.stringifier && member.keywords.len() == 1 && c.at(Token::Semicolon) {
        return Some(member);
    }

    if c.at_keyword("attribute") {
        return attribute(c, member);
    }
    for (word, kind) in [
        ("iterable", MemberKind::Iterable),
        ("maplike", MemberKind::Maplike),
        ("setlike", MemberKind::Setlike),
    ] {
        if c.at_keyword(word) && c.nth_is(1, Token::OpenAngle) {
            return collection(c, member, kind);
        }
    }
    if member.qualifiers.inherit || member.qualifiers.readonly {
        return None;
    }
    operation(c, member)
}

fn attribute(c: &mut Cursor<'_>, mut member: Member) -> Option<Member> {
    member.kind = MemberKind::Attribute;
    member.keywords.push(c.eat_keyword("attribute")?);
    member.ty = Some(parse_type(c)?);
    member.name = Some(c.identifier()?);
    raises_clauses(c, &mut member)?;
    Some(member)
}

fn collection(c: &mut Cursor<'_>, mut member: Member, kind: MemberKind) -> Option<Member> {
    member.kind = kind;
    member.keywords.push(c.bump()?.span);
    c.eat(Token::OpenAngle)?;
    member.type_arguments.push(parse_type(c)?);
    while c.eat(Token::Comma).is_some() {
        member.type_arguments.push(parse_type(c)?);
    }
    c.eat(Token::CloseAngle)?;
    Some(member)
}

fn operation(c: &mut Cursor<'_>, mut member: Member) -> Option<Member> {
    while let Some(special) = c
        .peek()
        .filter(|lexeme| lexeme.token == Token::Identifier)
        .and_then(|lexeme| Special::from_keyword(lexeme.text))
    {
        member.keywords.push(c.bump()?.span);
        member.specials.push(special);
    }

    member.ty = Some(parse_type(c)?);
    if !c.at(Token::OpenParen) {
        member.name = Some(c.identifier()?);
    }
    member.arguments = argument_list(c)?;
    if member.name.is_none() && member.specials.is_empty() && !member.qualifiers.stringifier {
        return None;
    }
    raises_clauses(c, &mut member)?;
    Some(member)
}

fn const_member(c: &mut Cursor<'_>) -> Option<Member> {
    let mut member = Member::new(MemberKind::Const, 0..0);
    member.keywords.push(c.eat_keyword("const")?);
    member.ty = Some(parse_type(c)?);
    member.name = Some(c.identifier()?);
    c.eat(Token::Equals)?;
    member.value = Some(const_value(c)?);
    Some(member)
}

fn const_value(c: &mut Cursor<'_>) -> Option<Spanned<String>> {
    let lexeme = c.peek()?;
    let accepted = match lexeme.token {
        Token::String => false,
        Token::Identifier => matches!(lexeme.text, "true" | "false" | "null"),
        token => token.is_literal(),
    };
    if !accepted {
        return None;
    }
    c.bump()
        .map(|lexeme| Spanned::new(lexeme.text.to_string(), lexeme.span))
}

fn serializer(c: &mut Cursor<'_>) -> Option<Member> {
    let mut member = Member::new(MemberKind::Serializer, 0..0);
    member.keywords.push(c.eat_keyword("serializer")?);

    if c.at(Token::Semicolon) {
        return Some(member);
    }
    if c.eat(Token::Equals).is_some() {
        let pattern = if matches!(c.peek_token(), Some(Token::OpenBrace | Token::OpenBracket)) {
            let range = c.balanced_group()?;
            Spanned::new(c.text(&range).to_string(), range)
        } else {
            c.identifier()?
        };
        member.pattern = Some(pattern);
        return Some(member);
    }

    if c.peek_token().is_some_and(|t| t.is_identifier_like()) && c.nth_is(1, Token::OpenParen) {
        member.name = Some(c.identifier()?);
    } else {
        member.ty = Some(parse_type(c)?);
        if !c.at(Token::OpenParen) {
            member.name = Some(c.identifier()?);
        }
    }
    member.arguments = argument_list(c)?;
    Some(member)
}

fn dictionary_field(c: &mut Cursor<'_>) -> Option<Member> {
    let mut member = Member::new(MemberKind::DictionaryField, 0..0);
    if let Some(word) = c.eat_keyword("required") {
        member.qualifiers.required = true;
        member.keywords.push(word);
    }
    member.ty = Some(parse_type(c)?);
    member.name = Some(c.identifier()?);
    if c.eat(Token::Equals).is_some() {
        member.default =
            Some(c.raw_until(|t| matches!(t, Token::Semicolon | Token::CloseBrace))?);
    }
    Some(member)
}

fn exception_field(c: &mut Cursor<'_>) -> Option<Member> {
    let mut member = Member::new(MemberKind::ExceptionField, 0..0);
    member.ty = Some(parse_type(c)?);
    member.name = Some(c.identifier()?);
    Some(member)
}

#[derive(Clone, Copy)]
enum Raises {
    Raises,
    Get,
    Set,
}

fn raises_clauses(c: &mut Cursor<'_>, member: &mut Member) -> Option<()> {
    loop {
        let which = if c.at_keyword("raises") {
            Raises::Raises
        } else if c.at_keyword("getraises") {
            Raises::Get
        } else if c.at_keyword("setraises") {
            Raises::Set
        } else {
            return Some(());
        };
        let keyword = c.bump()?.span;
        member.keywords.push(keyword.clone());
        let list = raise_list(c)?;
        c.note("legacy raises clause", keyword.start..c.last_end());
        match which {
            Raises::Raises => member.raises = list,
            Raises::Get => member.get_raises = list,
            Raises::Set => member.set_raises = list,
        }
    }
}

/// `( entry, entry )`, each entry kept as raw text
fn raise_list(c: &mut Cursor<'_>) -> Option<Vec<String>> {
    c.eat(Token::OpenParen)?;
    let mut entries = Vec::new();
    loop {
        let entry = c.skip_balanced(Nesting::Unwind, |lexeme| {
            matches!(
                lexeme.token,
                Token::Comma | Token::CloseParen | Token::Semicolon | Token::CloseBrace
            )
        });
        if let Some(range) = entry {
            entries.push(c.text(&range).to_string());
        }
        if c.eat(Token::Comma).is_some() {
            continue;
        }
        c.eat(Token::CloseParen)?;
        return Some(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widl::config::ParserConfig;
    use crate::widl::lexer::tokenize;

    fn parse_member(source: &str, kind: BodyKind) -> Member {
        let mut c = Cursor::new(source, tokenize(source), ParserConfig::default());
        let member = member(&mut c, kind).expect("member to parse");
        assert!(c.at_end(), "member did not consume {source}");
        member
    }

    fn interface_member(source: &str) -> Member {
        parse_member(source, BodyKind::Interface)
    }

    fn fails(source: &str) -> bool {
        let mut c = Cursor::new(source, tokenize(source), ParserConfig::default());
        member(&mut c, BodyKind::Interface).is_none()
    }

    #[test]
    fn test_attribute_qualifiers() {
        let member = interface_member("static readonly attribute Foo foo;");
        assert_eq!(member.kind, MemberKind::Attribute);
        assert!(member.qualifiers.static_);
        assert!(member.qualifiers.readonly);
        assert_eq!(member.keywords.len(), 3);
        assert_eq!(member.normalized_name, "foo");

        let member = interface_member("inherit attribute short round setraises (for the heck of it);");
        assert!(member.qualifiers.inherit);
        assert_eq!(member.set_raises, vec!["for the heck of it".to_string()]);
    }

    #[test]
    fn test_attribute_with_keyword_name() {
        let member = interface_member("attribute boolean required;");
        assert_eq!(member.name(), Some("required"));
    }

    #[test]
    fn test_getraises_list() {
        let member = interface_member("[ha!] attribute short bar getraises (an, exception);");
        assert_eq!(member.get_raises, vec!["an".to_string(), "exception".to_string()]);
        assert_eq!(member.extended_attributes.len(), 1);
    }

    #[test]
    fn test_operation_with_raises() {
        let member = interface_member(
            "unsigned long long method(short x, unsigned long long y, optional double inf = Infinity, optional sequence<Foo> fooArg = 123.4) raises (hell);",
        );
        assert_eq!(member.kind, MemberKind::Operation);
        assert_eq!(member.raises, vec!["hell".to_string()]);
        assert_eq!(
            member.normalized_name,
            "method(short, unsigned long long, double, sequence<Foo>)"
        );
        assert_eq!(member.required_argument_count(), 2);
    }

    #[test]
    fn test_special_operations() {
        let member = interface_member("getter setter object bob(DOMString name);");
        assert_eq!(member.specials, vec![Special::Getter, Special::Setter]);
        assert_eq!(member.normalized_name, "bob(DOMString)");

        let member = interface_member("getter object (DOMString name);");
        assert!(member.name.is_none());
        assert_eq!(member.normalized_name, "getter(DOMString)");
    }

    #[test]
    fn test_stringifiers() {
        let member = interface_member("stringifier;");
        assert_eq!(member.normalized_name, "stringifier()");

        let member = interface_member("stringifier foo ();");
        assert_eq!(member.normalized_name, "stringifier()");
        assert_eq!(member.ty.as_ref().map(|t| t.to_string()), Some("foo".to_string()));

        let member = interface_member("stringifier attribute DOMString mediaText;");
        assert_eq!(member.kind, MemberKind::Attribute);
        assert!(member.qualifiers.stringifier);
    }

    #[test]
    fn test_serializers() {
        assert_eq!(interface_member("serializer;").normalized_name, "serializer");

        let member = interface_member("serializer = { inherit, attribute };");
        assert_eq!(
            member.pattern.as_ref().map(|p| p.as_str()),
            Some("{ inherit, attribute }")
        );
        assert!(!member.is_method());

        let member = interface_member("serializer = foo;");
        assert_eq!(member.pattern.as_ref().map(|p| p.as_str()), Some("foo"));

        let member = interface_member("serializer cereal(short one);");
        assert!(member.is_method());
        assert_eq!(member.normalized_name, "cereal(short)");
    }

    #[test]
    fn test_collections() {
        let member = interface_member("readonly maplike<Foo, Bar>;");
        assert_eq!(member.kind, MemberKind::Maplike);
        assert!(member.qualifiers.readonly);
        assert_eq!(member.type_arguments.len(), 2);

        let member = interface_member("iterable<Foo>;");
        assert_eq!(member.kind, MemberKind::Iterable);
        assert_eq!(member.normalized_name, "iterable");
    }

    #[test]
    fn test_consts() {
        for (source, value) in [
            ("const long hex = 0xabcdef09;", "0xabcdef09"),
            ("const long octal = 0777;", "0777"),
            ("const double reallyLow = -Infinity;", "-Infinity"),
            ("const double notANumber = NaN;", "NaN"),
            ("const boolean yes = true;", "true"),
        ] {
            let member = interface_member(source);
            assert_eq!(member.value.as_ref().map(|v| v.as_str()), Some(value));
        }
        assert!(fails("const double invalid = - Infinity;"));
    }

    #[test]
    fn test_trailing_junk_is_kept_on_member() {
        let source = "[two] Foo two()bar;";
        let member = interface_member(source);
        assert_eq!(member.junk, vec![15..18]);
        assert_eq!(member.range, 0..source.len());
    }

    #[test]
    fn test_dictionary_fields() {
        let member = parse_member("required Foo baz;", BodyKind::Dictionary);
        assert!(member.qualifiers.required);

        let member = parse_member("sequence<CSSFontFaceRule> fontfaces = [ ];", BodyKind::Dictionary);
        assert_eq!(member.default.as_ref().map(|d| d.as_str()), Some("[ ]"));
        assert_eq!(member.idl_type(), "dict-member");
    }

    #[test]
    fn test_exception_members() {
        let member = parse_member("DOMString message;", BodyKind::Exception);
        assert_eq!(member.kind, MemberKind::ExceptionField);
        let member = parse_member("const short ERR = 1;", BodyKind::Exception);
        assert_eq!(member.kind, MemberKind::Const);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(fails("this is a syntax error, naturally"));
        assert!(fails("readonly Foo bar();"));
        assert!(fails("void (long x);"));
    }
}
