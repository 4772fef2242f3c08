//! Argument lists
//!
//! ```text
//! ArgumentList := "(" (Argument ("," Argument)*)? ")"
//! Argument     := ExtendedAttributeList? "optional"? Type "..."? identifier ("=" Default)?
//! ```

use super::cursor::Cursor;
use super::extended_attributes::extended_attribute_list;
use super::types::parse_type;
use crate::widl::ast::Argument;
use crate::widl::lexer::Token;

pub(crate) fn argument_list(c: &mut Cursor<'_>) -> Option<Vec<Argument>> {
    c.eat(Token::OpenParen)?;
    let mut arguments = Vec::new();
    if c.eat(Token::CloseParen).is_some() {
        return Some(arguments);
    }
    loop {
        arguments.push(argument(c)?);
        if c.eat(Token::Comma).is_some() {
            continue;
        }
        c.eat(Token::CloseParen)?;
        return Some(arguments);
    }
}

pub(crate) fn argument(c: &mut Cursor<'_>) -> Option<Argument> {
    let start = c.next_start();
    let extended_attributes = extended_attribute_list(c);
    let mut keywords = Vec::new();

    let optional = c.eat_keyword("optional").map(|word| keywords.push(word)).is_some();
    let ty = parse_type(c)?;
    let variadic = c.eat(Token::Ellipsis).map(|dots| keywords.push(dots)).is_some();
    let name = c.identifier()?;
    let default = if c.eat(Token::Equals).is_some() {
        Some(c.raw_until(|t| matches!(t, Token::Comma | Token::CloseParen))?)
    } else {
        None
    };

    Some(Argument {
        extended_attributes,
        optional,
        variadic,
        ty,
        name,
        default,
        keywords,
        range: start..c.last_end(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widl::config::ParserConfig;
    use crate::widl::lexer::tokenize;

    fn parse(source: &str) -> Option<Vec<Argument>> {
        let mut c = Cursor::new(source, tokenize(source), ParserConfig::default());
        argument_list(&mut c)
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(parse("( )").map(|args| args.len()), Some(0));
    }

    #[test]
    fn test_optional_with_defaults() {
        let args = parse(
            "(short x, unsigned long long y, optional double inf = Infinity, optional sequence<Foo> fooArg = 123.4)",
        )
        .expect("arguments to parse");
        assert_eq!(args.len(), 4);
        assert_eq!(args[1].ty.to_string(), "unsigned long long");
        assert!(args[2].optional);
        assert_eq!(args[2].default.as_ref().map(|d| d.as_str()), Some("Infinity"));
        assert_eq!(args[3].name(), "fooArg");
        assert_eq!(args[3].default.as_ref().map(|d| d.as_str()), Some("123.4"));
        assert!(args[0].is_required());
    }

    #[test]
    fn test_variadic() {
        let args = parse("(unrestricted double one, DOMString two, Fubar ... three)")
            .expect("arguments to parse");
        assert!(args[2].variadic);
        assert_eq!(args[2].signature(), "Fubar...");
        assert_eq!(args[2].keywords.len(), 1);
    }

    #[test]
    fn test_keyword_names() {
        let args = parse("(DOMString string, short round)").expect("arguments to parse");
        assert_eq!(args[0].name(), "string");
        assert_eq!(args[1].name(), "round");
    }

    #[test]
    fn test_argument_extended_attributes() {
        let args = parse("([Clamp] octet value)").expect("arguments to parse");
        assert_eq!(args[0].extended_attributes.len(), 1);
        assert_eq!(args[0].range, 1..20);
    }

    #[test]
    fn test_rejects_unnamed_and_trailing_comma() {
        assert!(parse("(short, Foo)").is_none());
        assert!(parse("(short a,)").is_none());
        assert!(parse("(short a").is_none());
    }
}
