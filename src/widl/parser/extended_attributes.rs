//! Extended attribute lists
//!
//! ```text
//! ExtendedAttributeList := "[" ExtendedAttribute ("," ExtendedAttribute)* "]"
//! ExtendedAttribute     := identifier
//!                        | identifier "=" (identifier | literal)
//!                        | identifier "=" "(" identifier ("," identifier)* ")"
//!                        | identifier ArgumentList
//!                        | identifier "=" identifier ArgumentList
//! ```
//!
//! An entry that matches none of these is kept whole as an unknown entry,
//! running to the next top-level `,` or `]`. Inside parentheses a stray
//! closer does not end the entry, so `[hello (you ] there)]` is one entry.
//! Lists nested through arguments past
//! [`MAX_NESTING`](super::cursor::MAX_NESTING) are left unparsed.

use super::arguments::argument_list;
use super::cursor::{Cursor, Nesting};
use crate::widl::ast::{ExtendedAttribute, ExtendedAttributeValue, Spanned};
use crate::widl::lexer::Token;

/// Parse a bracketed list if one is next; otherwise return an empty list
pub(crate) fn extended_attribute_list(c: &mut Cursor<'_>) -> Vec<ExtendedAttribute> {
    if !c.at(Token::OpenBracket) {
        return Vec::new();
    }
    c.nested(|c| Some(bracketed_list(c))).unwrap_or_default()
}

fn bracketed_list(c: &mut Cursor<'_>) -> Vec<ExtendedAttribute> {
    let mut attributes = Vec::new();
    let Some(open) = c.eat(Token::OpenBracket) else {
        return attributes;
    };

    loop {
        match c.peek_token() {
            None => {
                c.warn("unterminated extended attribute list", open.start..c.last_end());
                break;
            }
            Some(Token::CloseBracket) => {
                c.bump();
                break;
            }
            Some(Token::Comma) => {
                c.bump();
            }
            Some(Token::Semicolon) => {
                c.warn("extended attribute list is missing `]`", open.start..c.last_end());
                break;
            }
            Some(_) => {
                let checkpoint = c.checkpoint();
                let parsed = extended_attribute(c)
                    .filter(|_| matches!(c.peek_token(), Some(Token::Comma | Token::CloseBracket)));
                match parsed {
                    Some(attribute) => attributes.push(attribute),
                    None => {
                        c.rewind(checkpoint);
                        if let Some(attribute) = unknown_attribute(c) {
                            attributes.push(attribute);
                        }
                    }
                }
            }
        }
    }
    attributes
}

fn extended_attribute(c: &mut Cursor<'_>) -> Option<ExtendedAttribute> {
    let start = c.next_start();
    let name = c.identifier()?;

    let value = if c.eat(Token::Equals).is_some() {
        if c.eat(Token::OpenParen).is_some() {
            let mut names = vec![c.identifier()?];
            while c.eat(Token::Comma).is_some() {
                names.push(c.identifier()?);
            }
            c.eat(Token::CloseParen)?;
            ExtendedAttributeValue::IdentifierList(names)
        } else if let Some(value) = c.identifier() {
            if c.at(Token::OpenParen) {
                ExtendedAttributeValue::NamedArgumentList {
                    name: value,
                    arguments: argument_list(c)?,
                }
            } else {
                ExtendedAttributeValue::Identifier(value)
            }
        } else if c.peek_token().is_some_and(|t| t.is_literal()) {
            let literal = c.bump()?;
            ExtendedAttributeValue::Identifier(Spanned::new(literal.text.to_string(), literal.span))
        } else {
            return None;
        }
    } else if c.at(Token::OpenParen) {
        ExtendedAttributeValue::ArgumentList(argument_list(c)?)
    } else {
        ExtendedAttributeValue::None
    };

    Some(ExtendedAttribute {
        name: Some(name),
        value,
        range: start..c.last_end(),
    })
}

fn unknown_attribute(c: &mut Cursor<'_>) -> Option<ExtendedAttribute> {
    let name = c
        .peek()
        .filter(|lexeme| lexeme.token.is_identifier_like())
        .map(|lexeme| Spanned::new(lexeme.text.to_string(), lexeme.span.clone()));
    let range = c.skip_balanced(Nesting::IgnoreMismatched, |lexeme| {
        matches!(
            lexeme.token,
            Token::Comma | Token::CloseBracket | Token::Semicolon
        )
    })?;
    c.warn(
        format!("unrecognized extended attribute `{}`", c.text(&range)),
        range.clone(),
    );
    Some(ExtendedAttribute {
        name,
        value: ExtendedAttributeValue::Unknown,
        range,
    })
}
