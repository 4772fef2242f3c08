//! Path lookup
//!
//! Resolves paths (see [`path`]) against a document's [`NameIndex`]:
//!
//! - `Name` is every construct called `Name`, then every member or argument
//!   called `Name`, in document order.
//! - `Name(selector)` is the constructor-style extended attributes of the
//!   constructs called `Name` that match `selector` (`constructor`, the
//!   attribute name, its value, or `Attr=Value`). With no such construct it
//!   is a method reference, `name(Type, Type)`, matched against every
//!   method's arguments.
//! - `Name.member` is the members of those constructs called `member`;
//!   `Name.method(Type).argument` narrows overloads by signature before
//!   looking for the argument. If no construct is called `Name`, the first
//!   segment names members anywhere instead.
//!
//! `find` returns the first result, `find_all` all of them.

pub mod index;
pub mod path;

pub use index::{Address, NameIndex};
pub use path::{parse_path, PathSegment};

use crate::widl::ast::{Construct, Document, Member, Symbol};
use crate::widl::normalize::{self, Signature};

pub fn find<'a>(doc: &'a Document, path: &str) -> Option<Symbol<'a>> {
    find_all(doc, path).into_iter().next()
}

pub fn find_all<'a>(doc: &'a Document, path: &str) -> Vec<Symbol<'a>> {
    let segments = parse_path(path);
    let Some((first, rest)) = segments.split_first() else {
        return Vec::new();
    };

    let constructs: Vec<&Construct> = doc
        .index()
        .constructs_named(&first.name)
        .iter()
        .filter_map(|&index| doc.constructs().get(index))
        .collect();

    match (rest, &first.selector) {
        ([], None) => {
            let mut symbols: Vec<Symbol<'a>> =
                constructs.into_iter().map(Symbol::construct).collect();
            symbols.extend(
                doc.index()
                    .symbols_named(&first.name)
                    .iter()
                    .filter_map(|address| address.resolve(doc.constructs())),
            );
            symbols
        }
        (rest, Some(selector)) if !constructs.is_empty() => {
            attribute_symbols(&constructs, selector, rest.first())
        }
        (rest, _) if !constructs.is_empty() => {
            let (member, argument) = match rest {
                [member] => (member, None),
                [member, argument, ..] => (member, Some(argument)),
                [] => return Vec::new(),
            };
            member_symbols(&constructs, member, argument)
        }
        // The first segment is a member reference
        (rest, _) => {
            let all: Vec<&Construct> = doc.constructs().iter().collect();
            member_symbols(&all, first, rest.first())
        }
    }
}

fn attribute_symbols<'a>(
    constructs: &[&'a Construct],
    selector: &str,
    argument: Option<&PathSegment>,
) -> Vec<Symbol<'a>> {
    let mut symbols = Vec::new();
    for &construct in constructs {
        for attribute in construct
            .extended_attributes
            .iter()
            .filter(|attribute| attribute.matches_selector(selector))
        {
            match argument {
                None => symbols.push(Symbol::attribute(construct, attribute)),
                Some(segment) => symbols.extend(
                    attribute
                        .arguments()
                        .iter()
                        .filter(|arg| arg.name() == segment.name)
                        .map(|arg| Symbol::argument(construct, None, Some(attribute), arg)),
                ),
            }
        }
    }
    symbols
}

fn member_symbols<'a>(
    constructs: &[&'a Construct],
    member: &PathSegment,
    argument: Option<&PathSegment>,
) -> Vec<Symbol<'a>> {
    let signature = member
        .selector
        .as_ref()
        .map(|_| Signature::parse(&member.as_signature()));

    let mut symbols = Vec::new();
    for &construct in constructs {
        for candidate in construct
            .members
            .iter()
            .filter(|candidate| names_member(candidate, &member.name))
        {
            let matches_signature = match signature.as_ref().and_then(|s| s.arguments.as_ref()) {
                Some(patterns) => {
                    candidate.is_method() && normalize::score(candidate, patterns).is_some()
                }
                None => true,
            };
            if !matches_signature {
                continue;
            }
            match argument {
                None => symbols.push(Symbol::member(construct, candidate)),
                Some(segment) => symbols.extend(
                    candidate
                        .arguments
                        .iter()
                        .filter(|arg| arg.name() == segment.name)
                        .map(|arg| Symbol::argument(construct, Some(candidate), None, arg)),
                ),
            }
        }
    }
    symbols
}

/// A member answers to its declared name, or for unnamed specials to the
/// keyword it is called by
fn names_member(member: &Member, name: &str) -> bool {
    member.name() == Some(name) || (member.is_method() && member.method_name() == Some(name))
}
