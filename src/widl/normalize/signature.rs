//! Call-like method signatures
//!
//! Grammar: `<signature> = <name> ("(" <entry> ("," <entry>)* ")")?`
//!
//! Entries are free text, split on top-level commas only, so
//! `f(sequence<(A or B)> x, record<K, V> y)` has two entries. Each entry is
//! then classified by what it looks like: a full argument, a type, a single
//! word (which could be either a type or an argument name) or anything else.

use crate::widl::ast::{Argument, Type};
use crate::widl::parser::{parse_argument, parse_type};
use chumsky::prelude::*;

type ParserError = Simple<char>;

/// One entry of a signature's argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentPattern {
    /// `optional long x`
    Argument(Argument),
    /// A single word, compared against both names and types
    Word(String),
    /// A type with no name (`unsigned long`, `sequence<Foo>`)
    Type(Type),
    /// Text that is neither; matches any argument
    Wildcard(String),
}

impl ArgumentPattern {
    pub fn classify(text: &str) -> Self {
        let text = text.trim();
        let single_word = !text.is_empty()
            && text
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if single_word {
            return ArgumentPattern::Word(text.to_string());
        }
        if let Some(argument) = parse_argument(text) {
            return ArgumentPattern::Argument(argument);
        }
        if let Some(ty) = parse_type(text) {
            return ArgumentPattern::Type(ty);
        }
        ArgumentPattern::Wildcard(text.to_string())
    }

    /// How well the pattern describes `argument`; type matches outweigh
    /// name matches
    pub fn score(&self, argument: &Argument) -> usize {
        let declared = argument.ty.to_string();
        match self {
            ArgumentPattern::Argument(pattern) => {
                let mut score = 0;
                if pattern.ty.to_string() == declared {
                    score += 2;
                }
                if pattern.name() == argument.name() {
                    score += 1;
                }
                score
            }
            ArgumentPattern::Word(word) if *word == declared => 2,
            ArgumentPattern::Word(word) if word == argument.name() => 1,
            ArgumentPattern::Type(ty) if ty.to_string() == declared => 2,
            ArgumentPattern::Word(_) | ArgumentPattern::Type(_) | ArgumentPattern::Wildcard(_) => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    /// `None` for a bare name, which matches every overload
    pub arguments: Option<Vec<ArgumentPattern>>,
}

impl Signature {
    /// Parse `name` or `name(entry, ...)`. Text that does not fit is taken
    /// whole as a bare name.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match signature().parse(text) {
            Ok((name, entries)) => Signature {
                name: name.trim().to_string(),
                arguments: entries.map(|entries| {
                    entries
                        .iter()
                        .map(|entry| entry.trim())
                        .filter(|entry| !entry.is_empty())
                        .map(ArgumentPattern::classify)
                        .collect()
                }),
            },
            Err(_) => Signature {
                name: text.to_string(),
                arguments: None,
            },
        }
    }

    /// Raw argument entries, split but unclassified
    pub fn split_entries(text: &str) -> Option<Vec<String>> {
        signature().parse(text.trim()).ok().and_then(|(_, entries)| entries)
    }
}

/// One argument entry: text with balanced `()` and `<>` groups, where only
/// commas inside a group are part of the entry
fn entry() -> impl Parser<char, String, Error = ParserError> + Clone {
    let nested = recursive(|nested: Recursive<char, String, ParserError>| {
        let text = filter(|ch: &char| !matches!(ch, '(' | ')' | '<' | '>'))
            .repeated()
            .at_least(1)
            .collect::<String>();
        let group = |open: char, close: char| {
            nested
                .clone()
                .delimited_by(just(open), just(close))
                .map(move |inner: String| format!("{}{}{}", open, inner, close))
        };
        choice((text, group('(', ')'), group('<', '>')))
            .repeated()
            .map(|pieces: Vec<String>| pieces.concat())
    });

    let text = filter(|ch: &char| !matches!(ch, '(' | ')' | '<' | '>' | ','))
        .repeated()
        .at_least(1)
        .collect::<String>();
    let group = |open: char, close: char| {
        nested
            .clone()
            .delimited_by(just(open), just(close))
            .map(move |inner: String| format!("{}{}{}", open, inner, close))
    };
    choice((text, group('(', ')'), group('<', '>')))
        .repeated()
        .map(|pieces: Vec<String>| pieces.concat())
}

fn signature() -> impl Parser<char, (String, Option<Vec<String>>), Error = ParserError> {
    let name = filter(|ch: &char| *ch != '(')
        .repeated()
        .at_least(1)
        .collect::<String>();
    let entries = entry()
        .separated_by(just(','))
        .delimited_by(just('('), just(')'));
    name.then(entries.or_not()).then_ignore(end())
}
