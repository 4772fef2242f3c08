//! Parser for WebIDL
//!
//! A hand-written recursive-descent parser over the lexeme stream. Parsing
//! never fails: every production either matches or is undone and the text it
//! covered is skipped to a stable boundary (see [`recovery`]) and kept. The
//! resulting [`Document`] therefore always reproduces its input exactly.
//!
//! Submodules follow the grammar: [`definitions`] for top-level constructs,
//! [`members`] for bodies, then [`arguments`], [`extended_attributes`] and
//! [`types`].

pub(crate) mod arguments;
pub(crate) mod cursor;
pub(crate) mod definitions;
pub(crate) mod extended_attributes;
pub(crate) mod members;
pub(crate) mod recovery;
pub(crate) mod types;


use crate::widl::ast::{Argument, Document, Item, ItemKind, Severity, TriviaKind, Type};
use crate::widl::config::ParserConfig;
use crate::widl::lexer::tokenize;
use cursor::Cursor;
use tracing::{debug, warn};

/// Parses WebIDL text and holds the most recent document
#[derive(Debug, Default)]
pub struct Parser {
    config: ParserConfig,
    document: Option<Document>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            document: None,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `text`, replacing any previous document
    pub fn parse(&mut self, text: &str) -> &Document {
        self.reset();
        self.document.insert(parse_with_config(text, &self.config))
    }

    /// Discard the current document
    pub fn reset(&mut self) {
        self.document = None;
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }
}

/// Parse with the default configuration
pub fn parse(text: &str) -> Document {
    parse_with_config(text, &ParserConfig::default())
}

pub fn parse_with_config(text: &str, config: &ParserConfig) -> Document {
    let mut c = Cursor::new(text, tokenize(text), *config);
    let mut items = Vec::new();
    let mut constructs = Vec::new();

    loop {
        let offset = c.offset();
        let start = c.next_start();
        if start > offset {
            items.push(Item {
                kind: ItemKind::Trivia(TriviaKind::Layout),
                range: offset..start,
            });
            c.skip_trivia();
        }
        if c.at_end() {
            break;
        }

        let checkpoint = c.checkpoint();
        match definitions::definition(&mut c) {
            Some(construct) => {
                items.push(Item {
                    kind: ItemKind::Construct(constructs.len()),
                    range: construct.range.clone(),
                });
                constructs.push(construct);
            }
            None => {
                c.rewind(checkpoint);
                let range = recovery::recover_definition(&mut c);
                items.push(Item {
                    kind: ItemKind::Trivia(TriviaKind::Junk),
                    range,
                });
            }
        }
    }

    let diagnostics = c.into_diagnostics();
    for diagnostic in diagnostics.iter().filter(|d| d.severity == Severity::Warning) {
        warn!(
            target: "widl::parser",
            range = ?diagnostic.range,
            "{}",
            diagnostic.message
        );
    }
    debug!(
        target: "widl::parser",
        constructs = constructs.len(),
        items = items.len(),
        diagnostics = diagnostics.len(),
        "parsed WebIDL"
    );

    Document::new(text.to_string(), items, constructs, diagnostics)
}

/// Parse text that must be exactly one argument (`optional Foo... bar = 1`)
pub(crate) fn parse_argument(text: &str) -> Option<Argument> {
    let mut c = Cursor::new(text, tokenize(text), ParserConfig::default());
    let argument = arguments::argument(&mut c)?;
    c.at_end().then_some(argument)
}

/// Parse text that must be exactly one type
pub(crate) fn parse_type(text: &str) -> Option<Type> {
    let mut c = Cursor::new(text, tokenize(text), ParserConfig::default());
    let ty = types::parse_type(&mut c)?;
    c.at_end().then_some(ty)
}
