//! Document element
//!
//! The root of a parse: the source text, the ordered items that tile it, the
//! constructs those items refer to, diagnostics, and the name index built over
//! the constructs. A document is immutable once built; reparsing builds a new
//! one.

use super::super::diagnostic::Diagnostic;
use super::super::location::SourceLocation;
use super::super::node::Symbol;
use super::construct::Construct;
use crate::widl::complexity;
use crate::widl::formats::markers::Marker;
use crate::widl::formats::markup;
use crate::widl::lookup::{self, NameIndex};
use crate::widl::normalize;
use indexmap::IndexSet;
use std::fmt;
use std::ops::Range;

/// Top-level item: a construct or a span of trivia
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub range: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Index into [`Document::constructs`]
    Construct(usize),
    Trivia(TriviaKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaKind {
    /// Whitespace and comments between definitions
    Layout,
    /// Text that could not be parsed as a definition
    Junk,
}

impl Item {
    pub fn is_construct(&self) -> bool {
        matches!(self.kind, ItemKind::Construct(_))
    }

    pub fn is_junk(&self) -> bool {
        matches!(self.kind, ItemKind::Trivia(TriviaKind::Junk))
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    items: Vec<Item>,
    constructs: Vec<Construct>,
    diagnostics: Vec<Diagnostic>,
    index: NameIndex,
}

impl Document {
    pub fn new(
        source: String,
        items: Vec<Item>,
        constructs: Vec<Construct>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let index = NameIndex::build(&constructs);
        Self {
            source,
            items,
            constructs,
            diagnostics,
            index,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn constructs(&self) -> &[Construct] {
        &self.constructs
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    /// The text covered by a byte range of this document
    pub fn text(&self, range: &Range<usize>) -> &str {
        &self.source[range.clone()]
    }

    pub fn item_text(&self, item: &Item) -> &str {
        self.text(&item.range)
    }

    pub fn construct_for(&self, item: &Item) -> Option<&Construct> {
        match item.kind {
            ItemKind::Construct(index) => self.constructs.get(index),
            ItemKind::Trivia(_) => None,
        }
    }

    /// First construct with the given name
    pub fn construct(&self, name: &str) -> Option<&Construct> {
        self.index
            .constructs_named(name)
            .first()
            .and_then(|&index| self.constructs.get(index))
    }

    /// Concatenate every item's text; always equal to the parsed input
    pub fn reconstruct(&self) -> String {
        self.items.iter().map(|item| self.item_text(item)).collect()
    }

    pub fn source_location(&self) -> SourceLocation {
        SourceLocation::new(&self.source)
    }

    pub fn find(&self, path: &str) -> Option<Symbol<'_>> {
        lookup::find(self, path)
    }

    pub fn find_all(&self, path: &str) -> Vec<Symbol<'_>> {
        lookup::find_all(self, path)
    }

    pub fn normalized_method_name(&self, method: &str, container: Option<&str>) -> Option<String> {
        normalize::normalized_method_name(self, method, container)
    }

    pub fn normalized_method_names(&self, name: &str, container: Option<&str>) -> IndexSet<String> {
        normalize::normalized_method_names(self, name, container)
    }

    /// Replay the document through a marker
    pub fn markup(&self, marker: &mut dyn Marker) -> String {
        markup::markup(self, marker)
    }

    /// Mark up just the text of one symbol
    pub fn markup_symbol(&self, symbol: &Symbol<'_>, marker: &mut dyn Marker) -> String {
        markup::markup_symbol(self, symbol, marker)
    }

    pub fn complexity_factor(&self) -> usize {
        complexity::complexity_factor(self)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            f.write_str(self.item_text(item))?;
        }
        Ok(())
    }
}
