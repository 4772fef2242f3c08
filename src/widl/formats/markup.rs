//! Markup engine
//!
//! Replays a document through a [`Marker`]. The tree is flattened into
//! decorations (a byte range, the hook to ask, the node that owns the span),
//! collected in pre-order so that enclosing spans come before the spans they
//! contain. A single sweep over the source then interleaves encoded text with
//! the open and close strings the marker hands back.
//!
//! Every byte of the swept range is passed to [`Marker::encode`] exactly once,
//! so a marker that adds nothing and encodes verbatim reproduces the input.

use super::markers::{Marker, SpanKind};
use crate::widl::ast::{Argument, Construct, Document, Member, Node, Symbol, Type, TypeKind};
use std::cmp::Reverse;
use std::ops::Range;
use tracing::debug;

#[derive(Debug, Clone)]
struct Decoration<'a> {
    range: Range<usize>,
    kind: SpanKind,
    node: Node<'a>,
}

#[derive(Default)]
struct Decorations<'a> {
    spans: Vec<Decoration<'a>>,
}

impl<'a> Decorations<'a> {
    fn push(&mut self, range: &Range<usize>, kind: SpanKind, node: Node<'a>) {
        if !range.is_empty() {
            self.spans.push(Decoration {
                range: range.clone(),
                kind,
                node,
            });
        }
    }

    fn construct(&mut self, construct: &'a Construct) {
        let node = Node::Construct(construct);
        self.push(&construct.range, SpanKind::Construct, node);

        for attribute in &construct.extended_attributes {
            for argument in attribute.arguments() {
                self.argument(argument);
            }
        }
        for keyword in &construct.keywords {
            self.push(keyword, SpanKind::Keyword, node);
        }
        self.push(&construct.name.range, SpanKind::Name, node);
        for parent in construct
            .inherits_from
            .iter()
            .chain(&construct.additional_parents)
            .chain(&construct.implements)
        {
            self.push(&parent.range, SpanKind::TypeName, node);
        }
        if let Some(ty) = &construct.ty {
            self.ty(ty, node);
        }
        for argument in &construct.arguments {
            self.argument(argument);
        }
        for value in &construct.enum_values {
            self.push(&value.range, SpanKind::EnumValue, node);
        }
        for member in &construct.members {
            self.member(member);
        }
    }

    fn member(&mut self, member: &'a Member) {
        let node = Node::Member(member);
        self.push(&member.range, SpanKind::Construct, node);

        for attribute in &member.extended_attributes {
            for argument in attribute.arguments() {
                self.argument(argument);
            }
        }
        for keyword in &member.keywords {
            self.push(keyword, SpanKind::Keyword, node);
        }
        if let Some(ty) = &member.ty {
            self.ty(ty, node);
        }
        for ty in &member.type_arguments {
            self.ty(ty, node);
        }
        if let Some(name) = &member.name {
            self.push(&name.range, SpanKind::Name, node);
        }
        for argument in &member.arguments {
            self.argument(argument);
        }
    }

    fn argument(&mut self, argument: &'a Argument) {
        let node = Node::Argument(argument);
        for attribute in &argument.extended_attributes {
            for nested in attribute.arguments() {
                self.argument(nested);
            }
        }
        for keyword in &argument.keywords {
            self.push(keyword, SpanKind::Keyword, node);
        }
        self.ty(&argument.ty, node);
        self.push(&argument.name.range, SpanKind::Name, node);
    }

    fn ty(&mut self, ty: &'a Type, node: Node<'a>) {
        self.push(&ty.range, SpanKind::Type, node);
        self.type_parts(ty, node);
    }

    fn type_parts(&mut self, ty: &'a Type, node: Node<'a>) {
        match &ty.kind {
            TypeKind::Named {
                words, builtin: true, ..
            } => {
                for word in words {
                    self.push(word, SpanKind::Keyword, node);
                }
            }
            TypeKind::Named { .. } => self.push(&ty.range, SpanKind::TypeName, node),
            TypeKind::Nullable(inner) | TypeKind::Array(inner) => self.type_parts(inner, node),
            TypeKind::Sequence { keyword, inner }
            | TypeKind::FrozenArray { keyword, inner }
            | TypeKind::Promise { keyword, inner } => {
                self.push(keyword, SpanKind::Keyword, node);
                self.type_parts(inner, node);
            }
            TypeKind::Union {
                alternatives,
                separators,
            } => {
                // Alternatives and separators interleave; the sweep orders them
                for alternative in alternatives {
                    self.type_parts(alternative, node);
                }
                for separator in separators {
                    self.push(separator, SpanKind::Keyword, node);
                }
            }
        }
    }
}

fn collect(doc: &Document) -> Vec<Decoration<'_>> {
    let mut decorations = Decorations::default();
    for construct in doc.constructs() {
        decorations.construct(construct);
    }
    decorations.spans
}

/// Mark up the whole document
pub fn markup(doc: &Document, marker: &mut dyn Marker) -> String {
    sweep(doc, 0..doc.source().len(), collect(doc), marker)
}

/// Mark up the text of one symbol, with the spans it contains
pub fn markup_symbol(doc: &Document, symbol: &Symbol<'_>, marker: &mut dyn Marker) -> String {
    let bounds = symbol.node.range();
    let decorations = collect(doc)
        .into_iter()
        .filter(|d| d.range.start >= bounds.start && d.range.end <= bounds.end)
        .collect();
    sweep(doc, bounds, decorations, marker)
}

fn sweep(
    doc: &Document,
    bounds: Range<usize>,
    mut decorations: Vec<Decoration<'_>>,
    marker: &mut dyn Marker,
) -> String {
    // Stable: equal ranges keep pre-order, outermost first
    decorations.sort_by_key(|d| (d.range.start, Reverse(d.range.end)));

    let mut sweep = Sweep {
        source: doc.source(),
        output: String::with_capacity(bounds.len() * 2),
        open: Vec::new(),
        position: bounds.start,
    };

    for decoration in decorations {
        sweep.close_until(decoration.range.start, marker);

        if let Some(&(end, _)) = sweep.open.last() {
            if decoration.range.end > end {
                debug!(
                    target: "widl::markup",
                    "skipping span {:?} crossing its parent",
                    decoration.range
                );
                continue;
            }
        }

        sweep.text_to(decoration.range.start, marker);
        let text = &sweep.source[decoration.range.clone()];
        let close = match marker.markup(decoration.kind, text, decoration.node) {
            Some(markup) => {
                sweep.output.push_str(&markup.open);
                Some(markup.close)
            }
            None => None,
        };
        sweep.open.push((decoration.range.end, close));
    }

    sweep.close_until(bounds.end, marker);
    sweep.text_to(bounds.end, marker);
    sweep.output
}

struct Sweep<'s> {
    source: &'s str,
    output: String,
    /// End offset and close string of every span still open
    open: Vec<(usize, Option<String>)>,
    position: usize,
}

impl Sweep<'_> {
    fn text_to(&mut self, end: usize, marker: &mut dyn Marker) {
        if self.position < end {
            self.output
                .push_str(&marker.encode(&self.source[self.position..end]));
            self.position = end;
        }
    }

    /// Close every open span ending at or before `limit`
    fn close_until(&mut self, limit: usize, marker: &mut dyn Marker) {
        while let Some(&(end, _)) = self.open.last() {
            if end > limit {
                break;
            }
            self.text_to(end, marker);
            if let Some((_, Some(close))) = self.open.pop() {
                self.output.push_str(&close);
            }
        }
    }
}
