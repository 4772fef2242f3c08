//! Markers
//!
//! A [`Marker`] decides what surrounds each recognized span when a document is
//! replayed (see [`markup`](super::markup)). Every hook receives the span's
//! text and the node that owns it. Returning `None` leaves the span bare;
//! returning a [`Markup`], even an empty one, wraps it. Text is passed through
//! [`Marker::encode`] exactly once, whatever the hooks return.

use crate::widl::ast::Node;
use crate::widl::config::MarkupConfig;
use thiserror::Error;

/// Strings placed before and after a span
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    pub open: String,
    pub close: String,
}

impl Markup {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Present but empty
    pub fn empty() -> Self {
        Self::default()
    }
}

/// The six kinds of span a marker is asked about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Construct,
    Type,
    TypeName,
    Name,
    Keyword,
    EnumValue,
}

impl SpanKind {
    pub const ALL: [SpanKind; 6] = [
        SpanKind::Construct,
        SpanKind::Type,
        SpanKind::TypeName,
        SpanKind::Name,
        SpanKind::Keyword,
        SpanKind::EnumValue,
    ];

    pub fn hook_name(&self) -> &'static str {
        match self {
            SpanKind::Construct => "construct",
            SpanKind::Type => "type",
            SpanKind::TypeName => "type_name",
            SpanKind::Name => "name",
            SpanKind::Keyword => "keyword",
            SpanKind::EnumValue => "enum_value",
        }
    }
}

pub trait Marker {
    fn markup_construct(&mut self, text: &str, node: Node<'_>) -> Option<Markup>;
    fn markup_type(&mut self, text: &str, node: Node<'_>) -> Option<Markup>;
    fn markup_type_name(&mut self, text: &str, node: Node<'_>) -> Option<Markup>;
    fn markup_name(&mut self, text: &str, node: Node<'_>) -> Option<Markup>;
    fn markup_keyword(&mut self, text: &str, node: Node<'_>) -> Option<Markup>;
    fn markup_enum_value(&mut self, text: &str, node: Node<'_>) -> Option<Markup>;
    fn encode(&mut self, text: &str) -> String;

    /// Dispatch to the hook for `kind`
    fn markup(&mut self, kind: SpanKind, text: &str, node: Node<'_>) -> Option<Markup> {
        match kind {
            SpanKind::Construct => self.markup_construct(text, node),
            SpanKind::Type => self.markup_type(text, node),
            SpanKind::TypeName => self.markup_type_name(text, node),
            SpanKind::Name => self.markup_name(text, node),
            SpanKind::Keyword => self.markup_keyword(text, node),
            SpanKind::EnumValue => self.markup_enum_value(text, node),
        }
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// ============================================================================
// NullMarker
// ============================================================================

/// Adds nothing and records every piece of text it encodes. Constructs and
/// types get no markup at all, the rest get empty markup.
#[derive(Debug, Default)]
pub struct NullMarker {
    pub text: String,
}

impl NullMarker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Marker for NullMarker {
    fn markup_construct(&mut self, _text: &str, _node: Node<'_>) -> Option<Markup> {
        None
    }

    fn markup_type(&mut self, _text: &str, _node: Node<'_>) -> Option<Markup> {
        None
    }

    fn markup_type_name(&mut self, _text: &str, _node: Node<'_>) -> Option<Markup> {
        Some(Markup::empty())
    }

    fn markup_name(&mut self, _text: &str, _node: Node<'_>) -> Option<Markup> {
        Some(Markup::empty())
    }

    fn markup_keyword(&mut self, _text: &str, _node: Node<'_>) -> Option<Markup> {
        Some(Markup::empty())
    }

    fn markup_enum_value(&mut self, _text: &str, _node: Node<'_>) -> Option<Markup> {
        Some(Markup::empty())
    }

    fn encode(&mut self, text: &str) -> String {
        self.text.push_str(text);
        text.to_string()
    }
}

// ============================================================================
// TagMarker
// ============================================================================

/// Debugging marker: `<interface>`, `<TYPE for=method>`, `<NAME for=argument>`
#[derive(Debug, Default, Clone, Copy)]
pub struct TagMarker;

impl Marker for TagMarker {
    fn markup_construct(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        let tag = node.idl_type();
        Some(Markup::new(format!("<{}>", tag), format!("</{}>", tag)))
    }

    fn markup_type(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        Some(Markup::new(format!("<TYPE for={}>", node.idl_type()), "</TYPE>"))
    }

    fn markup_type_name(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        Some(Markup::new(
            format!("<TYPE-NAME for={}>", node.idl_type()),
            "</TYPE-NAME>",
        ))
    }

    fn markup_name(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        Some(Markup::new(format!("<NAME for={}>", node.idl_type()), "</NAME>"))
    }

    fn markup_keyword(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        Some(Markup::new(
            format!("<KEYWORD for={}>", node.idl_type()),
            "</KEYWORD>",
        ))
    }

    fn markup_enum_value(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        Some(Markup::new(
            format!("<ENUM-VALUE for={}>", node.idl_type()),
            "</ENUM-VALUE>",
        ))
    }

    fn encode(&mut self, text: &str) -> String {
        escape_html(text)
    }
}

// ============================================================================
// HtmlMarker
// ============================================================================

/// `<span class="idl-type">`-style markup, shaped by [`MarkupConfig`]
#[derive(Debug, Clone, Default)]
pub struct HtmlMarker {
    config: MarkupConfig,
}

impl HtmlMarker {
    pub fn new(config: MarkupConfig) -> Self {
        Self { config }
    }

    fn wrap(&self, class: &str, node: Node<'_>) -> Option<Markup> {
        let mut open = format!(
            "<{} class=\"{}{}\" data-idl-type=\"{}\"",
            self.config.element,
            self.config.class_prefix,
            class,
            node.idl_type()
        );
        if let Some(name) = node.name() {
            open.push_str(&format!(" data-idl-name=\"{}\"", escape_html(name)));
        }
        open.push('>');
        Some(Markup::new(open, format!("</{}>", self.config.element)))
    }
}

impl Marker for HtmlMarker {
    fn markup_construct(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        self.wrap(&self.config.construct_class, node)
    }

    fn markup_type(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        self.wrap(&self.config.type_class, node)
    }

    fn markup_type_name(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        self.wrap(&self.config.type_name_class, node)
    }

    fn markup_name(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        self.wrap(&self.config.name_class, node)
    }

    fn markup_keyword(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        self.wrap(&self.config.keyword_class, node)
    }

    fn markup_enum_value(&mut self, _text: &str, node: Node<'_>) -> Option<Markup> {
        self.wrap(&self.config.enum_value_class, node)
    }

    fn encode(&mut self, text: &str) -> String {
        if self.config.escape {
            escape_html(text)
        } else {
            text.to_string()
        }
    }
}

// ============================================================================
// HookMarker
// ============================================================================

pub type Hook = Box<dyn FnMut(&str, Node<'_>) -> Option<Markup>>;
pub type EncodeHook = Box<dyn FnMut(&str) -> String>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("marker is missing its `{0}` hook")]
    MissingHook(&'static str),
}

/// A marker assembled from closures
pub struct HookMarker {
    hooks: [Hook; 6],
    encode: Option<EncodeHook>,
}

impl HookMarker {
    pub fn builder() -> HookMarkerBuilder {
        HookMarkerBuilder::default()
    }

    fn call(&mut self, kind: SpanKind, text: &str, node: Node<'_>) -> Option<Markup> {
        let index = SpanKind::ALL.iter().position(|&k| k == kind)?;
        (self.hooks[index])(text, node)
    }
}

impl Marker for HookMarker {
    fn markup_construct(&mut self, text: &str, node: Node<'_>) -> Option<Markup> {
        self.call(SpanKind::Construct, text, node)
    }

    fn markup_type(&mut self, text: &str, node: Node<'_>) -> Option<Markup> {
        self.call(SpanKind::Type, text, node)
    }

    fn markup_type_name(&mut self, text: &str, node: Node<'_>) -> Option<Markup> {
        self.call(SpanKind::TypeName, text, node)
    }

    fn markup_name(&mut self, text: &str, node: Node<'_>) -> Option<Markup> {
        self.call(SpanKind::Name, text, node)
    }

    fn markup_keyword(&mut self, text: &str, node: Node<'_>) -> Option<Markup> {
        self.call(SpanKind::Keyword, text, node)
    }

    fn markup_enum_value(&mut self, text: &str, node: Node<'_>) -> Option<Markup> {
        self.call(SpanKind::EnumValue, text, node)
    }

    fn encode(&mut self, text: &str) -> String {
        match &mut self.encode {
            Some(encode) => encode(text),
            None => text.to_string(),
        }
    }
}

/// Collects the six markup hooks; [`build`](Self::build) fails if any is
/// missing. The encode hook is optional and defaults to the identity.
#[derive(Default)]
pub struct HookMarkerBuilder {
    hooks: [Option<Hook>; 6],
    encode: Option<EncodeHook>,
}

impl HookMarkerBuilder {
    fn set(mut self, kind: SpanKind, hook: Hook) -> Self {
        if let Some(index) = SpanKind::ALL.iter().position(|&k| k == kind) {
            self.hooks[index] = Some(hook);
        }
        self
    }

    pub fn construct(self, hook: impl FnMut(&str, Node<'_>) -> Option<Markup> + 'static) -> Self {
        self.set(SpanKind::Construct, Box::new(hook))
    }

    pub fn type_(self, hook: impl FnMut(&str, Node<'_>) -> Option<Markup> + 'static) -> Self {
        self.set(SpanKind::Type, Box::new(hook))
    }

    pub fn type_name(self, hook: impl FnMut(&str, Node<'_>) -> Option<Markup> + 'static) -> Self {
        self.set(SpanKind::TypeName, Box::new(hook))
    }

    pub fn name(self, hook: impl FnMut(&str, Node<'_>) -> Option<Markup> + 'static) -> Self {
        self.set(SpanKind::Name, Box::new(hook))
    }

    pub fn keyword(self, hook: impl FnMut(&str, Node<'_>) -> Option<Markup> + 'static) -> Self {
        self.set(SpanKind::Keyword, Box::new(hook))
    }

    pub fn enum_value(self, hook: impl FnMut(&str, Node<'_>) -> Option<Markup> + 'static) -> Self {
        self.set(SpanKind::EnumValue, Box::new(hook))
    }

    pub fn encode(mut self, hook: impl FnMut(&str) -> String + 'static) -> Self {
        self.encode = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> Result<HookMarker, MarkupError> {
        let [construct, ty, type_name, name, keyword, enum_value] = self.hooks;
        let require = |hook: Option<Hook>, kind: SpanKind| {
            hook.ok_or(MarkupError::MissingHook(kind.hook_name()))
        };
        Ok(HookMarker {
            hooks: [
                require(construct, SpanKind::Construct)?,
                require(ty, SpanKind::Type)?,
                require(type_name, SpanKind::TypeName)?,
                require(name, SpanKind::Name)?,
                require(keyword, SpanKind::Keyword)?,
                require(enum_value, SpanKind::EnumValue)?,
            ],
            encode: self.encode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(_: &str, _: Node<'_>) -> Option<Markup> {
        Some(Markup::empty())
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
        assert_eq!(escape_html("plain éß"), "plain éß");
    }

    #[test]
    fn test_null_marker_records_text() {
        let mut marker = NullMarker::new();
        assert_eq!(marker.encode("interface "), "interface ");
        assert_eq!(marker.encode("A"), "A");
        assert_eq!(marker.text, "interface A");
    }

    #[test]
    fn test_builder_requires_every_hook() {
        let result = HookMarker::builder()
            .construct(empty)
            .type_(empty)
            .type_name(empty)
            .name(empty)
            .keyword(empty)
            .build();
        assert_eq!(result.err(), Some(MarkupError::MissingHook("enum_value")));

        let result = HookMarker::builder().build();
        assert_eq!(result.err(), Some(MarkupError::MissingHook("construct")));
    }

    #[test]
    fn test_builder_with_every_hook() {
        let marker = HookMarker::builder()
            .construct(empty)
            .type_(empty)
            .type_name(empty)
            .name(empty)
            .keyword(empty)
            .enum_value(|_, _| None)
            .encode(|text| text.to_uppercase())
            .build();
        let mut marker = marker.expect("all hooks present");
        assert_eq!(marker.encode("abc"), "ABC");
    }

    #[test]
    fn test_missing_hook_message() {
        assert_eq!(
            MarkupError::MissingHook("type").to_string(),
            "marker is missing its `type` hook"
        );
    }
}
