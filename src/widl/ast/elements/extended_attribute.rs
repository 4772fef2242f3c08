//! Extended attributes
//!
//! The bracketed annotations that may precede any definition, member or
//! argument. Entries the grammar cannot match are kept as
//! [`ExtendedAttributeValue::Unknown`], their text recoverable from the range.

use super::super::location::Spanned;
use super::argument::Argument;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedAttribute {
    /// Absent only for unknown entries that do not start with a word
    pub name: Option<Spanned<String>>,
    pub value: ExtendedAttributeValue,
    pub range: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtendedAttributeValue {
    /// `[Name]`
    None,
    /// `[Name=Value]`
    Identifier(Spanned<String>),
    /// `[Name=(A, B)]`
    IdentifierList(Vec<Spanned<String>>),
    /// `[Name(arguments)]`
    ArgumentList(Vec<Argument>),
    /// `[Name=Value(arguments)]`
    NamedArgumentList {
        name: Spanned<String>,
        arguments: Vec<Argument>,
    },
    /// Anything else, kept verbatim
    Unknown,
}

const CONSTRUCTOR_ATTRIBUTES: &[&str] = &["Constructor", "NamedConstructor", "LegacyFactoryFunction"];

impl ExtendedAttribute {
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(|name| name.as_str())
    }

    /// The identifier after `=`, if any
    pub fn value_name(&self) -> Option<&str> {
        match &self.value {
            ExtendedAttributeValue::Identifier(name)
            | ExtendedAttributeValue::NamedArgumentList { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn arguments(&self) -> &[Argument] {
        match &self.value {
            ExtendedAttributeValue::ArgumentList(arguments)
            | ExtendedAttributeValue::NamedArgumentList { arguments, .. } => arguments,
            _ => &[],
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.value, ExtendedAttributeValue::Unknown)
    }

    /// Constructor-style attributes: `Constructor`, `NamedConstructor`, `LegacyFactoryFunction`
    pub fn is_constructor(&self) -> bool {
        !self.is_unknown()
            && self
                .name()
                .is_some_and(|name| CONSTRUCTOR_ATTRIBUTES.contains(&name))
    }

    /// `Name` or `Name=Value`, as used in full names
    pub fn label(&self) -> String {
        match (self.name(), self.value_name()) {
            (Some(name), Some(value)) => format!("{}={}", name, value),
            (Some(name), None) => name.to_string(),
            (None, _) => String::new(),
        }
    }

    /// Whether a `Construct(selector)` path segment selects this attribute
    pub fn matches_selector(&self, selector: &str) -> bool {
        if !self.is_constructor() {
            return false;
        }
        selector.eq_ignore_ascii_case("constructor")
            || self.name() == Some(selector)
            || self.value_name() == Some(selector)
            || self.label() == selector
    }
}
