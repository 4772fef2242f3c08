//! Members of interfaces, dictionaries and exceptions

use super::super::location::Spanned;
use super::super::types::Type;
use super::argument::{signature_name, Argument};
use super::extended_attribute::ExtendedAttribute;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Attribute,
    Operation,
    Const,
    Serializer,
    Iterable,
    Maplike,
    Setlike,
    DictionaryField,
    ExceptionField,
}

impl MemberKind {
    pub fn idl_type(&self) -> &'static str {
        match self {
            MemberKind::Attribute => "attribute",
            MemberKind::Operation => "method",
            MemberKind::Const => "const",
            MemberKind::Serializer => "serializer",
            MemberKind::Iterable => "iterable",
            MemberKind::Maplike => "maplike",
            MemberKind::Setlike => "setlike",
            MemberKind::DictionaryField => "dict-member",
            MemberKind::ExceptionField => "except-field",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.idl_type())
    }
}

/// Special operation keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
    Getter,
    Setter,
    Deleter,
    Creator,
    LegacyCaller,
}

impl Special {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "getter" => Some(Special::Getter),
            "setter" => Some(Special::Setter),
            "deleter" => Some(Special::Deleter),
            "creator" => Some(Special::Creator),
            "legacycaller" => Some(Special::LegacyCaller),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Special::Getter => "getter",
            Special::Setter => "setter",
            Special::Deleter => "deleter",
            Special::Creator => "creator",
            Special::LegacyCaller => "legacycaller",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Qualifiers {
    pub readonly: bool,
    pub static_: bool,
    pub stringifier: bool,
    pub inherit: bool,
    pub required: bool,
    pub optional: bool,
    pub variadic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub kind: MemberKind,
    pub name: Option<Spanned<String>>,
    /// Overload identity: `name(T1, T2)` for operations, the plain name otherwise
    pub normalized_name: String,
    /// Attribute, field, const or return type
    pub ty: Option<Type>,
    /// Key/value types of `iterable`, `maplike` and `setlike`
    pub type_arguments: Vec<Type>,
    pub qualifiers: Qualifiers,
    pub specials: Vec<Special>,
    pub arguments: Vec<Argument>,
    /// Dictionary field default, unevaluated
    pub default: Option<Spanned<String>>,
    /// Const value
    pub value: Option<Spanned<String>>,
    /// Serializer pattern (`{ inherit, attribute }`, `[ foo ]`, `foo`)
    pub pattern: Option<Spanned<String>>,
    pub raises: Vec<String>,
    pub get_raises: Vec<String>,
    pub set_raises: Vec<String>,
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub keywords: Vec<Range<usize>>,
    /// Unparsed text kept inside the member (before its `;`)
    pub junk: Vec<Range<usize>>,
    pub range: Range<usize>,
}

impl Member {
    pub fn new(kind: MemberKind, range: Range<usize>) -> Self {
        Self {
            kind,
            name: None,
            normalized_name: String::new(),
            ty: None,
            type_arguments: Vec::new(),
            qualifiers: Qualifiers::default(),
            specials: Vec::new(),
            arguments: Vec::new(),
            default: None,
            value: None,
            pattern: None,
            raises: Vec::new(),
            get_raises: Vec::new(),
            set_raises: Vec::new(),
            extended_attributes: Vec::new(),
            keywords: Vec::new(),
            junk: Vec::new(),
            range,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(|name| name.as_str())
    }

    pub fn idl_type(&self) -> &'static str {
        self.kind.idl_type()
    }

    /// Operations and `serializer [Type] name(args)` take arguments
    pub fn is_method(&self) -> bool {
        match self.kind {
            MemberKind::Operation => true,
            MemberKind::Serializer => {
                self.pattern.is_none() && (self.ty.is_some() || self.name.is_some())
            }
            _ => false,
        }
    }

    /// The name an operation is grouped under. Anonymous specials use their
    /// first keyword (`getter`), a bare `stringifier` uses `stringifier`.
    pub fn method_name(&self) -> Option<&str> {
        if let Some(name) = self.name() {
            return Some(name);
        }
        if !self.is_method() {
            return None;
        }
        if let Some(special) = self.specials.first() {
            return Some(special.keyword());
        }
        if self.qualifiers.stringifier {
            return Some("stringifier");
        }
        if self.kind == MemberKind::Serializer {
            return Some("serializer");
        }
        None
    }

    pub fn required_argument_count(&self) -> usize {
        self.arguments.iter().filter(|a| a.is_required()).count()
    }

    pub fn is_variadic(&self) -> bool {
        self.arguments.last().is_some_and(|a| a.variadic)
    }

    /// Recompute `normalized_name` from the name, kind and arguments
    pub fn normalize(&mut self) {
        self.normalized_name = if self.is_method() {
            let name = self.method_name().unwrap_or_default().to_string();
            signature_name(&name, &self.arguments)
        } else if let Some(name) = self.name() {
            name.to_string()
        } else {
            self.kind.idl_type().to_string()
        };
    }
}
