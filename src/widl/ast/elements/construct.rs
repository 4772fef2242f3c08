//! Top-level definitions

use super::super::location::Spanned;
use super::super::types::Type;
use super::argument::Argument;
use super::extended_attribute::ExtendedAttribute;
use super::member::Member;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    Interface,
    PartialInterface,
    Dictionary,
    PartialDictionary,
    Exception,
    Enum,
    Typedef,
    Callback,
    CallbackInterface,
    ImplementsStatement,
}

impl ConstructKind {
    pub fn idl_type(&self) -> &'static str {
        match self {
            ConstructKind::Interface | ConstructKind::PartialInterface => "interface",
            ConstructKind::Dictionary | ConstructKind::PartialDictionary => "dictionary",
            ConstructKind::Exception => "exception",
            ConstructKind::Enum => "enum",
            ConstructKind::Typedef => "typedef",
            ConstructKind::Callback => "callback",
            ConstructKind::CallbackInterface => "callback-interface",
            ConstructKind::ImplementsStatement => "implements",
        }
    }

    /// Kinds written with a `{ ... }` body
    pub fn has_body(&self) -> bool {
        matches!(
            self,
            ConstructKind::Interface
                | ConstructKind::PartialInterface
                | ConstructKind::Dictionary
                | ConstructKind::PartialDictionary
                | ConstructKind::Exception
                | ConstructKind::Enum
                | ConstructKind::CallbackInterface
        )
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.idl_type())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construct {
    pub kind: ConstructKind,
    pub name: Spanned<String>,
    pub normalized_name: String,
    pub inherits_from: Option<Spanned<String>>,
    /// Legacy multiple inheritance: every parent after the first
    pub additional_parents: Vec<Spanned<String>>,
    /// Right-hand side of an implements/includes statement
    pub implements: Option<Spanned<String>>,
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub members: Vec<Member>,
    pub enum_values: Vec<Spanned<String>>,
    /// Typedef target or callback return type
    pub ty: Option<Type>,
    /// Callback arguments
    pub arguments: Vec<Argument>,
    pub partial: bool,
    pub keywords: Vec<Range<usize>>,
    /// Unparsed text kept inside the construct
    pub junk: Vec<Range<usize>>,
    pub range: Range<usize>,
}

impl Construct {
    pub fn new(kind: ConstructKind, name: Spanned<String>, range: Range<usize>) -> Self {
        let normalized_name = name.value.clone();
        Self {
            kind,
            name,
            normalized_name,
            inherits_from: None,
            additional_parents: Vec::new(),
            implements: None,
            extended_attributes: Vec::new(),
            members: Vec::new(),
            enum_values: Vec::new(),
            ty: None,
            arguments: Vec::new(),
            partial: matches!(
                kind,
                ConstructKind::PartialInterface | ConstructKind::PartialDictionary
            ),
            keywords: Vec::new(),
            junk: Vec::new(),
            range,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn idl_type(&self) -> &'static str {
        self.kind.idl_type()
    }

    pub fn inherits_from(&self) -> Option<&str> {
        self.inherits_from.as_ref().map(|parent| parent.as_str())
    }

    /// Members with the given name, in declaration order
    pub fn members_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Member> + 'a {
        self.members
            .iter()
            .filter(move |member| member.name() == Some(name))
    }

    /// Operations grouped under `name`, in declaration order
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Member> + 'a {
        self.members
            .iter()
            .filter(move |member| member.is_method() && member.method_name() == Some(name))
    }

    pub fn constructors(&self) -> impl Iterator<Item = &ExtendedAttribute> {
        self.extended_attributes
            .iter()
            .filter(|attribute| attribute.is_constructor())
    }
}
