//! Name index
//!
//! Built once per document from its constructs. Construct names map to
//! construct positions; every other name (members, operation arguments,
//! constructor-attribute arguments, callback arguments) maps to an
//! [`Address`]. Both maps keep document order within each name, which is what
//! makes "first match" well defined.

use crate::widl::ast::{Construct, Symbol};
use indexmap::IndexMap;

/// Where a named node lives, as positions into the construct list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    Member {
        construct: usize,
        member: usize,
    },
    MemberArgument {
        construct: usize,
        member: usize,
        argument: usize,
    },
    AttributeArgument {
        construct: usize,
        attribute: usize,
        argument: usize,
    },
    CallbackArgument {
        construct: usize,
        argument: usize,
    },
}

impl Address {
    pub fn resolve<'a>(&self, constructs: &'a [Construct]) -> Option<Symbol<'a>> {
        match *self {
            Address::Member { construct, member } => {
                let construct = constructs.get(construct)?;
                Some(Symbol::member(construct, construct.members.get(member)?))
            }
            Address::MemberArgument {
                construct,
                member,
                argument,
            } => {
                let construct = constructs.get(construct)?;
                let member = construct.members.get(member)?;
                let argument = member.arguments.get(argument)?;
                Some(Symbol::argument(construct, Some(member), None, argument))
            }
            Address::AttributeArgument {
                construct,
                attribute,
                argument,
            } => {
                let construct = constructs.get(construct)?;
                let attribute = construct.extended_attributes.get(attribute)?;
                let argument = attribute.arguments().get(argument)?;
                Some(Symbol::argument(construct, None, Some(attribute), argument))
            }
            Address::CallbackArgument {
                construct,
                argument,
            } => {
                let construct = constructs.get(construct)?;
                let argument = construct.arguments.get(argument)?;
                Some(Symbol::argument(construct, None, None, argument))
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    constructs: IndexMap<String, Vec<usize>>,
    symbols: IndexMap<String, Vec<Address>>,
}

impl NameIndex {
    pub fn build(constructs: &[Construct]) -> Self {
        let mut index = NameIndex::default();

        for (c, construct) in constructs.iter().enumerate() {
            index
                .constructs
                .entry(construct.name().to_string())
                .or_default()
                .push(c);

            for (a, attribute) in construct.extended_attributes.iter().enumerate() {
                if !attribute.is_constructor() {
                    continue;
                }
                for (i, argument) in attribute.arguments().iter().enumerate() {
                    index.add(
                        argument.name(),
                        Address::AttributeArgument {
                            construct: c,
                            attribute: a,
                            argument: i,
                        },
                    );
                }
            }

            for (i, argument) in construct.arguments.iter().enumerate() {
                index.add(
                    argument.name(),
                    Address::CallbackArgument {
                        construct: c,
                        argument: i,
                    },
                );
            }

            for (m, member) in construct.members.iter().enumerate() {
                if let Some(name) = member.name() {
                    index.add(name, Address::Member { construct: c, member: m });
                }
                for (i, argument) in member.arguments.iter().enumerate() {
                    index.add(
                        argument.name(),
                        Address::MemberArgument {
                            construct: c,
                            member: m,
                            argument: i,
                        },
                    );
                }
            }
        }
        index
    }

    fn add(&mut self, name: &str, address: Address) {
        self.symbols.entry(name.to_string()).or_default().push(address);
    }

    /// Positions of the constructs called `name`, in document order
    pub fn constructs_named(&self, name: &str) -> &[usize] {
        self.constructs.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Addresses of the members and arguments called `name`, in document order
    pub fn symbols_named(&self, name: &str) -> &[Address] {
        self.symbols.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every construct name, in order of first appearance
    pub fn construct_names(&self) -> impl Iterator<Item = &str> {
        self.constructs.keys().map(String::as_str)
    }
}
