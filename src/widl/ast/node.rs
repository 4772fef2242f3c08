//! Uniform access to tree nodes
//!
//! [`Node`] borrows any addressable element; [`Symbol`] is a node together
//! with the elements that own it, which is what lookups return.

use super::elements::{Argument, Construct, ExtendedAttribute, Member};
use std::ops::Range;

/// Common interface for all tree nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    fn range(&self) -> &Range<usize>;
}

impl AstNode for Construct {
    fn node_type(&self) -> &'static str {
        self.idl_type()
    }

    fn display_label(&self) -> String {
        self.normalized_name.clone()
    }

    fn range(&self) -> &Range<usize> {
        &self.range
    }
}

impl AstNode for Member {
    fn node_type(&self) -> &'static str {
        self.idl_type()
    }

    fn display_label(&self) -> String {
        self.normalized_name.clone()
    }

    fn range(&self) -> &Range<usize> {
        &self.range
    }
}

impl AstNode for Argument {
    fn node_type(&self) -> &'static str {
        self.idl_type()
    }

    fn display_label(&self) -> String {
        self.name().to_string()
    }

    fn range(&self) -> &Range<usize> {
        &self.range
    }
}

impl AstNode for ExtendedAttribute {
    fn node_type(&self) -> &'static str {
        "extended-attribute"
    }

    fn display_label(&self) -> String {
        self.label()
    }

    fn range(&self) -> &Range<usize> {
        &self.range
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Construct(&'a Construct),
    Member(&'a Member),
    Argument(&'a Argument),
    ExtendedAttribute(&'a ExtendedAttribute),
}

impl<'a> Node<'a> {
    fn as_ast_node(&self) -> &'a dyn AstNode {
        match *self {
            Node::Construct(construct) => construct,
            Node::Member(member) => member,
            Node::Argument(argument) => argument,
            Node::ExtendedAttribute(attribute) => attribute,
        }
    }

    pub fn idl_type(&self) -> &'static str {
        self.as_ast_node().node_type()
    }

    pub fn range(&self) -> Range<usize> {
        self.as_ast_node().range().clone()
    }

    /// Declared name, if the node has one
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Node::Construct(construct) => Some(construct.name()),
            Node::Member(member) => member.name(),
            Node::Argument(argument) => Some(argument.name()),
            Node::ExtendedAttribute(attribute) => attribute.name(),
        }
    }
}

/// A lookup result: a node plus the construct, member and extended attribute
/// it sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol<'a> {
    pub node: Node<'a>,
    pub construct: &'a Construct,
    pub member: Option<&'a Member>,
    pub attribute: Option<&'a ExtendedAttribute>,
}

impl<'a> Symbol<'a> {
    pub fn construct(construct: &'a Construct) -> Self {
        Self {
            node: Node::Construct(construct),
            construct,
            member: None,
            attribute: None,
        }
    }

    pub fn member(construct: &'a Construct, member: &'a Member) -> Self {
        Self {
            node: Node::Member(member),
            construct,
            member: Some(member),
            attribute: None,
        }
    }

    pub fn attribute(construct: &'a Construct, attribute: &'a ExtendedAttribute) -> Self {
        Self {
            node: Node::ExtendedAttribute(attribute),
            construct,
            member: None,
            attribute: Some(attribute),
        }
    }

    pub fn argument(
        construct: &'a Construct,
        member: Option<&'a Member>,
        attribute: Option<&'a ExtendedAttribute>,
        argument: &'a Argument,
    ) -> Self {
        Self {
            node: Node::Argument(argument),
            construct,
            member,
            attribute,
        }
    }

    pub fn idl_type(&self) -> &'static str {
        self.node.idl_type()
    }

    pub fn name(&self) -> Option<&'a str> {
        self.node.name()
    }

    /// Path-like name: `Construct`, `Construct/member(Types)`,
    /// `Construct/member(Types)/argument`, `Construct(Attr=Value)`,
    /// `Construct(Attr=Value)/argument`
    pub fn full_name(&self) -> String {
        let mut name = self.construct.display_label();
        if let Some(attribute) = self.attribute {
            name = format!("{}({})", name, attribute.display_label());
        }
        if let Some(member) = self.member {
            name = format!("{}/{}", name, member.display_label());
        }
        if let Node::Argument(argument) = self.node {
            name = format!("{}/{}", name, argument.display_label());
        }
        name
    }
}
