//! Complexity factor
//!
//! A rough measure of how much structure a document declares, for
//! diagnostics only. Every construct, member, argument, extended attribute
//! and enum value adds to it, and every type adds its nesting depth. All
//! terms are non-negative, so a document that declares more never scores
//! less.

use crate::widl::ast::{Argument, Construct, Document, ExtendedAttribute, Member, Type};

pub fn complexity_factor(doc: &Document) -> usize {
    doc.constructs().iter().map(construct_weight).sum()
}

fn construct_weight(construct: &Construct) -> usize {
    1 + attributes_weight(&construct.extended_attributes)
        + construct.members.iter().map(member_weight).sum::<usize>()
        + construct.enum_values.len()
        + construct.ty.as_ref().map_or(0, Type::depth)
        + construct.arguments.iter().map(argument_weight).sum::<usize>()
}

fn member_weight(member: &Member) -> usize {
    1 + attributes_weight(&member.extended_attributes)
        + member.ty.as_ref().map_or(0, Type::depth)
        + member.type_arguments.iter().map(Type::depth).sum::<usize>()
        + member.arguments.iter().map(argument_weight).sum::<usize>()
}

fn argument_weight(argument: &Argument) -> usize {
    1 + argument.ty.depth() + attributes_weight(&argument.extended_attributes)
}

fn attributes_weight(attributes: &[ExtendedAttribute]) -> usize {
    attributes
        .iter()
        .map(|attribute| 1 + attribute.arguments().iter().map(argument_weight).sum::<usize>())
        .sum()
}
