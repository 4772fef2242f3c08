//! WebIDL tree
//!
//! The parsed representation of a WebIDL fragment. Constructs, members and
//! arguments are plain owned data; [`Document`] ties them to the source text
//! they were parsed from so the text can be reproduced exactly.

pub mod diagnostic;
pub mod elements;
pub mod location;
pub mod node;
pub mod types;

pub use diagnostic::{Diagnostic, Severity};
pub use elements::{
    Argument, Construct, ConstructKind, Document, ExtendedAttribute, ExtendedAttributeValue,
    Item, ItemKind, Member, MemberKind, Qualifiers, Special, TriviaKind,
};
pub use location::{Location, Position, SourceLocation, Spanned};
pub use node::{AstNode, Node, Symbol};
pub use types::{Type, TypeKind};
