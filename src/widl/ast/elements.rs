//! Element types of the WebIDL tree
//!
//! Documents own constructs, constructs own members, and operations and
//! constructor attributes own their arguments. Every element keeps the byte
//! range it was parsed from, along with the ranges of its keywords and of any
//! text inside it the grammar skipped.

pub mod argument;
pub mod construct;
pub mod document;
pub mod extended_attribute;
pub mod member;

pub use argument::Argument;
pub use construct::{Construct, ConstructKind};
pub use document::{Document, Item, ItemKind, TriviaKind};
pub use extended_attribute::{ExtendedAttribute, ExtendedAttributeValue};
pub use member::{Member, MemberKind, Qualifiers, Special};
