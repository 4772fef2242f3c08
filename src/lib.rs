//! # widl
//!
//! A lossless, error-tolerant parser for the WebIDL interface definition language.
//!
//! Parsing never fails: whatever cannot be matched against the grammar is kept as
//! trivia, so the parsed [`Document`](widl::ast::Document) always reproduces its
//! input byte for byte. On top of the tree the crate offers path lookup, overload
//! normalization, a pluggable markup engine and a diagnostic complexity score.
//!
//! ## Testing
//!
//! Shared assertions and the embedded sample corpus live in the
//! [testing module](widl::testing).

pub mod widl;

pub use widl::ast::{Construct, Document, Member, Symbol};
pub use widl::parser::{parse, Parser};
