//! Testing utilities for the WebIDL parser
//!
//! ## Use the sample corpus
//!
//! Tests should parse the curated files in `samples/` through [`IdlSources`]
//! rather than inventing ad-hoc fragments. The samples cover the real-world
//! grammar (the kitchen sink), a clean modern document, overloads, and
//! deliberately broken input. Small inline fragments are fine for unit tests
//! of a single production.
//!
//! ## Fluent assertions
//!
//! Checking a parsed tree by hand means matching through `Document`,
//! `Construct` and `Member` one field at a time. `assert_idl` chains the
//! checks instead:
//!
//! ```rust-example
//! use crate::widl::testing::{assert_idl, IdlSources};
//!
//! let doc = IdlSources::Overloads.parse();
//! assert_idl(&doc)
//!     .round_trips()
//!     .construct_count(2)
//!     .construct(0, |c| {
//!         c.name("Canvas")
//!             .member_count(7)
//!             .member(0, |m| {
//!                 m.normalized_name("drawImage(CanvasImageSource, unrestricted double, unrestricted double)");
//!             });
//!     });
//! ```
//!
//! Failures name the path that failed (`constructs[0].members[3]`) and
//! summarize the siblings, which is usually enough to see what went wrong.

mod assertions;
mod sources;
pub mod text_diff;

pub use assertions::{assert_idl, ConstructAssertion, DocumentAssertion, MemberAssertion};
pub use sources::IdlSources;
pub use text_diff::{assert_text_eq, diff_text};
