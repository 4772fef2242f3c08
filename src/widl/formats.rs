//! Output formats
//!
//! [`markers`] defines the decorator interface and the markers shipped with
//! the crate, [`markup`] replays a document through one, and [`registry`]
//! names the whole-document renderings the `widl` binary can produce.

pub mod markers;
pub mod markup;
pub mod outline;
pub mod registry;
pub mod text;

pub use markers::{
    HookMarker, HookMarkerBuilder, HtmlMarker, Markup, Marker, MarkupError, NullMarker, SpanKind,
    TagMarker,
};
pub use markup::{markup, markup_symbol};
pub use outline::{outline, OutlineFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use text::{HtmlFormatter, SourceFormatter, TagFormatter};
