//! Bibliography
//!
//! Citation entries keyed by their link text, the loaders for the two data
//! files they come from (refer-format text and specref JSON) and the fuzzy
//! "did you mean" lookup offered when a key is unknown.
//!
//! Keys are compared lower-cased. A key may hold several entries, kept in the
//! order they were loaded, and lookups return the first.

mod entry;
mod loaders;
mod store;
mod suggest;

pub use entry::{BiblioEntry, PreferredUrl};
pub use loaders::{parse_refer, parse_specref};
pub use store::BiblioStore;
pub use suggest::{find_close_keys, find_close_suggestions, levenshtein};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BiblioError {
    #[error("failed to read bibliography file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid specref JSON: {0}")]
    Json(#[from] serde_json::Error),
}
