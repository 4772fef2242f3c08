//! Diagnostics collected while parsing
//!
//! Parsing never fails. Anything the grammar could not match is kept in the
//! tree as opaque text and reported here instead.

use super::location::{Location, SourceLocation};
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Text that did not match the grammar and was kept verbatim
    Warning,
    /// Accepted legacy syntax
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub range: Range<usize>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>, range: Range<usize>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            range,
        }
    }

    pub fn note(message: impl Into<String>, range: Range<usize>) -> Self {
        Self {
            severity: Severity::Note,
            message: message.into(),
            range,
        }
    }

    pub fn location(&self, source: &SourceLocation) -> Location {
        source.range_to_location(&self.range)
    }

    /// Render as `line:column: severity: message`, with one-based lines
    pub fn render(&self, source: &SourceLocation) -> String {
        let start = source.byte_to_position(self.range.start);
        format!(
            "{}:{}: {}: {}",
            start.line + 1,
            start.column + 1,
            self.severity,
            self.message
        )
    }
}
