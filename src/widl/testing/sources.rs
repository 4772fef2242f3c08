//! Embedded sample corpus

use crate::widl::ast::Document;
use crate::widl::parser::parse;

/// The IDL files under `samples/`, compiled into the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdlSources {
    /// Every construct, legacy form and recovery case the parser handles,
    /// in one file
    KitchenSink,
    /// Modern IDL that parses without a single diagnostic
    WellFormed,
    /// Overloaded operations across two interfaces
    Overloads,
    /// Unterminated bodies, stray tokens, garbled attributes
    Malformed,
}

impl IdlSources {
    pub const ALL: [IdlSources; 4] = [
        IdlSources::KitchenSink,
        IdlSources::WellFormed,
        IdlSources::Overloads,
        IdlSources::Malformed,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            IdlSources::KitchenSink => "kitchen_sink.webidl",
            IdlSources::WellFormed => "well_formed.webidl",
            IdlSources::Overloads => "overloads.webidl",
            IdlSources::Malformed => "malformed.webidl",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            IdlSources::KitchenSink => include_str!("../../../samples/kitchen_sink.webidl"),
            IdlSources::WellFormed => include_str!("../../../samples/well_formed.webidl"),
            IdlSources::Overloads => include_str!("../../../samples/overloads.webidl"),
            IdlSources::Malformed => include_str!("../../../samples/malformed.webidl"),
        }
    }

    pub fn parse(&self) -> Document {
        parse(self.source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sample_is_embedded() {
        for sample in IdlSources::ALL {
            assert!(!sample.source().is_empty(), "{} is empty", sample.file_name());
        }
    }

    #[test]
    fn test_kitchen_sink_keeps_non_ascii_text() {
        let source = IdlSources::KitchenSink.source();
        assert!(source.contains("éß"));
        assert!(source.contains("montøya"));
    }
}
