//! Outline format
//!
//! One line per construct, `idl-type: normalized name`, followed by one
//! indented line per member, `idl-type: normalized name (name)`. Unnamed
//! members show their keyword name in parentheses instead.

use super::registry::{FormatError, Formatter};
use crate::widl::ast::Document;
use std::fmt::Write;

pub fn outline(doc: &Document) -> String {
    let mut output = String::new();
    for construct in doc.constructs() {
        let _ = writeln!(output, "{}: {}", construct.idl_type(), construct.normalized_name);
        for member in &construct.members {
            let name = member
                .name()
                .or_else(|| member.method_name())
                .unwrap_or("");
            let _ = writeln!(
                output,
                "  {}: {} ({})",
                member.idl_type(),
                member.normalized_name,
                name
            );
        }
    }
    output
}

pub struct OutlineFormatter;

impl Formatter for OutlineFormatter {
    fn name(&self) -> &str {
        "outline"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(outline(doc))
    }

    fn description(&self) -> &str {
        "Constructs and members with their normalized names"
    }
}
