//! Operation, callback and constructor arguments

use super::super::location::Spanned;
use super::super::types::Type;
use super::extended_attribute::ExtendedAttribute;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub optional: bool,
    pub variadic: bool,
    pub ty: Type,
    pub name: Spanned<String>,
    /// Default value text, unevaluated
    pub default: Option<Spanned<String>>,
    /// `optional` and `...`
    pub keywords: Vec<Range<usize>>,
    pub range: Range<usize>,
}

impl Argument {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn idl_type(&self) -> &'static str {
        "argument"
    }

    pub fn is_required(&self) -> bool {
        !self.optional && !self.variadic
    }

    /// The canonical type as it appears in normalized names (`T` or `T...`)
    pub fn signature(&self) -> String {
        if self.variadic {
            format!("{}...", self.ty)
        } else {
            self.ty.to_string()
        }
    }
}

/// Join argument signatures into `name(T1, T2)`
pub fn signature_name(name: &str, arguments: &[Argument]) -> String {
    let types: Vec<String> = arguments.iter().map(Argument::signature).collect();
    format!("{}({})", name, types.join(", "))
}
