//! Type references
//!
//! A type is a recursive sum: named types at the leaves, wrapped by nullable,
//! array, sequence, frozen-array and promise nodes, with unions holding any of
//! them as alternatives. Each node owns its children and carries the byte range
//! it covers, plus the ranges of the keywords inside it so the markup engine can
//! decorate them.
//!
//! `Display` renders the canonical form used in normalized names: single spaces
//! between words, no whitespace around punctuation, ` or ` between union
//! alternatives (`sequence<(DOMString[]? or short)>?`).

use std::fmt;
use std::ops::Range;

/// Names that are part of the language rather than user definitions
pub const BUILTIN_TYPES: &[&str] = &[
    "any",
    "bigint",
    "boolean",
    "byte",
    "ByteString",
    "Date",
    "DOMString",
    "double",
    "float",
    "long",
    "object",
    "octet",
    "RegExp",
    "short",
    "symbol",
    "undefined",
    "unrestricted",
    "unsigned",
    "USVString",
    "void",
];

pub fn is_builtin_word(word: &str) -> bool {
    BUILTIN_TYPES.contains(&word)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub kind: TypeKind,
    pub range: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// A single or multi-word name (`Foo`, `unsigned long long`)
    Named {
        name: String,
        words: Vec<Range<usize>>,
        builtin: bool,
    },
    Nullable(Box<Type>),
    Array(Box<Type>),
    Sequence {
        keyword: Range<usize>,
        inner: Box<Type>,
    },
    FrozenArray {
        keyword: Range<usize>,
        inner: Box<Type>,
    },
    Promise {
        keyword: Range<usize>,
        inner: Box<Type>,
    },
    Union {
        alternatives: Vec<Type>,
        /// Ranges of the `or` keywords
        separators: Vec<Range<usize>>,
    },
}

impl Type {
    pub fn new(kind: TypeKind, range: Range<usize>) -> Self {
        Self { kind, range }
    }

    /// Nesting depth; a plain name has depth 1
    pub fn depth(&self) -> usize {
        match &self.kind {
            TypeKind::Named { .. } => 1,
            TypeKind::Nullable(inner) | TypeKind::Array(inner) => 1 + inner.depth(),
            TypeKind::Sequence { inner, .. }
            | TypeKind::FrozenArray { inner, .. }
            | TypeKind::Promise { inner, .. } => 1 + inner.depth(),
            TypeKind::Union { alternatives, .. } => {
                1 + alternatives.iter().map(Type::depth).max().unwrap_or(0)
            }
        }
    }

    /// The name of a named type, looking through nullable wrappers
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Named { name, .. } => Some(name),
            TypeKind::Nullable(inner) => inner.name(),
            _ => None,
        }
    }

    /// Every user-defined (non-builtin) name referenced by this type, in order
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match &self.kind {
            TypeKind::Named { name, builtin, .. } => {
                if !builtin {
                    names.push(name);
                }
            }
            TypeKind::Nullable(inner) | TypeKind::Array(inner) => inner.collect_names(names),
            TypeKind::Sequence { inner, .. }
            | TypeKind::FrozenArray { inner, .. }
            | TypeKind::Promise { inner, .. } => inner.collect_names(names),
            TypeKind::Union { alternatives, .. } => {
                for alternative in alternatives {
                    alternative.collect_names(names);
                }
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Named { name, .. } => write!(f, "{}", name),
            TypeKind::Nullable(inner) => write!(f, "{}?", inner),
            TypeKind::Array(inner) => write!(f, "{}[]", inner),
            TypeKind::Sequence { inner, .. } => write!(f, "sequence<{}>", inner),
            TypeKind::FrozenArray { inner, .. } => write!(f, "FrozenArray<{}>", inner),
            TypeKind::Promise { inner, .. } => write!(f, "Promise<{}>", inner),
            TypeKind::Union { alternatives, .. } => {
                write!(f, "(")?;
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{}", alternative)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Type {
        Type::new(
            TypeKind::Named {
                name: name.to_string(),
                words: vec![0..name.len()],
                builtin: name.split(' ').all(is_builtin_word),
            },
            0..name.len(),
        )
    }

    fn nullable(inner: Type) -> Type {
        Type::new(TypeKind::Nullable(Box::new(inner)), 0..0)
    }

    fn sequence(inner: Type) -> Type {
        Type::new(
            TypeKind::Sequence {
                keyword: 0..8,
                inner: Box::new(inner),
            },
            0..0,
        )
    }

    fn union(alternatives: Vec<Type>) -> Type {
        Type::new(
            TypeKind::Union {
                alternatives,
                separators: Vec::new(),
            },
            0..0,
        )
    }

    #[test]
    fn test_canonical_display() {
        let ty = nullable(sequence(union(vec![
            nullable(Type::new(TypeKind::Array(Box::new(named("DOMString"))), 0..0)),
            named("short"),
        ])));
        assert_eq!(ty.to_string(), "sequence<(DOMString[]? or short)>?");
    }

    #[test]
    fn test_depth() {
        assert_eq!(named("short").depth(), 1);
        assert_eq!(nullable(named("short")).depth(), 2);
        let nested = union(vec![
            named("short"),
            union(vec![named("long"), named("double")]),
        ]);
        assert_eq!(nested.depth(), 3);
    }

    #[test]
    fn test_referenced_names_skip_builtins() {
        let ty = union(vec![
            named("short"),
            sequence(named("Foo")),
            named("unsigned long long"),
        ]);
        assert_eq!(ty.referenced_names(), vec!["Foo"]);
    }

    #[test]
    fn test_name_looks_through_nullable() {
        assert_eq!(nullable(named("ArrayBuffer")).name(), Some("ArrayBuffer"));
        assert_eq!(sequence(named("Foo")).name(), None);
    }
}
