//! Fluent assertion API for parsed documents

use crate::widl::ast::{Construct, ConstructKind, Document, Member, MemberKind, Severity};
use crate::widl::testing::text_diff::assert_text_eq;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_idl(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize_constructs(constructs: &[Construct]) -> String {
    constructs
        .iter()
        .map(|c| format!("{} {}", c.idl_type(), c.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn summarize_members(members: &[Member]) -> String {
    members
        .iter()
        .map(|m| format!("{} {}", m.idl_type(), m.normalized_name))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the document reproduces its source exactly
    pub fn round_trips(self) -> Self {
        assert_text_eq(self.doc.source(), &self.doc.reconstruct());
        self
    }

    /// Assert the items cover the source without gaps or overlaps
    pub fn items_tile_source(self) -> Self {
        let mut expected_start = 0;
        for (i, item) in self.doc.items().iter().enumerate() {
            assert_eq!(
                item.range.start, expected_start,
                "items[{}] starts at {} but the previous item ended at {}",
                i, item.range.start, expected_start
            );
            assert!(
                item.range.end > item.range.start,
                "items[{}] is empty ({:?})",
                i,
                item.range
            );
            expected_start = item.range.end;
        }
        assert_eq!(
            expected_start,
            self.doc.source().len(),
            "items end at {} but the source is {} bytes",
            expected_start,
            self.doc.source().len()
        );
        self
    }

    pub fn construct_count(self, expected: usize) -> Self {
        let actual = self.doc.constructs().len();
        assert_eq!(
            actual,
            expected,
            "Expected {} constructs, found {}: [{}]",
            expected,
            actual,
            summarize_constructs(self.doc.constructs())
        );
        self
    }

    /// Assert the number of top-level spans that could not be parsed
    pub fn junk_count(self, expected: usize) -> Self {
        let junk: Vec<&str> = self
            .doc
            .items()
            .iter()
            .filter(|item| item.is_junk())
            .map(|item| self.doc.item_text(item))
            .collect();
        assert_eq!(
            junk.len(),
            expected,
            "Expected {} junk items, found {}: {:?}",
            expected,
            junk.len(),
            junk
        );
        self
    }

    pub fn no_warnings(self) -> Self {
        let warnings: Vec<String> = self
            .doc
            .diagnostics()
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| d.render(&self.doc.source_location()))
            .collect();
        assert!(warnings.is_empty(), "Expected no warnings, found {:?}", warnings);
        self
    }

    pub fn has_warnings(self) -> Self {
        assert!(
            self.doc
                .diagnostics()
                .iter()
                .any(|d| d.severity == Severity::Warning),
            "Expected at least one warning"
        );
        self
    }

    /// Assert on a construct by position
    pub fn construct<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ConstructAssertion<'a>),
    {
        let constructs = self.doc.constructs();
        assert!(
            index < constructs.len(),
            "Construct index {} out of bounds (document has {} constructs)",
            index,
            constructs.len()
        );
        assertion(ConstructAssertion {
            construct: &constructs[index],
            context: format!("constructs[{}]", index),
        });
        self
    }

    /// Assert on the first construct with the given name
    pub fn construct_named<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(ConstructAssertion<'a>),
    {
        let construct = self.doc.construct(name).unwrap_or_else(|| {
            panic!(
                "No construct named {:?}: [{}]",
                name,
                summarize_constructs(self.doc.constructs())
            )
        });
        assertion(ConstructAssertion {
            construct,
            context: name.to_string(),
        });
        self
    }
}

// ============================================================================
// Construct Assertions
// ============================================================================

pub struct ConstructAssertion<'a> {
    construct: &'a Construct,
    context: String,
}

impl<'a> ConstructAssertion<'a> {
    pub fn kind(self, expected: ConstructKind) -> Self {
        assert_eq!(
            self.construct.kind, expected,
            "{}: Expected {:?}, found {:?}",
            self.context, expected, self.construct.kind
        );
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.construct.name(),
            expected,
            "{}: Expected name {:?}, found {:?}",
            self.context,
            expected,
            self.construct.name()
        );
        self
    }

    pub fn inherits_from(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.construct.inherits_from(),
            expected,
            "{}: unexpected parent",
            self.context
        );
        self
    }

    pub fn partial(self, expected: bool) -> Self {
        assert_eq!(
            self.construct.partial, expected,
            "{}: Expected partial={}",
            self.context, expected
        );
        self
    }

    /// Assert the canonical form of a typedef's or callback's type
    pub fn type_text(self, expected: &str) -> Self {
        let actual = self.construct.ty.as_ref().map(|ty| ty.to_string());
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "{}: unexpected type",
            self.context
        );
        self
    }

    pub fn extended_attribute_count(self, expected: usize) -> Self {
        let actual = self.construct.extended_attributes.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} extended attributes, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn enum_values(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.construct.enum_values.iter().map(|v| v.as_str()).collect();
        assert_eq!(actual, expected, "{}: unexpected enum values", self.context);
        self
    }

    /// Assert the number of skipped spans inside the construct
    pub fn junk_count(self, expected: usize) -> Self {
        let actual = self.construct.junk.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} junk spans, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn member_count(self, expected: usize) -> Self {
        let actual = self.construct.members.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} members, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_members(&self.construct.members)
        );
        self
    }

    pub fn member<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(MemberAssertion<'a>),
    {
        let members = &self.construct.members;
        assert!(
            index < members.len(),
            "{}: Member index {} out of bounds ({} members)",
            self.context,
            index,
            members.len()
        );
        assertion(MemberAssertion {
            member: &members[index],
            context: format!("{}.members[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Member Assertions
// ============================================================================

pub struct MemberAssertion<'a> {
    member: &'a Member,
    context: String,
}

impl MemberAssertion<'_> {
    pub fn kind(self, expected: MemberKind) -> Self {
        assert_eq!(
            self.member.kind, expected,
            "{}: Expected {:?}, found {:?}",
            self.context, expected, self.member.kind
        );
        self
    }

    pub fn name(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.member.name(),
            expected,
            "{}: unexpected name",
            self.context
        );
        self
    }

    pub fn normalized_name(self, expected: &str) -> Self {
        assert_eq!(
            self.member.normalized_name, expected,
            "{}: unexpected normalized name",
            self.context
        );
        self
    }

    pub fn type_text(self, expected: &str) -> Self {
        let actual = self.member.ty.as_ref().map(|ty| ty.to_string());
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "{}: unexpected type",
            self.context
        );
        self
    }

    pub fn argument_count(self, expected: usize) -> Self {
        let actual = self.member.arguments.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} arguments, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn readonly(self, expected: bool) -> Self {
        assert_eq!(
            self.member.qualifiers.readonly, expected,
            "{}: Expected readonly={}",
            self.context, expected
        );
        self
    }

    pub fn default_text(self, expected: Option<&str>) -> Self {
        let actual = self.member.default.as_ref().map(|d| d.as_str());
        assert_eq!(actual, expected, "{}: unexpected default", self.context);
        self
    }
}
