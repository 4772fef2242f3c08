//! Lookup paths
//!
//! `Name`, `Name.member`, `Name/member/argument`, `Name(selector)`,
//! `Name.method(Type, Type).argument`. `.` and `/` are interchangeable, and
//! separators inside parentheses belong to the segment (`f(a.b)` is one
//! segment).

/// One step of a path: a name and an optional parenthesized selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub name: String,
    pub selector: Option<String>,
}

impl PathSegment {
    fn parse(text: &str) -> Self {
        let text = text.trim();
        if let (Some(open), true) = (text.find('('), text.ends_with(')')) {
            return PathSegment {
                name: text[..open].trim().to_string(),
                selector: Some(text[open + 1..text.len() - 1].trim().to_string()),
            };
        }
        PathSegment {
            name: text.to_string(),
            selector: None,
        }
    }

    /// The segment as a method reference, `name(selector)`
    pub fn as_signature(&self) -> String {
        match &self.selector {
            Some(selector) => format!("{}({})", self.name, selector),
            None => self.name.clone(),
        }
    }
}

/// Split a path into segments; empty segments are dropped
pub fn parse_path(path: &str) -> Vec<PathSegment> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in path.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '.' | '/' if depth == 0 => {
                segments.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&path[start..]);

    segments
        .into_iter()
        .filter(|segment| !segment.trim().is_empty())
        .map(PathSegment::parse)
        .collect()
}
