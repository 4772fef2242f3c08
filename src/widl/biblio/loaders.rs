//! Bibliography file formats
//!
//! Refer text is a sequence of blank-line separated records, one `%X value`
//! field per line:
//!
//! ```text
//! # comment
//! %L DOM
//! %T DOM Standard
//! %A Anne van Kesteren
//! %U https://dom.spec.whatwg.org/
//! ```
//!
//! Specref JSON is an object from key to record. String values are aliases
//! and are skipped, as are records without a title.

use super::{BiblioEntry, BiblioError};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*%?#").expect("valid regex"));
static FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*%(\w)\s+(.*)$").expect("valid regex"));

/// Codes that appear in refer files but carry nothing we render
const UNUSED_REFER_CODES: &str = "BCIJNPRVX";

pub fn parse_refer(text: &str, order: usize) -> Vec<BiblioEntry> {
    let mut entries = Vec::new();
    let mut current: Option<BiblioEntry> = None;

    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            if let Some(entry) = current.take() {
                finish_refer(entry, &mut entries);
            }
            continue;
        }
        if COMMENT.is_match(line) {
            continue;
        }

        let Some(captures) = FIELD.captures(line) else {
            warn!(target: "widl::biblio", line = number + 1, "skipping malformed refer line: {}", line);
            continue;
        };
        let (code, value) = (&captures[1], captures[2].trim_end().to_string());
        let entry = current.get_or_insert_with(|| BiblioEntry {
            order,
            ..BiblioEntry::default()
        });
        match code {
            "U" => entry.dated_url = Some(value),
            "T" => entry.title = Some(value),
            "D" => entry.date = Some(value),
            "S" => entry.status = Some(value),
            "L" => entry.link_text = value,
            "O" => entry.other = Some(value),
            "A" | "Q" => entry.authors.push(value),
            code if UNUSED_REFER_CODES.contains(code) => {}
            code => {
                warn!(target: "widl::biblio", line = number + 1, "unknown refer code %{}", code);
            }
        }
    }
    if let Some(entry) = current {
        finish_refer(entry, &mut entries);
    }
    entries
}

fn finish_refer(entry: BiblioEntry, entries: &mut Vec<BiblioEntry>) {
    if entry.link_text.is_empty() {
        warn!(target: "widl::biblio", "skipping refer record without a %L key");
    } else {
        entries.push(entry);
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SpecrefRecord {
    authors: Vec<String>,
    et_al: bool,
    href: Option<String>,
    ed_draft: Option<String>,
    title: Option<String>,
    date: Option<String>,
    status: Option<String>,
}

pub fn parse_specref(text: &str, order: usize) -> Result<Vec<BiblioEntry>, BiblioError> {
    let records: IndexMap<String, serde_json::Value> = serde_json::from_str(text)?;
    let mut entries = Vec::new();

    for (key, value) in records {
        if value.is_string() {
            debug!(target: "widl::biblio", "skipping alias {}", key);
            continue;
        }
        let record: SpecrefRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(err) => {
                warn!(target: "widl::biblio", "skipping specref entry {}: {}", key, err);
                continue;
            }
        };
        if record.title.is_none() {
            debug!(target: "widl::biblio", "skipping untitled specref entry {}", key);
            continue;
        }
        entries.push(BiblioEntry {
            link_text: key,
            title: record.title,
            authors: record.authors,
            et_al: record.et_al,
            status: record.status,
            date: record.date,
            dated_url: record.href,
            current_url: record.ed_draft,
            order,
            ..BiblioEntry::default()
        });
    }
    Ok(entries)
}
