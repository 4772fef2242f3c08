//! Line-based text comparison
//!
//! Reconstruction and markup tests compare whole documents; a plain
//! `assert_eq!` on two kilobytes of IDL is unreadable, so these report the
//! differing lines instead.

/// Assert two texts are equal, panicking with a per-line report otherwise
pub fn assert_text_eq(expected: &str, actual: &str) {
    if let Some(report) = diff_text(expected, actual) {
        panic!("\n\nText comparison failed:\n{}\n", report);
    }
}

/// Describe how `actual` differs from `expected`, or `None` if they are equal
pub fn diff_text(expected: &str, actual: &str) -> Option<String> {
    if expected == actual {
        return None;
    }

    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let mut report = Vec::new();

    for i in 0..expected_lines.len().max(actual_lines.len()) {
        match (expected_lines.get(i), actual_lines.get(i)) {
            (Some(exp), Some(act)) if exp == act => {}
            (Some(exp), Some(act)) => {
                report.push(format!("Line {}: MISMATCH", i + 1));
                report.push(format!("  < {exp:?}"));
                report.push(format!("  > {act:?}"));
            }
            (Some(exp), None) => {
                report.push(format!("Line {}: MISSING in actual", i + 1));
                report.push(format!("  < {exp:?}"));
            }
            (None, Some(act)) => {
                report.push(format!("Line {}: EXTRA in actual", i + 1));
                report.push(format!("  > {act:?}"));
            }
            (None, None) => unreachable!(),
        }
    }

    // Same lines, different bytes: only a trailing newline can do that
    if report.is_empty() {
        report.push("Texts differ only in line endings".to_string());
    }

    Some(format!(
        "{}\n\nExpected ({} bytes), actual ({} bytes)",
        report.join("\n"),
        expected.len(),
        actual.len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        assert_text_eq("interface A {};\n", "interface A {};\n");
        assert_eq!(diff_text("", ""), None);
    }

    #[test]
    #[should_panic(expected = "Text comparison failed")]
    fn test_different_texts_panic() {
        assert_text_eq("interface A {};", "interface B {};");
    }

    #[test]
    fn test_report_names_lines() {
        let report = diff_text("a\nb\nc", "a\nB").expect("texts differ");
        assert!(report.contains("Line 2: MISMATCH"));
        assert!(report.contains("Line 3: MISSING in actual"));

        let report = diff_text("a", "a\nextra").expect("texts differ");
        assert!(report.contains("Line 2: EXTRA in actual"));
    }

    #[test]
    fn test_trailing_newline_is_reported() {
        let report = diff_text("a\n", "a").expect("texts differ");
        assert!(report.contains("MISSING"));
    }
}
