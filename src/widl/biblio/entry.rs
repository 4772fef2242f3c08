use crate::widl::formats::markers::escape_html;
use std::fmt;

/// Which URL an entry links to when it has both
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreferredUrl {
    #[default]
    Dated,
    Current,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BiblioEntry {
    pub link_text: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub et_al: bool,
    pub status: Option<String>,
    pub date: Option<String>,
    pub dated_url: Option<String>,
    pub current_url: Option<String>,
    pub other: Option<String>,
    /// Precedence of the file the entry was loaded from
    pub order: usize,
    pub preferred_url: PreferredUrl,
}

impl BiblioEntry {
    pub fn new(link_text: impl Into<String>) -> Self {
        Self {
            link_text: link_text.into(),
            ..Self::default()
        }
    }

    pub fn url(&self) -> Option<&str> {
        let (first, second) = match self.preferred_url {
            PreferredUrl::Dated => (&self.dated_url, &self.current_url),
            PreferredUrl::Current => (&self.current_url, &self.dated_url),
        };
        first.as_deref().or(second.as_deref())
    }

    /// An entry can be rendered once it has a title
    pub fn valid(&self) -> bool {
        self.title.is_some()
    }

    /// `A. `, `A; B. `, or `A; et al. ` past three authors
    fn author_prefix(&self) -> String {
        let mut et_al = self.et_al;
        let names = match self.authors.as_slice() {
            [] => String::new(),
            [one] => one.clone(),
            few if few.len() < 4 => few.join("; "),
            [first, ..] => {
                et_al = true;
                first.clone()
            }
        };
        if names.is_empty() {
            names
        } else if et_al {
            format!("{}; et al. ", names)
        } else {
            format!("{}. ", names)
        }
    }

    /// Date, status and other notes, each with its separator
    fn details(&self) -> String {
        let mut details = String::new();
        for part in [&self.date, &self.status].into_iter().flatten() {
            details.push_str(part);
            details.push_str(". ");
        }
        if let Some(other) = &self.other {
            details.push_str(other);
            details.push(' ');
        }
        details
    }

    pub fn to_html(&self) -> String {
        let title = escape_html(self.title.as_deref().unwrap_or_default());
        let mut html = escape_html(&self.author_prefix());
        match self.url() {
            Some(url) => {
                let url = escape_html(url);
                html.push_str(&format!("<a href=\"{}\">{}</a>. ", url, title));
                html.push_str(&escape_html(&self.details()));
                html.push_str(&format!("URL: <a href=\"{}\">{}</a>", url, url));
            }
            None => {
                html.push_str(&format!("{}. ", title));
                html.push_str(&escape_html(&self.details()));
            }
        }
        html.trim_end().to_string()
    }
}

/// Plain-text citation
impl fmt::Display for BiblioEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = self.author_prefix();
        text.push_str(self.title.as_deref().unwrap_or_default());
        text.push_str(". ");
        text.push_str(&self.details());
        if let Some(url) = self.url() {
            text.push_str("URL: ");
            text.push_str(url);
        }
        f.write_str(text.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(authors: &[&str]) -> BiblioEntry {
        BiblioEntry {
            title: Some("DOM Standard".to_string()),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            ..BiblioEntry::new("DOM")
        }
    }

    #[rstest::rstest]
    #[case::none(&[], "DOM Standard.")]
    #[case::one(&["Anne"], "Anne. DOM Standard.")]
    #[case::three(&["Anne", "Bo", "Cy"], "Anne; Bo; Cy. DOM Standard.")]
    #[case::four(&["Anne", "Bo", "Cy", "Di"], "Anne; et al. DOM Standard.")]
    fn test_author_collapsing(#[case] authors: &[&str], #[case] expected: &str) {
        assert_eq!(entry(authors).to_string(), expected);
    }

    #[test]
    fn test_explicit_et_al() {
        let entry = BiblioEntry {
            et_al: true,
            ..entry(&["Anne", "Bo"])
        };
        assert_eq!(entry.to_string(), "Anne; Bo; et al. DOM Standard.");
    }

    #[test]
    fn test_full_rendering() {
        let entry = BiblioEntry {
            date: Some("1 May 2024".to_string()),
            status: Some("Living Standard".to_string()),
            other: Some("See also <HTML>.".to_string()),
            dated_url: Some("https://example.org/TR/dom-20240501/".to_string()),
            current_url: Some("https://dom.spec.whatwg.org/".to_string()),
            ..entry(&["Anne"])
        };
        assert_eq!(
            entry.to_string(),
            "Anne. DOM Standard. 1 May 2024. Living Standard. See also <HTML>. \
             URL: https://example.org/TR/dom-20240501/"
        );
        assert_eq!(
            entry.to_html(),
            "Anne. <a href=\"https://example.org/TR/dom-20240501/\">DOM Standard</a>. \
             1 May 2024. Living Standard. See also &lt;HTML&gt;. \
             URL: <a href=\"https://example.org/TR/dom-20240501/\">https://example.org/TR/dom-20240501/</a>"
        );
    }

    #[test]
    fn test_preferred_url() {
        let mut entry = BiblioEntry {
            dated_url: Some("dated".to_string()),
            current_url: Some("current".to_string()),
            ..BiblioEntry::new("X")
        };
        assert_eq!(entry.url(), Some("dated"));
        entry.preferred_url = PreferredUrl::Current;
        assert_eq!(entry.url(), Some("current"));
        entry.current_url = None;
        assert_eq!(entry.url(), Some("dated"));
    }

    #[test]
    fn test_validity() {
        assert!(!BiblioEntry::new("X").valid());
        assert!(entry(&[]).valid());
    }
}
