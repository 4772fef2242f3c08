use super::{parse_refer, parse_specref, BiblioEntry, BiblioError};
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

/// Entries grouped by lower-cased key, in load order
#[derive(Debug, Clone, Default)]
pub struct BiblioStore {
    entries: IndexMap<String, Vec<BiblioEntry>>,
}

impl BiblioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: BiblioEntry) {
        self.entries
            .entry(entry.link_text.to_lowercase())
            .or_default()
            .push(entry);
    }

    /// The first entry loaded under `key`, compared case-insensitively
    pub fn lookup(&self, key: &str) -> Option<&BiblioEntry> {
        self.lookup_all(key).first()
    }

    pub fn lookup_all(&self, key: &str) -> &[BiblioEntry] {
        self.entries
            .get(&key.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    /// Lower-cased keys in order of first insertion
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn load_refer(&mut self, text: &str, order: usize) -> usize {
        self.extend(parse_refer(text, order))
    }

    pub fn load_specref(&mut self, text: &str, order: usize) -> Result<usize, BiblioError> {
        Ok(self.extend(parse_specref(text, order)?))
    }

    /// Load a `.json` specref file or any other file as refer text
    pub fn load_file(&mut self, path: &Path, order: usize) -> Result<usize, BiblioError> {
        let text = std::fs::read_to_string(path).map_err(|source| BiblioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let count = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => self.load_specref(&text, order)?,
            _ => self.load_refer(&text, order),
        };
        debug!(target: "widl::biblio", "loaded {} entries from {}", count, path.display());
        Ok(count)
    }

    fn extend(&mut self, entries: Vec<BiblioEntry>) -> usize {
        let count = entries.len();
        for entry in entries {
            self.insert(entry);
        }
        count
    }
}

impl FromIterator<BiblioEntry> for BiblioStore {
    fn from_iter<I: IntoIterator<Item = BiblioEntry>>(iter: I) -> Self {
        let mut store = BiblioStore::new();
        store.extend(iter.into_iter().collect());
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(key: &str, title: &str) -> BiblioEntry {
        BiblioEntry {
            title: Some(title.to_string()),
            ..BiblioEntry::new(key)
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_first_wins() {
        let store: BiblioStore = vec![
            titled("DOM", "First"),
            titled("html", "HTML"),
            titled("dom", "Second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("Dom").and_then(|e| e.title.as_deref()), Some("First"));
        assert_eq!(store.lookup_all("DOM").len(), 2);
        assert!(store.contains("HTML"));
        assert!(store.lookup("css").is_none());
        let keys: Vec<&str> = store.keys().collect();
        assert_eq!(keys, vec!["dom", "html"]);
    }

    #[test]
    fn test_loading() {
        let mut store = BiblioStore::new();
        assert_eq!(store.load_refer("%L A\n%T Alpha\n\n%L B\n%T Beta\n", 0), 2);
        assert_eq!(
            store
                .load_specref(r#"{"C": {"title": "Gamma"}}"#, 1)
                .expect("valid JSON"),
            1
        );
        assert_eq!(store.len(), 3);
        assert_eq!(store.lookup("c").map(|e| e.order), Some(1));
    }

    #[test]
    fn test_missing_file() {
        let mut store = BiblioStore::new();
        let result = store.load_file(Path::new("/nonexistent/biblio.json"), 0);
        assert!(matches!(result, Err(BiblioError::Io { .. })));
    }
}
