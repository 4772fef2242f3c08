use super::BiblioStore;

pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Suggestions for an unknown key: every key containing `target`, sorted,
/// then the `n` other keys closest by edit distance. Keys at the same
/// distance keep their store order.
pub fn find_close_suggestions(target: &str, store: &BiblioStore, n: usize) -> Vec<String> {
    find_close_keys(target, store.keys(), n)
}

pub fn find_close_keys<'a>(
    target: &str,
    keys: impl IntoIterator<Item = &'a str>,
    n: usize,
) -> Vec<String> {
    let target = target.to_lowercase();
    let mut containing = Vec::new();
    let mut others = Vec::new();

    for key in keys {
        if key.contains(&target) {
            containing.push(key.trim().to_string());
        } else {
            others.push((key.trim().to_string(), levenshtein(key, &target)));
        }
    }

    containing.sort();
    others.sort_by_key(|&(_, distance)| distance);
    containing.extend(others.into_iter().take(n).map(|(key, _)| key));
    containing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widl::biblio::BiblioEntry;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_substring_matches_come_first() {
        let store: BiblioStore = ["html51", "dom4", "html5"]
            .into_iter()
            .map(BiblioEntry::new)
            .collect();
        assert_eq!(
            find_close_suggestions("HTML", &store, 5),
            vec!["html5", "html51", "dom4"]
        );
        assert_eq!(find_close_suggestions("html", &store, 0), vec!["html5", "html51"]);
    }

    #[test]
    fn test_closest_keys() {
        let keys = ["cssom", "domparsing", "fetch", "dom", "css3"];
        assert_eq!(
            find_close_keys("csso", keys, 3),
            vec!["cssom", "css3", "dom", "fetch"]
        );
    }

    #[test]
    fn test_ties_keep_key_order() {
        assert_eq!(find_close_keys("zz", ["cd", "ab", "ba"], 2), vec!["cd", "ab"]);
    }
}
