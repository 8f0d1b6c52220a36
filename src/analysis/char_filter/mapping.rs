use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashMap;

use super::CharFilter;
use crate::error::{Result, TasrifError};

/// A char filter that replaces literal strings, longest match first.
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    pub fn new(mapping: HashMap<String, String>) -> Result<Self> {
        Self::from_pairs(mapping)
    }

    /// Build the filter from `(pattern, replacement)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut keys = Vec::new();
        let mut replacements = Vec::new();

        for (k, v) in pairs {
            keys.push(k.into());
            replacements.push(v.into());
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| TasrifError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

impl std::fmt::Debug for MappingCharFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingCharFilter")
            .field("patterns", &self.replacements.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_char_filter() {
        let mut mapping = HashMap::new();
        mapping.insert("أ".to_string(), "ا".to_string());
        mapping.insert("ة".to_string(), "ه".to_string());

        let filter = MappingCharFilter::new(mapping).unwrap();
        assert_eq!(filter.filter("أسامة"), "اسامه");
    }

    #[test]
    fn test_mapping_deletion() {
        let filter = MappingCharFilter::from_pairs([("\u{0640}", "")]).unwrap();
        assert_eq!(filter.filter("جمـــيل"), "جميل");
    }

    #[test]
    fn test_mapping_overlap() {
        let filter = MappingCharFilter::from_pairs([("ab", "1"), ("abc", "2")]).unwrap();
        assert_eq!(filter.filter("abcab"), "21");
    }
}
