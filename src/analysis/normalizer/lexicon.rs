//! Lexicon-backed lemmatizer.
//!
//! The lexicon is a tab-separated list of `word<TAB>lemma` pairs, one per
//! line; blank lines and lines starting with `#` are ignored. A small
//! built-in lexicon is always loaded, and files passed to
//! [`LexiconLemmatizer::load_file`] override its entries.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use super::{WordNormalizer, check_word, is_diacritic};
use crate::error::{Result, TasrifError};

const BUILTIN_LEXICON: &str = include_str!("../../../data/lemmas.tsv");

/// Lemmatizer mapping surface forms to dictionary forms.
///
/// Lookups ignore diacritics and tatweel. Unknown words are returned
/// unchanged, or rejected when the lemmatizer is strict.
///
/// # Examples
///
/// ```
/// use tasrif::analysis::normalizer::{LexiconLemmatizer, WordNormalizer};
///
/// let lemmatizer = LexiconLemmatizer::new();
/// assert_eq!(lemmatizer.normalize("الطلاب").unwrap(), "طالب");
/// assert_eq!(lemmatizer.normalize("يَكْتُبُ").unwrap(), "كتب");
///
/// let strict = LexiconLemmatizer::new().strict(true);
/// assert!(strict.normalize("زرافة").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LexiconLemmatizer {
    lemmas: HashMap<String, String>,
    strict: bool,
}

impl LexiconLemmatizer {
    /// Create a lemmatizer holding the built-in lexicon.
    pub fn new() -> Self {
        let mut lemmatizer = Self::empty();
        if let Err(e) = lemmatizer.load_str(BUILTIN_LEXICON) {
            warn!("Built-in lexicon rejected: {e}");
        }
        lemmatizer
    }

    /// Create a lemmatizer with no entries.
    pub fn empty() -> Self {
        LexiconLemmatizer {
            lemmas: HashMap::new(),
            strict: false,
        }
    }

    /// Set whether unknown words are rejected.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Add or replace one entry.
    pub fn insert<W: AsRef<str>, L: Into<String>>(&mut self, word: W, lemma: L) {
        self.lemmas.insert(lookup_key(word.as_ref()), lemma.into());
    }

    /// Merge entries from lexicon text.
    pub fn load_str(&mut self, text: &str) -> Result<usize> {
        let mut count = 0;
        for (index, line) in text.lines().enumerate() {
            if self.load_line(line, index + 1)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Merge entries from a lexicon file.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TasrifError::resource_open(path, e))?;

        let mut count = 0;
        for (index, line) in BufReader::new(file).lines().enumerate() {
            if self.load_line(&line?, index + 1)? {
                count += 1;
            }
        }

        debug!("Loaded {count} lexicon entries from {}", path.display());
        Ok(count)
    }

    fn load_line(&mut self, line: &str, line_number: usize) -> Result<bool> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(false);
        }

        match line.split('\t').collect::<Vec<_>>().as_slice() {
            [word, lemma] if !word.is_empty() && !lemma.is_empty() => {
                self.insert(word.trim(), lemma.trim());
                Ok(true)
            }
            _ => Err(TasrifError::config(format!(
                "lexicon line {line_number}: expected 'word<TAB>lemma', got '{line}'"
            ))),
        }
    }

    /// Look a word up without applying the unknown-word policy.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.lemmas.get(&lookup_key(word)).map(String::as_str)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Default for LexiconLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordNormalizer for LexiconLemmatizer {
    fn normalize(&self, word: &str) -> Result<String> {
        check_word(word)?;

        match self.lookup(word) {
            Some(lemma) => Ok(lemma.to_string()),
            None if self.strict => Err(TasrifError::normalization(word, "not in lexicon")),
            None => Ok(word.to_string()),
        }
    }

    fn name(&self) -> &'static str {
        "lexicon_lemmatizer"
    }
}

fn lookup_key(word: &str) -> String {
    word.chars().filter(|&c| !is_diacritic(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_lexicon() {
        let lemmatizer = LexiconLemmatizer::new();
        assert!(!lemmatizer.is_empty());
        assert_eq!(lemmatizer.lookup("المدارس"), Some("مدرسة"));
        assert_eq!(lemmatizer.normalize("يكتبون").unwrap(), "كتب");
    }

    #[test]
    fn test_builtin_lexicon_parses_cleanly() {
        let count = LexiconLemmatizer::empty().load_str(BUILTIN_LEXICON).unwrap();
        assert_eq!(count, LexiconLemmatizer::new().len());
    }

    #[test]
    fn test_unknown_word_passthrough() {
        let lemmatizer = LexiconLemmatizer::new();
        assert_eq!(lemmatizer.normalize("زرافة").unwrap(), "زرافة");
    }

    #[test]
    fn test_strict_unknown_word() {
        let lemmatizer = LexiconLemmatizer::empty().strict(true);
        let err = lemmatizer.normalize("زرافة").unwrap_err();
        assert!(matches!(err, TasrifError::Normalization { .. }));
    }

    #[test]
    fn test_lookup_ignores_diacritics() {
        let mut lemmatizer = LexiconLemmatizer::empty();
        lemmatizer.insert("مُعَلِّم", "معلم");
        assert_eq!(lemmatizer.lookup("معلم"), Some("معلم"));
    }

    #[test]
    fn test_load_str_skips_comments() {
        let mut lemmatizer = LexiconLemmatizer::empty();
        let count = lemmatizer
            .load_str("# comment\n\nأقلام\tقلم\nقلم\tقلم\n")
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(lemmatizer.len(), 2);
    }

    #[test]
    fn test_malformed_line() {
        let mut lemmatizer = LexiconLemmatizer::empty();
        let err = lemmatizer.load_str("قلم\tقلم\nbroken\n").unwrap_err();
        assert!(err.to_string().contains("lexicon line 2"));
    }

    #[test]
    fn test_file_overrides_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "الطلاب\tطلبة").unwrap();

        let mut lemmatizer = LexiconLemmatizer::new();
        assert_eq!(lemmatizer.load_file(file.path()).unwrap(), 1);
        assert_eq!(lemmatizer.normalize("الطلاب").unwrap(), "طلبة");
    }

    #[test]
    fn test_control_character_fails() {
        assert!(LexiconLemmatizer::new().normalize("\u{001B}").is_err());
    }
}
