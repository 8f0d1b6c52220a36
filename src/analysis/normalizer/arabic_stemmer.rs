//! Light rule-based Arabic stemmer.
//!
//! The stemmer works in the ARLSTem style. One pass does orthographic
//! normalization, prefix stripping and pronoun suffix stripping, then the
//! first applicable of plural-to-singular, feminine-to-masculine and verb
//! affix stripping. Passes repeat until the word stops changing, so a stem
//! always stems to itself. It never consults a dictionary, so stems are not
//! guaranteed to be valid words.

use super::{WordNormalizer, check_word, is_diacritic};
use crate::error::Result;

const ALEF: char = '\u{0627}';
const WAW: char = '\u{0648}';
const TEH_MARBUTA: char = '\u{0629}';

/// Article and preposition clusters, checked as (min length, prefixes).
const PREFIXES: &[(usize, &[&str])] = &[
    (6, &["بال", "كال", "فال"]),
    (7, &["فبال", "وبال", "فكال"]),
    (6, &["فلل", "كلل"]),
    (5, &["ال", "لل"]),
];

/// Attached pronouns, longest first, as (min length, suffixes).
const PRONOUN_SUFFIXES: &[(usize, &[&str])] = &[
    (6, &["هما", "كما"]),
    (5, &["ها", "هم", "هن", "كم", "كن", "كي", "نا"]),
    (4, &["ه", "ك"]),
];

const DUAL_FEMININE_SUFFIXES: &[&str] = &["تان", "تين"];
const SOUND_PLURAL_SUFFIXES: &[&str] = &["ان", "ين", "ون"];

const FUTURE_PREFIXES: &[&str] = &["سي", "ست", "سن"];
const PRESENT_PREFIXES: &[char] = &['ي', 'ت', 'ن'];
const VERB_SUFFIXES: &[&str] = &["تم", "تن", "وا"];

/// Rule-based light stemmer for Arabic.
///
/// # Examples
///
/// ```
/// use tasrif::analysis::normalizer::{ArabicStemmer, WordNormalizer};
///
/// let stemmer = ArabicStemmer::new();
/// assert_eq!(stemmer.normalize("المعلمون").unwrap(), "معلم");
/// assert_eq!(stemmer.normalize("يكتب").unwrap(), "كتب");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArabicStemmer;

impl ArabicStemmer {
    /// Create a new stemmer.
    pub fn new() -> Self {
        ArabicStemmer
    }

    /// Stem a word that is already known to be free of control characters.
    pub fn stem(&self, word: &str) -> String {
        let mut current = word.to_string();
        loop {
            // A pass never lengthens the word and its letter mapping is
            // idempotent, so this reaches a fixed point.
            let next = Self::stem_pass(&current);
            if next == current {
                return next;
            }
            current = next;
        }
    }

    fn stem_pass(word: &str) -> String {
        let word = Self::orthographic(word);
        let prefixed = Self::strip_prefix(&word);
        let had_prefix = prefixed.is_some();
        let word = Self::strip_pronoun(prefixed.unwrap_or(&word));

        if let Some(singular) = Self::plural_to_singular(word) {
            return singular;
        }
        if let Some(masculine) = Self::feminine_to_masculine(word) {
            return masculine;
        }
        // Verb affixes come off on the next pass for prefixed words.
        if !had_prefix {
            return Self::strip_verb_affixes(word).to_string();
        }
        word.to_string()
    }

    /// Drop diacritics, unify hamzated alef and alef maqsura, and drop a
    /// conjunction waw from words of more than three letters.
    fn orthographic(word: &str) -> String {
        let normalized: String = word
            .chars()
            .filter(|&c| !is_diacritic(c))
            .map(|c| match c {
                '\u{0622}' | '\u{0623}' | '\u{0625}' => ALEF,
                '\u{0649}' => '\u{064A}',
                c => c,
            })
            .collect();

        match normalized.strip_prefix(WAW) {
            Some(rest) if char_len(&normalized) > 3 => rest.to_string(),
            _ => normalized,
        }
    }

    fn strip_prefix(word: &str) -> Option<&str> {
        let len = char_len(word);
        PREFIXES
            .iter()
            .filter(|(min_len, _)| len >= *min_len)
            .flat_map(|(_, prefixes)| prefixes.iter())
            .find_map(|prefix| word.strip_prefix(prefix))
    }

    fn strip_pronoun(word: &str) -> &str {
        let len = char_len(word);
        PRONOUN_SUFFIXES
            .iter()
            .filter(|(min_len, _)| len >= *min_len)
            .flat_map(|(_, suffixes)| suffixes.iter())
            .find_map(|suffix| word.strip_suffix(suffix))
            .unwrap_or(word)
    }

    fn plural_to_singular(word: &str) -> Option<String> {
        let len = char_len(word);

        if len > 5 {
            if let Some(stem) = strip_any_suffix(word, DUAL_FEMININE_SUFFIXES) {
                return Some(stem.to_string());
            }
            if let Some(stem) = word.strip_suffix("ات") {
                return Some(stem.to_string());
            }
        }
        if len > 4 {
            if let Some(stem) = strip_any_suffix(word, SOUND_PLURAL_SUFFIXES) {
                return Some(stem.to_string());
            }
        }

        // Broken plural pattern afʿāl: اقلام -> قلم
        let chars: Vec<char> = word.chars().collect();
        if chars.len() == 5 && chars[0] == ALEF && chars[3] == ALEF {
            return Some([chars[1], chars[2], chars[4]].iter().collect());
        }

        None
    }

    fn feminine_to_masculine(word: &str) -> Option<String> {
        if char_len(word) > 3 {
            word.strip_suffix(TEH_MARBUTA).map(str::to_string)
        } else {
            None
        }
    }

    fn strip_verb_affixes(word: &str) -> &str {
        let len = char_len(word);

        let word = if len > 4 {
            strip_any_suffix(word, VERB_SUFFIXES).unwrap_or(word)
        } else {
            word
        };

        if char_len(word) >= 5 {
            if let Some(stem) = FUTURE_PREFIXES.iter().find_map(|p| word.strip_prefix(p)) {
                return stem;
            }
        }
        if char_len(word) >= 4 {
            if let Some(stem) = word.strip_prefix(PRESENT_PREFIXES) {
                return stem;
            }
            if let Some(stem) = word.strip_suffix('ت') {
                return stem;
            }
        }

        word
    }
}

impl WordNormalizer for ArabicStemmer {
    fn normalize(&self, word: &str) -> Result<String> {
        check_word(word)?;
        Ok(self.stem(word))
    }

    fn name(&self) -> &'static str {
        "arabic_stemmer"
    }
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}

fn strip_any_suffix<'a>(word: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes.iter().find_map(|suffix| word.strip_suffix(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        ArabicStemmer::new().normalize(word).unwrap()
    }

    #[test]
    fn test_article_prefixes() {
        assert_eq!(stem("الطالب"), "طالب");
        assert_eq!(stem("الكتاب"), "كتاب");
        assert_eq!(stem("فالكتاب"), "كتاب");
        assert_eq!(stem("والكتاب"), "كتاب");
    }

    #[test]
    fn test_feminine_and_plural() {
        assert_eq!(stem("المدرسة"), "مدرس");
        assert_eq!(stem("كتابة"), "كتاب");
        assert_eq!(stem("المعلمون"), "معلم");
        assert_eq!(stem("مكتبات"), "مكتب");
        assert_eq!(stem("اقلام"), "قلم");
    }

    #[test]
    fn test_pronoun_suffixes() {
        assert_eq!(stem("كتبهم"), "كتب");
        assert_eq!(stem("كتابها"), "كتاب");
    }

    #[test]
    fn test_verb_affixes() {
        assert_eq!(stem("يكتب"), "كتب");
        assert_eq!(stem("نكتب"), "كتب");
        assert_eq!(stem("كتبت"), "كتب");
        assert_eq!(stem("سيكتب"), "كتب");
    }

    #[test]
    fn test_plural_verb_forms() {
        assert_eq!(stem("يكتبون"), "كتب");
        assert_eq!(stem("تكتبين"), "كتب");
        assert_eq!(stem("يكتبان"), "كتب");
    }

    #[test]
    fn test_stem_is_its_own_stem() {
        let stemmer = ArabicStemmer::new();
        for word in [
            "يكتبون",
            "الطلاب",
            "التعليم",
            "والمعلمون",
            "سيكتبون",
            "مكتباتهم",
            "المدرسة",
            "تتكلم",
            "أقلام",
        ] {
            let once = stemmer.stem(word);
            assert_eq!(stemmer.stem(&once), once, "{word}");
        }
    }

    #[test]
    fn test_diacritics_and_hamza() {
        assert_eq!(stem("كَتَبَ"), "كتب");
        assert_eq!(stem("أكل"), "اكل");
    }

    #[test]
    fn test_short_words_untouched() {
        assert_eq!(stem("من"), "من");
        assert_eq!(stem("كتب"), "كتب");
        assert_eq!(stem(""), "");
    }

    #[test]
    fn test_deterministic() {
        let stemmer = ArabicStemmer::new();
        for word in ["الطالب", "يكتب", "المدارس", "كتابة"] {
            let first = stemmer.normalize(word).unwrap();
            for _ in 0..3 {
                assert_eq!(stemmer.normalize(word).unwrap(), first);
            }
        }
    }

    #[test]
    fn test_control_character_fails() {
        let err = ArabicStemmer::new().normalize("كتاب\u{0007}").unwrap_err();
        assert!(err.is_line_recoverable());
    }

    #[test]
    fn test_name() {
        assert_eq!(ArabicStemmer::new().name(), "arabic_stemmer");
    }
}
