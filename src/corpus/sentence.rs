//! Normalization of a single line of text.

use crate::analysis::normalizer::WordNormalizer;
use crate::analysis::tokenizer::SpaceTokenizer;
use crate::error::Result;

/// Normalize every space-separated word of `text`, in order.
///
/// Empty words (from consecutive spaces) are kept as they are without
/// calling the normalizer. Empty text yields no words.
pub fn normalize_words(text: &str, normalizer: &dyn WordNormalizer) -> Result<Vec<String>> {
    SpaceTokenizer::new()
        .split(text)
        .map(|word| {
            if word.is_empty() {
                Ok(String::new())
            } else {
                normalizer.normalize(word)
            }
        })
        .collect()
}

/// Normalize a sentence and join the results with a single space.
///
/// A trailing `\n` or `\r\n` is ignored. The first normalizer failure is
/// returned as is.
///
/// # Examples
///
/// ```
/// use tasrif::analysis::normalizer::ArabicStemmer;
/// use tasrif::corpus::normalize_sentence;
///
/// let stemmer = ArabicStemmer::new();
/// assert_eq!(normalize_sentence("الطالب يكتب", &stemmer).unwrap(), "طالب كتب");
/// ```
pub fn normalize_sentence(sentence: &str, normalizer: &dyn WordNormalizer) -> Result<String> {
    let sentence = strip_line_terminator(sentence);
    Ok(normalize_words(sentence, normalizer)?.join(" "))
}

pub(crate) fn strip_line_terminator(text: &str) -> &str {
    match text.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::{ArabicStemmer, IdentityNormalizer, LexiconLemmatizer};
    use crate::error::TasrifError;

    #[test]
    fn test_sentence_is_joined_normalized_words() {
        let stemmer = ArabicStemmer::new();
        let expected = format!(
            "{} {}",
            stemmer.normalize("الطالب").unwrap(),
            stemmer.normalize("يكتب").unwrap()
        );

        let result = normalize_sentence("الطالب يكتب", &stemmer).unwrap();
        assert_eq!(result, expected);
        assert!(!result.starts_with(' '));
        assert!(!result.ends_with(' '));
    }

    #[test]
    fn test_lexicon_sentence() {
        let mut lemmatizer = LexiconLemmatizer::empty();
        lemmatizer.insert("كتابة", "كتب");
        lemmatizer.insert("كتب", "كتب");

        assert_eq!(normalize_sentence("كتابة كتب", &lemmatizer).unwrap(), "كتب كتب");
    }

    #[test]
    fn test_empty_sentence() {
        assert_eq!(normalize_sentence("", &IdentityNormalizer::new()).unwrap(), "");
        assert!(normalize_words("", &IdentityNormalizer::new()).unwrap().is_empty());
    }

    #[test]
    fn test_consecutive_spaces_are_preserved() {
        let lemmatizer = LexiconLemmatizer::empty().strict(true);
        // Strict mode would reject an empty word if it were looked up.
        let words = normalize_words(" ", &lemmatizer).unwrap();
        assert_eq!(words, vec!["", ""]);
    }

    #[test]
    fn test_terminator_stripped() {
        let identity = IdentityNormalizer::new();
        assert_eq!(normalize_sentence("كتب قلم\r\n", &identity).unwrap(), "كتب قلم");
        assert_eq!(normalize_sentence("كتب\n", &identity).unwrap(), "كتب");
        assert_eq!(strip_line_terminator("a\r"), "a\r");
    }

    #[test]
    fn test_failure_propagates() {
        let err = normalize_sentence("كتب \u{0007}", &ArabicStemmer::new()).unwrap_err();
        assert!(matches!(err, TasrifError::Normalization { .. }));
    }
}
