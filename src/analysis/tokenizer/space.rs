//! Single-space tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::Result;

const SEPARATOR: char = ' ';

/// A tokenizer that splits text on the ASCII space character only.
///
/// Tabs, punctuation and other whitespace stay inside tokens. Consecutive
/// spaces produce empty tokens, so joining the tokens back with a single
/// space reproduces the input layout. Empty text yields no tokens.
#[derive(Clone, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }

    /// Split `text` into borrowed words without building tokens.
    pub fn split<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        // "".split(' ') would yield one empty word
        let text = if text.is_empty() { None } else { Some(text) };
        text.into_iter().flat_map(|t| t.split(SEPARATOR))
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut start = 0;

        for (position, word) in self.split(text).enumerate() {
            let end = start + word.len();
            tokens.push(Token::with_offsets(word, position, start, end));
            start = end + SEPARATOR.len_utf8();
        }

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "space"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_tokenizer() {
        let tokenizer = SpaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("الطالب يكتب").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "الطالب");
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 12);
        assert_eq!(tokens[1].text, "يكتب");
        assert_eq!(tokens[1].start_offset, 13);
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_tabs_are_not_separators() {
        let tokenizer = SpaceTokenizer::new();
        let words: Vec<&str> = tokenizer.split("a\tb c").collect();
        assert_eq!(words, vec!["a\tb", "c"]);
    }

    #[test]
    fn test_consecutive_spaces_keep_empty_tokens() {
        let tokenizer = SpaceTokenizer::new();
        let words: Vec<&str> = tokenizer.split("a  b").collect();
        assert_eq!(words, vec!["a", "", "b"]);
        assert_eq!(words.join(" "), "a  b");
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = SpaceTokenizer::new();
        assert_eq!(tokenizer.split("").count(), 0);
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SpaceTokenizer::new().name(), "space");
    }
}
