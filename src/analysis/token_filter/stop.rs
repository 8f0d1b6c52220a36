//! Stop filter implementation.
//!
//! This module provides a filter that removes common function words (stop
//! words) from the token stream. A default Arabic list is built in; custom
//! lists are read from a file with one word per line.
//!
//! # Examples
//!
//! ```
//! use tasrif::analysis::token::Token;
//! use tasrif::analysis::token_filter::Filter;
//! use tasrif::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("ذهب", 0),
//!     Token::new("إلى", 1),
//!     Token::new("المدرسة", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[1].text, "المدرسة");
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{Result, TasrifError};

const DEFAULT_ARABIC_STOP_WORDS: &str = include_str!("../../../data/stop_words.txt");

/// Default Arabic stop words as a HashSet.
pub static DEFAULT_ARABIC_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| parse_word_list(DEFAULT_ARABIC_STOP_WORDS).collect());

fn parse_word_list(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

/// Read a word list file: one word per line, trimmed, blank lines skipped.
///
/// Words are returned in file order, duplicates included.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| TasrifError::resource_open(path, e))?;
    Ok(parse_word_list(&text).collect())
}

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default Arabic stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ARABIC_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
