//! Minimum length filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that drops tokens shorter than a minimum number of characters.
///
/// Length is counted in characters, not bytes.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_chars: usize,
}

impl MinLengthFilter {
    /// Create a new filter keeping tokens of at least `min_chars` characters.
    pub fn new(min_chars: usize) -> Self {
        MinLengthFilter { min_chars }
    }

    /// Get the minimum length.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens
            .filter(|token| token.char_count() >= self.min_chars)
            .collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_filter() {
        let filter = MinLengthFilter::new(3);
        let tokens = vec![
            Token::new("و", 0),
            Token::new("من", 1),
            Token::new("كتب", 2),
            Token::new("الكتاب", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "كتب");
        assert_eq!(result[1].text, "الكتاب");
    }

    #[test]
    fn test_zero_keeps_everything() {
        let filter = MinLengthFilter::new(0);
        let tokens = vec![Token::new("", 0), Token::new("a", 1)];
        assert_eq!(filter.filter(Box::new(tokens.into_iter())).unwrap().count(), 2);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(MinLengthFilter::new(3).name(), "min_length");
    }
}
