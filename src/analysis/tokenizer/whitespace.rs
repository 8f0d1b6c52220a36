//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on any run of Unicode whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut word_start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            match (c.is_whitespace(), word_start) {
                (true, Some(start)) => {
                    tokens.push(Token::with_offsets(
                        &text[start..offset],
                        tokens.len(),
                        start,
                        offset,
                    ));
                    word_start = None;
                }
                (false, None) => word_start = Some(offset),
                _ => {}
            }
        }

        if let Some(start) = word_start {
            tokens.push(Token::with_offsets(
                &text[start..],
                tokens.len(),
                start,
                text.len(),
            ));
        }

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
