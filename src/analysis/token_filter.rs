//! Token filter implementations for token transformation.
//!
//! Filters transform the token streams produced by tokenizers. The corpus
//! cleaner chains them after tokenization:
//!
//! ```text
//! Tokenizer → Stop Words → Minimum Length → Output
//! ```
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Removes stop words
//! - [`min_length::MinLengthFilter`] - Removes words that are too short
//!
//! # Examples
//!
//! ```
//! use tasrif::analysis::token::Token;
//! use tasrif::analysis::token_filter::Filter;
//! use tasrif::analysis::token_filter::min_length::MinLengthFilter;
//!
//! let filter = MinLengthFilter::new(3);
//! let tokens = vec![Token::new("في", 0), Token::new("البيت", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "البيت");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream, allowing
/// them to modify or drop tokens.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod min_length;
pub mod stop;

pub use min_length::MinLengthFilter;
pub use stop::StopFilter;
