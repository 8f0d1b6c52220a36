//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline, splitting input
//! text into tokens.
//!
//! # Available Tokenizers
//!
//! - [`space::SpaceTokenizer`] - Splits on the single ASCII space only
//! - [`whitespace::WhitespaceTokenizer`] - Splits on any run of whitespace
//!
//! # Examples
//!
//! ```
//! use tasrif::analysis::tokenizer::Tokenizer;
//! use tasrif::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("قرأ  الطالب\tالكتاب").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared through an
/// `Arc` by analyzers.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use tasrif::analysis::token::{Token, TokenStream};
/// use tasrif::analysis::tokenizer::Tokenizer;
/// use tasrif::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split('،')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod space;
pub mod whitespace;

pub use space::SpaceTokenizer;
pub use whitespace::WhitespaceTokenizer;
