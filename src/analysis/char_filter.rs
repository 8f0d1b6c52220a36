//! Char filter implementations for text normalization.
//!
//! Char filters pre-process a whole line before it is passed to the
//! tokenizer. The Arabic orthographic clean-up used by the corpus cleaner
//! is a chain of these filters.
//!
//! # Available Filters
//!
//! - [`mapping::MappingCharFilter`] - Literal string replacement
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`repeated::RepeatedCharFilter`] - Collapses long runs of one character
//! - [`arabic`] - The Arabic orthographic normalization chain
//!
//! # Examples
//!
//! ```
//! use tasrif::analysis::char_filter::CharFilter;
//! use tasrif::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new("\u{0640}", "").unwrap();
//! assert_eq!(filter.filter("كتـــاب"), "كتاب");
//! ```

use std::sync::Arc;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Run `text` through a char filter chain, first filter first.
pub fn apply_char_filters(filters: &[Arc<dyn CharFilter>], text: &str) -> String {
    filters
        .iter()
        .fold(text.to_string(), |acc, filter| filter.filter(&acc))
}

pub mod arabic;
pub mod mapping;
pub mod pattern_replace;
pub mod repeated;

pub use mapping::MappingCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
pub use repeated::RepeatedCharFilter;
