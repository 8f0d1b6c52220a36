//! # Tasrif
//!
//! Arabic corpus normalization: light stemming, lexicon lemmatization and
//! corpus cleaning for preparing training data.
//!
//! ## Features
//!
//! - Streaming, order-preserving corpus normalization
//! - Per-line failure policy (abort or skip)
//! - Rule-based Arabic light stemmer
//! - Lexicon-backed lemmatizer with an optional strict mode
//! - Orthographic clean-up, stop-word and short-word removal
//!
//! ```
//! use tasrif::analysis::normalizer::ArabicStemmer;
//! use tasrif::corpus::normalize_sentence;
//!
//! let stemmer = ArabicStemmer::new();
//! assert_eq!(normalize_sentence("المعلمون يكتب", &stemmer).unwrap(), "معلم كتب");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
