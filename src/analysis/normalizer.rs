//! Word normalization capabilities: stemming and lemmatization.
//!
//! A [`WordNormalizer`] maps one word to its normalized form. Engines are
//! built once per run with [`build_normalizer`] and shared as an
//! `Arc<dyn WordNormalizer>` by every line the pipeline processes.
//!
//! # Available Normalizers
//!
//! - [`arabic_stemmer::ArabicStemmer`] - Rule-based light stemmer
//! - [`lexicon::LexiconLemmatizer`] - Lexicon-backed lemmatizer
//! - [`identity::IdentityNormalizer`] - Returns words unchanged
//!
//! # Examples
//!
//! ```
//! use tasrif::analysis::normalizer::{WordNormalizer, build_normalizer};
//! use tasrif::config::{NormalizerConfig, NormalizerKind};
//!
//! let config = NormalizerConfig { kind: NormalizerKind::Stem, ..Default::default() };
//! let stemmer = build_normalizer(&config).unwrap();
//!
//! assert_eq!(stemmer.name(), "arabic_stemmer");
//! assert_eq!(stemmer.normalize("الكتاب").unwrap(), "كتاب");
//! ```

use std::sync::Arc;

use log::debug;

use crate::config::{NormalizerConfig, NormalizerKind};
use crate::error::{Result, TasrifError};

/// Trait for word-level normalization engines.
///
/// Implementations must be deterministic: the same word always yields the
/// same normalized form for the lifetime of the engine.
pub trait WordNormalizer: Send + Sync {
    /// Normalize a single word.
    ///
    /// Returns [`TasrifError::Normalization`] when the engine cannot handle
    /// the word.
    fn normalize(&self, word: &str) -> Result<String>;

    /// Get the name of this normalizer.
    fn name(&self) -> &'static str;
}

pub mod arabic_stemmer;
pub mod identity;
pub mod lexicon;

pub use arabic_stemmer::ArabicStemmer;
pub use identity::IdentityNormalizer;
pub use lexicon::LexiconLemmatizer;

/// Build the normalizer selected by `config`.
pub fn build_normalizer(config: &NormalizerConfig) -> Result<Arc<dyn WordNormalizer>> {
    let normalizer: Arc<dyn WordNormalizer> = match config.kind {
        NormalizerKind::Stem => Arc::new(ArabicStemmer::new()),
        NormalizerKind::Lemmatize => {
            let mut lemmatizer = LexiconLemmatizer::new();
            if let Some(path) = &config.lexicon {
                lemmatizer.load_file(path)?;
            }
            Arc::new(lemmatizer.strict(config.strict))
        }
        NormalizerKind::Identity => Arc::new(IdentityNormalizer::new()),
    };

    debug!("Initialized {} normalizer", normalizer.name());
    Ok(normalizer)
}

/// Reject words carrying control characters, which no engine handles.
pub(crate) fn check_word(word: &str) -> Result<()> {
    match word.chars().find(|c| c.is_control()) {
        Some(c) => Err(TasrifError::normalization(
            word,
            format!("unexpected control character U+{:04X}", c as u32),
        )),
        None => Ok(()),
    }
}

/// Whether `c` is an Arabic diacritic (harakat, tanween, shadda, sukun,
/// superscript alef) or tatweel.
pub(crate) fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{0640}')
}
