//! Corpus processing: normalization, single sentences, and cleaning.
//!
//! ```text
//! input file → LineReader → words → WordNormalizer → LineWriter → output file
//! ```

pub mod clean;
pub mod io;
pub mod pipeline;
pub mod sentence;
pub mod stats;

pub use clean::{CorpusCleaner, sort_stop_words};
pub use pipeline::{CorpusNormalizer, LogProgress, NoProgress, Progress};
pub use sentence::{normalize_sentence, normalize_words};
pub use stats::CorpusStats;
