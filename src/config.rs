//! Run configuration for the normalization and cleaning pipelines.
//!
//! Configuration can be built in code, loaded from a JSON file with
//! [`TasrifConfig::from_file`], and is finally overridden by CLI flags.
//!
//! ```json
//! {
//!   "normalizer": { "kind": "lemmatize", "lexicon": "data/lemmas.tsv", "strict": false },
//!   "pipeline": { "on_line_error": "skip_line", "keep_line_alignment": true, "progress_interval": 10000 },
//!   "clean": { "stop_words": "data/stop_words.txt", "min_word_chars": 3, "max_repeated_chars": 3 }
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TasrifError};

/// Top-level configuration for a Tasrif run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasrifConfig {
    /// Which normalization capability to build.
    pub normalizer: NormalizerConfig,
    /// Corpus pipeline behaviour.
    pub pipeline: PipelineConfig,
    /// Corpus cleaning behaviour.
    pub clean: CleanConfig,
}

impl TasrifConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TasrifError::resource_open(path, e))?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}

/// The normalization capability variants.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizerKind {
    /// Rule-based light stemming.
    #[default]
    Stem,
    /// Lexicon-backed lemmatization.
    Lemmatize,
    /// Leave words unchanged.
    Identity,
}

/// Configuration of the word normalization capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Which capability to build.
    pub kind: NormalizerKind,
    /// Extra `word<TAB>lemma` lexicon merged over the built-in one.
    pub lexicon: Option<PathBuf>,
    /// Fail on words missing from the lexicon instead of passing them through.
    pub strict: bool,
}

/// What to do when a single line fails to normalize.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnLineError {
    /// Stop the run; lines already written stay in the output.
    #[default]
    Abort,
    /// Log the failure and continue with the next line.
    #[value(name = "skip")]
    SkipLine,
}

/// Configuration of the corpus normalization pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Per-line failure policy.
    pub on_line_error: OnLineError,
    /// Write an empty line in place of a skipped one, keeping output line
    /// `n` aligned with input line `n`.
    pub keep_line_alignment: bool,
    /// Emit a progress report every this many lines (0 disables it).
    pub progress_interval: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            on_line_error: OnLineError::Abort,
            keep_line_alignment: true,
            progress_interval: 10_000,
        }
    }
}

/// Configuration of the corpus cleaner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Stop-word list, one word per line. The built-in list is used when absent.
    pub stop_words: Option<PathBuf>,
    /// Words with fewer characters than this are dropped.
    pub min_word_chars: usize,
    /// Runs of the same character longer than this collapse to one character.
    pub max_repeated_chars: usize,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            stop_words: None,
            min_word_chars: 3,
            max_repeated_chars: 3,
        }
    }
}
