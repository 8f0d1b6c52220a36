//! Command line argument parsing for the Tasrif CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::{CleanConfig, NormalizerConfig, OnLineError, PipelineConfig};

/// Tasrif - Arabic corpus stemming, lemmatization and cleaning
#[derive(Parser, Debug, Clone)]
#[command(name = "tasrif")]
#[command(about = "Stem, lemmatize and clean Arabic text corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TasrifArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// JSON configuration file; command line flags override its values
    #[arg(long, value_name = "FILE", env = "TASRIF_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TasrifArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log level for tasrif's own messages at the effective verbosity.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem every word of a corpus file
    #[command(name = "stem-corpus")]
    StemCorpus(CorpusArgs),

    /// Lemmatize every word of a corpus file
    #[command(name = "lemmatize-corpus")]
    LemmatizeCorpus(LemmatizeCorpusArgs),

    /// Stem a single sentence and print it
    Stem(SentenceArgs),

    /// Lemmatize a single sentence and print it
    Lemmatize(LemmatizeArgs),

    /// Clean a raw corpus for training
    Clean(CleanArgs),

    /// Deduplicate and sort a stop-word file in place
    #[command(name = "sort-stop-words")]
    SortStopWords(SortStopWordsArgs),
}

/// Arguments shared by the corpus normalization commands
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Input corpus, one unit of text per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output corpus
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// What to do when a line fails to normalize
    #[arg(long = "on-error", value_name = "POLICY")]
    pub on_error: Option<OnLineError>,

    /// Leave skipped lines out of the output instead of writing empty lines
    #[arg(long)]
    pub omit_skipped: bool,

    /// Log progress every N lines (0 disables it)
    #[arg(long, value_name = "N")]
    pub progress_interval: Option<usize>,
}

impl CorpusArgs {
    /// Override pipeline settings given on the command line.
    pub fn apply(&self, config: &mut PipelineConfig) {
        if let Some(policy) = self.on_error {
            config.on_line_error = policy;
        }
        if self.omit_skipped {
            config.keep_line_alignment = false;
        }
        if let Some(interval) = self.progress_interval {
            config.progress_interval = interval;
        }
    }
}

/// Lexicon options for the lemmatizing commands
#[derive(Args, Debug, Clone, Default)]
pub struct LexiconArgs {
    /// Extra `word<TAB>lemma` lexicon merged over the built-in one
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Fail on words missing from the lexicon
    #[arg(long)]
    pub strict: bool,
}

impl LexiconArgs {
    /// Override normalizer settings given on the command line.
    pub fn apply(&self, config: &mut NormalizerConfig) {
        if let Some(lexicon) = &self.lexicon {
            config.lexicon = Some(lexicon.clone());
        }
        if self.strict {
            config.strict = true;
        }
    }
}

/// Arguments for lemmatizing a corpus
#[derive(Args, Debug, Clone)]
pub struct LemmatizeCorpusArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

/// Arguments for stemming a sentence
#[derive(Args, Debug, Clone)]
pub struct SentenceArgs {
    /// Sentence to normalize
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,
}

/// Arguments for lemmatizing a sentence
#[derive(Args, Debug, Clone)]
pub struct LemmatizeArgs {
    /// Sentence to normalize
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

/// Arguments for cleaning a corpus
#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Raw input corpus
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Cleaned output corpus
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Stop-word list, one word per line (default: built-in list)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Drop words shorter than this many characters
    #[arg(long, value_name = "N")]
    pub min_word_chars: Option<usize>,
}

impl CleanArgs {
    /// Override cleaning settings given on the command line.
    pub fn apply(&self, config: &mut CleanConfig) {
        if let Some(stop_words) = &self.stop_words {
            config.stop_words = Some(stop_words.clone());
        }
        if let Some(min) = self.min_word_chars {
            config.min_word_chars = min;
        }
    }
}

/// Arguments for sorting a stop-word file
#[derive(Args, Debug, Clone)]
pub struct SortStopWordsArgs {
    /// Stop-word file to rewrite
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
