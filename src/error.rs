//! Error types for the Tasrif library.
//!
//! All errors are represented by the [`TasrifError`] enum. The corpus
//! pipeline distinguishes two families:
//!
//! - errors that end a run no matter what (`ResourceOpen`, `Io`, `Config`)
//! - line-level errors (`Normalization`, `Encoding`) that a pipeline may
//!   recover from, depending on its configured
//!   [`OnLineError`](crate::config::OnLineError) policy
//!
//! # Examples
//!
//! ```
//! use tasrif::error::{Result, TasrifError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TasrifError::normalization("كتب", "unexpected character"))
//! }
//!
//! let err = example_operation().unwrap_err();
//! assert!(err.is_line_recoverable());
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for Tasrif operations.
#[derive(Error, Debug)]
pub enum TasrifError {
    /// A corpus or data file could not be opened or created.
    #[error("Cannot open {}: {source}", path.display())]
    ResourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The normalization capability rejected a word.
    #[error("Normalization error on '{word}': {message}")]
    Normalization { word: String, message: String },

    /// A line could not be decoded as UTF-8.
    #[error("Encoding error on line {line}: {message}")]
    Encoding { line: usize, message: String },

    /// I/O errors while reading or writing a corpus
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TasrifError.
pub type Result<T> = std::result::Result<T, TasrifError>;

impl TasrifError {
    /// Create a resource open error for the given path.
    pub fn resource_open<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        TasrifError::ResourceOpen {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new normalization error.
    pub fn normalization<W: Into<String>, S: Into<String>>(word: W, msg: S) -> Self {
        TasrifError::Normalization {
            word: word.into(),
            message: msg.into(),
        }
    }

    /// Create a new encoding error for a 1-based line number.
    pub fn encoding<S: Into<String>>(line: usize, msg: S) -> Self {
        TasrifError::Encoding {
            line,
            message: msg.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TasrifError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TasrifError::Other(msg.into())
    }

    /// Whether the error is governed by the per-line failure policy.
    ///
    /// Only normalization and encoding failures qualify; everything else
    /// always ends the run.
    pub fn is_line_recoverable(&self) -> bool {
        matches!(
            self,
            TasrifError::Normalization { .. } | TasrifError::Encoding { .. }
        )
    }
}
