//! Per-run corpus counters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Counters collected while processing a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Lines read from the input, including skipped ones.
    pub lines_read: usize,
    /// Lines written to the output.
    pub lines_written: usize,
    /// Lines skipped by the failure policy, or dropped by the cleaner.
    pub lines_skipped: usize,
    /// Tokens written to the output.
    pub tokens: usize,
    /// Wall-clock time of the run in milliseconds.
    pub duration_ms: u64,
}

impl CorpusStats {
    /// Record the elapsed run time.
    pub fn set_duration(&mut self, elapsed: Duration) {
        self.duration_ms = elapsed.as_millis().try_into().unwrap_or(u64::MAX);
    }

    /// Lines per second, or 0.0 for runs shorter than a millisecond.
    pub fn lines_per_second(&self) -> f64 {
        if self.duration_ms == 0 {
            0.0
        } else {
            self.lines_read as f64 * 1000.0 / self.duration_ms as f64
        }
    }
}
