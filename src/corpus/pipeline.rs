//! Line-by-line corpus normalization.
//!
//! [`CorpusNormalizer`] reads a corpus sequentially, normalizes every
//! space-separated word of each line with a shared [`WordNormalizer`], and
//! writes the results in input order. A line whose normalization fails is
//! handled according to the configured [`OnLineError`] policy.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use std::sync::Arc;
//!
//! use tasrif::analysis::normalizer::ArabicStemmer;
//! use tasrif::config::PipelineConfig;
//! use tasrif::corpus::{CorpusNormalizer, NoProgress};
//!
//! let pipeline = CorpusNormalizer::new(Arc::new(ArabicStemmer::new()), PipelineConfig::default());
//!
//! let mut output = Vec::new();
//! let stats = pipeline
//!     .normalize_stream(Cursor::new("الطالب يكتب\n\n"), &mut output, &mut NoProgress)
//!     .unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "طالب كتب\n\n");
//! assert_eq!(stats.lines_written, 2);
//! ```

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};

use super::io::{LineReader, LineWriter};
use super::sentence::normalize_words;
use super::stats::CorpusStats;
use crate::analysis::normalizer::WordNormalizer;
use crate::config::{OnLineError, PipelineConfig};
use crate::error::{Result, TasrifError};

/// Observer notified as lines are processed.
pub trait Progress {
    /// Called after each input line with the number of lines read so far.
    fn on_line(&mut self, lines_read: usize);

    /// Called once when the run completes successfully.
    fn on_finish(&mut self, _stats: &CorpusStats) {}
}

/// Progress observer that reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn on_line(&mut self, _lines_read: usize) {}
}

/// Progress observer that logs every `interval` lines at info level.
#[derive(Debug, Clone)]
pub struct LogProgress {
    interval: usize,
}

impl LogProgress {
    /// Create a logger reporting every `interval` lines; 0 disables it.
    pub fn new(interval: usize) -> Self {
        LogProgress { interval }
    }
}

impl Progress for LogProgress {
    fn on_line(&mut self, lines_read: usize) {
        if self.interval > 0 && lines_read % self.interval == 0 {
            info!("Processed {lines_read} lines");
        }
    }

    fn on_finish(&mut self, stats: &CorpusStats) {
        info!(
            "Finished: {} lines read, {} written, {} skipped in {} ms",
            stats.lines_read, stats.lines_written, stats.lines_skipped, stats.duration_ms
        );
    }
}

/// Sequential corpus normalization pipeline.
pub struct CorpusNormalizer {
    normalizer: Arc<dyn WordNormalizer>,
    config: PipelineConfig,
}

impl CorpusNormalizer {
    /// Create a pipeline around an initialized normalizer.
    pub fn new(normalizer: Arc<dyn WordNormalizer>, config: PipelineConfig) -> Self {
        CorpusNormalizer { normalizer, config }
    }

    /// The pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The shared normalizer.
    pub fn normalizer(&self) -> &Arc<dyn WordNormalizer> {
        &self.normalizer
    }

    /// Normalize `input` into `output`, logging progress at info level.
    ///
    /// The input is opened before the output is created, so a missing input
    /// leaves no output file behind.
    pub fn normalize_corpus<P, Q>(&self, input: P, output: Q) -> Result<CorpusStats>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let mut progress = LogProgress::new(self.config.progress_interval);
        self.normalize_corpus_with_progress(input, output, &mut progress)
    }

    /// Normalize `input` into `output` with a custom progress observer.
    pub fn normalize_corpus_with_progress<P, Q>(
        &self,
        input: P,
        output: Q,
        progress: &mut dyn Progress,
    ) -> Result<CorpusStats>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let (input, output) = (input.as_ref(), output.as_ref());
        let reader = LineReader::open(input)?;
        let writer = LineWriter::create(output)?;

        debug!(
            "Normalizing {} into {} with {}",
            input.display(),
            output.display(),
            self.normalizer.name()
        );

        self.run(reader, writer, progress)
    }

    /// Normalize lines from any buffered reader into any writer.
    pub fn normalize_stream<R, W>(
        &self,
        reader: R,
        writer: W,
        progress: &mut dyn Progress,
    ) -> Result<CorpusStats>
    where
        R: BufRead,
        W: Write,
    {
        self.run(LineReader::new(reader), LineWriter::new(writer), progress)
    }

    fn run<R, W>(
        &self,
        reader: LineReader<R>,
        mut writer: LineWriter<W>,
        progress: &mut dyn Progress,
    ) -> Result<CorpusStats>
    where
        R: BufRead,
        W: Write,
    {
        let start = Instant::now();
        let mut stats = CorpusStats::default();

        for line in reader {
            stats.lines_read += 1;
            let line_number = stats.lines_read;

            let result = line.and_then(|line| {
                normalize_words(&line.text, self.normalizer.as_ref())
                    .map_err(|e| with_line_context(e, line.number, &line.text))
            });

            match result {
                Ok(words) => {
                    writer.write_line(&words.join(" "))?;
                    stats.tokens += words.len();
                }
                Err(e) if e.is_line_recoverable() => match self.config.on_line_error {
                    OnLineError::SkipLine => {
                        warn!("Skipping line {line_number}: {e}");
                        stats.lines_skipped += 1;
                        if self.config.keep_line_alignment {
                            writer.write_line("")?;
                        }
                    }
                    OnLineError::Abort => {
                        writer.flush()?;
                        return Err(e);
                    }
                },
                Err(e) => {
                    writer.flush()?;
                    return Err(e);
                }
            }

            progress.on_line(line_number);
        }

        writer.flush()?;
        stats.lines_written = writer.lines_written();
        stats.set_duration(start.elapsed());
        progress.on_finish(&stats);

        Ok(stats)
    }
}

/// Attach the line number and content to a normalizer failure.
fn with_line_context(error: TasrifError, line_number: usize, text: &str) -> TasrifError {
    match error {
        TasrifError::Normalization { word, message } => TasrifError::Normalization {
            word,
            message: format!("{message} (line {line_number}: '{text}')"),
        },
        other => other,
    }
}

impl std::fmt::Debug for CorpusNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusNormalizer")
            .field("normalizer", &self.normalizer.name())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::{ArabicStemmer, IdentityNormalizer, LexiconLemmatizer};
    use std::io::Cursor;

    fn run(
        normalizer: Arc<dyn WordNormalizer>,
        config: PipelineConfig,
        input: &[u8],
    ) -> (Result<CorpusStats>, String) {
        let pipeline = CorpusNormalizer::new(normalizer, config);
        let mut output = Vec::new();
        let result = pipeline.normalize_stream(Cursor::new(input), &mut output, &mut NoProgress);
        (result, String::from_utf8(output).unwrap())
    }

    fn skip_config(keep_line_alignment: bool) -> PipelineConfig {
        PipelineConfig {
            on_line_error: OnLineError::SkipLine,
            keep_line_alignment,
            ..Default::default()
        }
    }

    struct Recorder {
        seen: Vec<usize>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn on_line(&mut self, lines_read: usize) {
            self.seen.push(lines_read);
        }

        fn on_finish(&mut self, _stats: &CorpusStats) {
            self.finished = true;
        }
    }

    #[test]
    fn test_lexicon_line() {
        let mut lemmatizer = LexiconLemmatizer::empty();
        lemmatizer.insert("كتابة", "كتب");
        lemmatizer.insert("كتب", "كتب");

        let (result, output) = run(
            Arc::new(lemmatizer),
            PipelineConfig::default(),
            "كتابة كتب\n".as_bytes(),
        );
        let stats = result.unwrap();

        assert_eq!(output, "كتب كتب\n");
        assert_eq!(stats.tokens, 2);
    }

    #[test]
    fn test_empty_line_maps_to_empty_line() {
        let (result, output) = run(
            Arc::new(ArabicStemmer::new()),
            PipelineConfig::default(),
            "\nالكتاب\n\n".as_bytes(),
        );
        assert_eq!(output, "\nكتاب\n\n");
        assert_eq!(result.unwrap().lines_written, 3);
    }

    #[test]
    fn test_skip_and_omit() {
        let (result, output) = run(
            Arc::new(ArabicStemmer::new()),
            skip_config(false),
            "الكتاب\nكتب\u{0007}\nالقلم\n".as_bytes(),
        );
        let stats = result.unwrap();

        assert_eq!(output, "كتاب\nقلم\n");
        assert_eq!(stats.lines_read, 3);
        assert_eq!(stats.lines_written, 2);
        assert_eq!(stats.lines_skipped, 1);
    }

    #[test]
    fn test_skip_keeps_alignment() {
        let (result, output) = run(
            Arc::new(ArabicStemmer::new()),
            skip_config(true),
            "الكتاب\nكتب\u{0007}\nالقلم\n".as_bytes(),
        );

        assert_eq!(output, "كتاب\n\nقلم\n");
        assert_eq!(result.unwrap().lines_skipped, 1);
    }

    #[test]
    fn test_abort_keeps_earlier_lines() {
        let (result, output) = run(
            Arc::new(ArabicStemmer::new()),
            PipelineConfig::default(),
            "الكتاب\nكتب\u{0007}\nالقلم\n".as_bytes(),
        );

        let err = result.unwrap_err();
        assert!(matches!(err, TasrifError::Normalization { .. }));
        assert!(err.to_string().contains("line 2"));
        assert_eq!(output, "كتاب\n");
    }

    #[test]
    fn test_error_names_input_line_after_blank_lines() {
        let (result, _) = run(
            Arc::new(ArabicStemmer::new()),
            PipelineConfig::default(),
            "الكتاب\r\n\n\nكتب\u{0007}\n".as_bytes(),
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("(line 4: 'كتب\u{0007}')"), "{err}");
    }

    #[test]
    fn test_invalid_utf8_policy() {
        let input = Vec::from_iter(b"a\n".iter().chain(&[0xc3, 0x28, b'\n']).chain(b"b\n").copied());

        let (result, output) = run(Arc::new(IdentityNormalizer::new()), skip_config(false), &input);
        assert_eq!(output, "a\nb\n");
        assert_eq!(result.unwrap().lines_skipped, 1);

        let (result, output) = run(
            Arc::new(IdentityNormalizer::new()),
            PipelineConfig::default(),
            &input,
        );
        assert!(matches!(result, Err(TasrifError::Encoding { line: 2, .. })));
        assert_eq!(output, "a\n");
    }

    #[test]
    fn test_crlf_and_consecutive_spaces() {
        let (result, output) = run(
            Arc::new(IdentityNormalizer::new()),
            PipelineConfig::default(),
            "أ  ب\r\n".as_bytes(),
        );
        assert_eq!(output, "أ  ب\n");
        assert_eq!(result.unwrap().tokens, 3);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let pipeline =
            CorpusNormalizer::new(Arc::new(IdentityNormalizer::new()), PipelineConfig::default());
        let mut recorder = Recorder {
            seen: Vec::new(),
            finished: false,
        };

        pipeline
            .normalize_stream(Cursor::new("a\nb\nc\n"), Vec::new(), &mut recorder)
            .unwrap();

        assert_eq!(recorder.seen, vec![1, 2, 3]);
        assert!(recorder.finished);
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let pipeline =
            CorpusNormalizer::new(Arc::new(ArabicStemmer::new()), PipelineConfig::default());

        let err = pipeline
            .normalize_corpus(dir.path().join("missing.txt"), &output)
            .unwrap_err();

        assert!(matches!(err, TasrifError::ResourceOpen { .. }));
        assert!(!output.exists());
    }
}
