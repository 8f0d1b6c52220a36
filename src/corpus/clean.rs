//! Corpus cleaning for training data preparation.
//!
//! Each line is normalized orthographically, split on whitespace, stripped
//! of stop words and short words, and written back joined by single
//! spaces. Lines left with no words are dropped.

use std::collections::BTreeSet;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use super::io::{LineReader, LineWriter};
use super::stats::CorpusStats;
use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::arabic::arabic_char_filters;
use crate::analysis::char_filter::apply_char_filters;
use crate::analysis::token_filter::stop::{DEFAULT_ARABIC_STOP_WORDS_SET, load_word_list};
use crate::analysis::token_filter::{MinLengthFilter, StopFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::config::CleanConfig;
use crate::error::{Result, TasrifError};

/// Cleans raw Arabic text line by line.
///
/// # Examples
///
/// ```
/// use tasrif::config::CleanConfig;
/// use tasrif::corpus::CorpusCleaner;
///
/// let cleaner = CorpusCleaner::new(&CleanConfig::default()).unwrap();
/// assert_eq!(cleaner.clean_line("ذهبَ الطالبُ إلى المدرسة").unwrap(), "ذهب الطالب المدرسه");
/// ```
#[derive(Debug)]
pub struct CorpusCleaner {
    analyzer: PipelineAnalyzer,
}

impl CorpusCleaner {
    /// Build a cleaner from its configuration.
    pub fn new(config: &CleanConfig) -> Result<Self> {
        let char_filters = arabic_char_filters(config.max_repeated_chars)?;

        let raw_words: Vec<String> = match &config.stop_words {
            Some(path) => load_word_list(path)?,
            None => DEFAULT_ARABIC_STOP_WORDS_SET.iter().cloned().collect(),
        };

        // Stop words must match tokens that went through the same filters.
        let stop_words = raw_words
            .iter()
            .map(|word| apply_char_filters(&char_filters, word).trim().to_string())
            .filter(|word| !word.is_empty());
        let stop_filter = StopFilter::from_words(stop_words);
        debug!("Cleaner using {} stop words", stop_filter.len());

        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filters(char_filters)
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(MinLengthFilter::new(config.min_word_chars)))
            .with_name("arabic_clean");

        Ok(CorpusCleaner { analyzer })
    }

    /// Clean one line; the result is empty when no word survives.
    pub fn clean_line(&self, line: &str) -> Result<String> {
        let words: Vec<String> = self.analyzer.analyze(line)?.map(|token| token.text).collect();
        Ok(words.join(" "))
    }

    /// Clean `input` into `output`.
    pub fn clean_corpus<P, Q>(&self, input: P, output: Q) -> Result<CorpusStats>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let reader = LineReader::open(input)?;
        let writer = LineWriter::create(output)?;
        self.run(reader, writer)
    }

    /// Clean lines from any buffered reader into any writer.
    pub fn clean_stream<R: BufRead, W: Write>(&self, reader: R, writer: W) -> Result<CorpusStats> {
        self.run(LineReader::new(reader), LineWriter::new(writer))
    }

    fn run<R: BufRead, W: Write>(
        &self,
        reader: LineReader<R>,
        mut writer: LineWriter<W>,
    ) -> Result<CorpusStats> {
        let start = Instant::now();
        let mut stats = CorpusStats::default();

        for line in reader {
            let line = line?;
            stats.lines_read += 1;

            let cleaned = self.clean_line(&line.text)?;
            if cleaned.is_empty() {
                stats.lines_skipped += 1;
                continue;
            }

            stats.tokens += cleaned.split(' ').count();
            writer.write_line(&cleaned)?;
        }

        writer.flush()?;
        stats.lines_written = writer.lines_written();
        stats.set_duration(start.elapsed());

        info!(
            "Cleaned {} lines, kept {}, dropped {}",
            stats.lines_read, stats.lines_written, stats.lines_skipped
        );
        Ok(stats)
    }
}

/// Deduplicate and sort a stop-word file in place.
///
/// Returns the number of words kept.
pub fn sort_stop_words<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let words: BTreeSet<String> = load_word_list(path)?.into_iter().collect();

    let mut content = String::new();
    for word in &words {
        content.push_str(word);
        content.push('\n');
    }
    fs::write(path, content).map_err(|e| TasrifError::resource_open(path, e))?;

    debug!("Sorted {} stop words in {}", words.len(), path.display());
    Ok(words.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cleaner() -> CorpusCleaner {
        CorpusCleaner::new(&CleanConfig::default()).unwrap()
    }

    #[test]
    fn test_stop_words_and_short_words_removed() {
        assert_eq!(cleaner().clean_line("ذهب في البيت من").unwrap(), "ذهب البيت");
        assert_eq!(cleaner().clean_line("اب ام").unwrap(), "");
    }

    #[test]
    fn test_stop_words_match_after_normalization() {
        // "إلى" is listed with a hamza; the text is normalized to "الى".
        assert_eq!(cleaner().clean_line("سافر إلى دمشق").unwrap(), "سافر دمشق");
        assert_eq!(cleaner().clean_line("سافر الى دمشق").unwrap(), "سافر دمشق");
    }

    #[test]
    fn test_extended_letters_and_ligatures_kept_as_words() {
        assert_eq!(cleaner().clean_line("\u{06AA}تاب جديد").unwrap(), "كتاب جديد");
        assert_eq!(
            cleaner().clean_line("قال النبي \u{FDFA} اليوم").unwrap(),
            "قال النبي صلى الله وسلم اليوم"
        );
    }

    #[test]
    fn test_custom_stop_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stop.txt");
        fs::write(&path, "دمشق\n").unwrap();

        let config = CleanConfig {
            stop_words: Some(path),
            ..Default::default()
        };
        let cleaner = CorpusCleaner::new(&config).unwrap();
        assert_eq!(cleaner.clean_line("سافر محمد دمشق").unwrap(), "سافر محمد");
    }

    #[test]
    fn test_missing_stop_words_file() {
        let config = CleanConfig {
            stop_words: Some("/nonexistent/stop.txt".into()),
            ..Default::default()
        };
        assert!(matches!(
            CorpusCleaner::new(&config),
            Err(TasrifError::ResourceOpen { .. })
        ));
    }

    #[test]
    fn test_clean_stream_drops_empty_lines() {
        let input = "مرحبا بالعالم 123\nhello world\n\nالطالبُ_المجتهد\n";
        let mut output = Vec::new();
        let stats = cleaner()
            .clean_stream(Cursor::new(input), &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "مرحبا بالعالم\nالطالب المجتهد\n"
        );
        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.lines_written, 2);
        assert_eq!(stats.lines_skipped, 2);
        assert_eq!(stats.tokens, 4);
    }

    #[test]
    fn test_sort_stop_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stop.txt");
        fs::write(&path, "من\nفي\n\nمن\n  على \n").unwrap();

        assert_eq!(sort_stop_words(&path).unwrap(), 3);

        let content = fs::read_to_string(&path).unwrap();
        let words: Vec<&str> = content.lines().collect();
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(words, sorted);
        assert_eq!(words.len(), 3);
    }
}
