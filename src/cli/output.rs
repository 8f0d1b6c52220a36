//! Output formatting for CLI commands.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TasrifArgs};
use crate::corpus::CorpusStats;
use crate::error::Result;

/// Result structure for corpus-level commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusResult {
    pub input: String,
    pub output: String,
    pub normalizer: String,
    #[serde(flatten)]
    pub stats: CorpusStats,
    pub lines_per_second: f64,
}

impl CorpusResult {
    pub fn new(input: &Path, output: &Path, normalizer: &str, stats: CorpusStats) -> Self {
        CorpusResult {
            input: input.display().to_string(),
            output: output.display().to_string(),
            normalizer: normalizer.to_string(),
            lines_per_second: stats.lines_per_second(),
            stats,
        }
    }
}

/// Result structure for single-sentence commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceResult {
    pub sentence: String,
    pub normalized: String,
    pub normalizer: String,
}

/// Result structure for stop-word sorting.
#[derive(Debug, Serialize, Deserialize)]
pub struct StopWordsResult {
    pub path: String,
    pub words: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TasrifArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Print a normalized sentence: the bare text for humans, the full result as JSON.
pub fn output_sentence(result: &SentenceResult, args: &TasrifArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", result.normalized);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TasrifArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in &obj {
                println!("{}: {}", humanize_key(key), format_value(val));
            }
        }
        _ => println!("{}", format_value(&value)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TasrifArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Turn `lines_read` into `Lines read`.
fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{f:.1}"),
            _ => n.to_string(),
        },
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("lines_read"), "Lines read");
        assert_eq!(humanize_key("tokens"), "Tokens");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("كتب")), "كتب");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(12.345)), "12.3");
        assert_eq!(format_value(&json!([1, 2])), "[1, 2]");
        assert_eq!(format_value(&json!(null)), "null");
    }

    #[test]
    fn test_corpus_result_flattens_stats() {
        let stats = CorpusStats {
            lines_read: 4,
            lines_written: 3,
            lines_skipped: 1,
            tokens: 9,
            duration_ms: 0,
        };
        let result = CorpusResult::new(Path::new("in.txt"), Path::new("out.txt"), "arabic_stemmer", stats);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["lines_read"], 4);
        assert_eq!(value["normalizer"], "arabic_stemmer");
        assert_eq!(value["lines_per_second"], 0.0);
    }
}
