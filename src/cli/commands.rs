//! Command implementations for the Tasrif CLI.

use log::{debug, info};

use crate::analysis::normalizer::build_normalizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{NormalizerKind, TasrifConfig};
use crate::corpus::{CorpusCleaner, CorpusNormalizer, normalize_sentence, sort_stop_words};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: TasrifArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::StemCorpus(corpus_args) => {
            normalize_corpus(NormalizerKind::Stem, corpus_args, None, config, &args)
        }
        Command::LemmatizeCorpus(lemmatize_args) => normalize_corpus(
            NormalizerKind::Lemmatize,
            &lemmatize_args.corpus,
            Some(&lemmatize_args.lexicon),
            config,
            &args,
        ),
        Command::Stem(sentence_args) => {
            normalize_one(NormalizerKind::Stem, &sentence_args.sentence, None, config, &args)
        }
        Command::Lemmatize(lemmatize_args) => normalize_one(
            NormalizerKind::Lemmatize,
            &lemmatize_args.sentence,
            Some(&lemmatize_args.lexicon),
            config,
            &args,
        ),
        Command::Clean(clean_args) => clean_corpus(clean_args, config, &args),
        Command::SortStopWords(sort_args) => sort_stop_word_file(sort_args, &args),
    }
}

/// Load the configuration file, if one was given.
fn load_config(args: &TasrifArgs) -> Result<TasrifConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            TasrifConfig::from_file(path)
        }
        None => Ok(TasrifConfig::default()),
    }
}

/// Normalize a whole corpus file.
fn normalize_corpus(
    kind: NormalizerKind,
    corpus_args: &CorpusArgs,
    lexicon_args: Option<&LexiconArgs>,
    mut config: TasrifConfig,
    cli_args: &TasrifArgs,
) -> Result<()> {
    config.normalizer.kind = kind;
    if let Some(lexicon_args) = lexicon_args {
        lexicon_args.apply(&mut config.normalizer);
    }
    corpus_args.apply(&mut config.pipeline);

    let normalizer = build_normalizer(&config.normalizer)?;
    let name = normalizer.name();
    info!(
        "Normalizing {} with {name} ({:?} on line errors)",
        corpus_args.input.display(),
        config.pipeline.on_line_error
    );

    let pipeline = CorpusNormalizer::new(normalizer, config.pipeline);
    let stats = pipeline.normalize_corpus(&corpus_args.input, &corpus_args.output)?;

    output_result(
        "Corpus normalized successfully",
        &CorpusResult::new(&corpus_args.input, &corpus_args.output, name, stats),
        cli_args,
    )
}

/// Normalize one sentence and print it.
fn normalize_one(
    kind: NormalizerKind,
    sentence: &str,
    lexicon_args: Option<&LexiconArgs>,
    mut config: TasrifConfig,
    cli_args: &TasrifArgs,
) -> Result<()> {
    config.normalizer.kind = kind;
    if let Some(lexicon_args) = lexicon_args {
        lexicon_args.apply(&mut config.normalizer);
    }

    let normalizer = build_normalizer(&config.normalizer)?;
    let normalized = normalize_sentence(sentence, normalizer.as_ref())?;

    output_sentence(
        &SentenceResult {
            sentence: sentence.to_string(),
            normalized,
            normalizer: normalizer.name().to_string(),
        },
        cli_args,
    )
}

/// Clean a raw corpus file.
fn clean_corpus(args: &CleanArgs, mut config: TasrifConfig, cli_args: &TasrifArgs) -> Result<()> {
    args.apply(&mut config.clean);

    let cleaner = CorpusCleaner::new(&config.clean)?;
    let stats = cleaner.clean_corpus(&args.input, &args.output)?;

    output_result(
        "Corpus cleaned successfully",
        &CorpusResult::new(&args.input, &args.output, "arabic_clean", stats),
        cli_args,
    )
}

/// Sort and deduplicate a stop-word file.
fn sort_stop_word_file(args: &SortStopWordsArgs, cli_args: &TasrifArgs) -> Result<()> {
    let words = sort_stop_words(&args.file)?;

    output_result(
        "Stop words sorted successfully",
        &StopWordsResult {
            path: args.file.display().to_string(),
            words,
        },
        cli_args,
    )
}
