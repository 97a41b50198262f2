//! Command implementations for Yomi CLI.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::analyzer::{Analyzer, JapaneseAnalyzer};
use crate::analysis::char_filter::UnicodeNormalizeCharFilter;
use crate::analysis::pos::PosFilter;
use crate::analysis::sentence::SentenceSplitter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::japanese::JapaneseTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::JapaneseTokenizerConfig;
use crate::error::{Result, YomiError};

/// Execute a CLI command.
pub fn execute_command(args: YomiArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args, &args),
        Command::Sentences(sentences_args) => split_sentences(sentences_args, &args),
        Command::CheckTags(check_args) => check_tags(check_args, &args),
    }
}

/// Tokenize a document.
fn tokenize(args: &TokenizeArgs, cli_args: &YomiArgs) -> Result<()> {
    let config = tokenizer_config(args)?;
    let input = read_input(args.input.as_ref())?;

    let start_time = Instant::now();
    let tokens: Vec<Token> = if args.analyzer {
        let mut analyzer = JapaneseAnalyzer::from_config(&config)?;
        if let Some(form) = args.normalize {
            analyzer = analyzer.with_char_filter(Arc::new(UnicodeNormalizeCharFilter::new(form)));
        }
        let text = std::str::from_utf8(&input)
            .map_err(|e| YomiError::analysis(format!("input is not valid UTF-8: {e}")))?;
        analyzer.analyze(text)?.collect()
    } else {
        JapaneseTokenizer::from_config(&config)?.tokenize_bytes(&input)?
    };
    let duration = start_time.elapsed();

    output_result(
        "Tokenized successfully",
        &TokenizeResult {
            tokens,
            input_bytes: input.len(),
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Merge the configuration file, if any, with the command line flags.
///
/// Flags only ever switch options on; they never disable what the file enables.
fn tokenizer_config(args: &TokenizeArgs) -> Result<JapaneseTokenizerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("loading tokenizer configuration from {}", path.display());
            JapaneseTokenizerConfig::from_file(path)?
        }
        None => JapaneseTokenizerConfig::default(),
    };

    if let Some(dict) = args.dict {
        config.dict = Some(dict);
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if args.base_form {
        config.base_form = true;
    }
    if args.stop_tags {
        config.stop_tags = true;
    }
    if let Some(path) = &args.stop_tags_file {
        config.stop_tags = true;
        config.stop_tags_file = Some(path.clone());
    }

    Ok(config)
}

/// Show the sentence boundaries of a document.
fn split_sentences(args: &SentencesArgs, cli_args: &YomiArgs) -> Result<()> {
    let input = read_input(args.input.as_ref())?;
    let text = std::str::from_utf8(&input)
        .map_err(|e| YomiError::analysis(format!("input is not valid UTF-8: {e}")))?;

    let mut splitter =
        SentenceSplitter::default().with_double_line_feed_split(!args.no_double_line_feed);
    if let Some(max_rune_len) = args.max_rune_len {
        splitter = splitter.with_max_rune_len(max_rune_len);
    }

    output_result(
        "Split successfully",
        &SentencesResult {
            sentences: sentence_spans(&splitter, text),
            input_bytes: input.len(),
        },
        cli_args,
    )
}

/// Collect the sentences of `text` with their byte ranges.
pub fn sentence_spans(splitter: &SentenceSplitter, text: &str) -> Vec<SentenceSpan> {
    let mut spans = Vec::new();
    let mut start = 0;

    for sentence in splitter.split(text) {
        spans.push(SentenceSpan {
            start,
            end: start + sentence.len(),
            runes: sentence.chars().count(),
            text: sentence.to_string(),
        });
        start += sentence.len();
    }

    spans
}

/// Validate a POS pattern table and list its patterns.
fn check_tags(args: &CheckTagsArgs, cli_args: &YomiArgs) -> Result<()> {
    let filter = PosFilter::load(&args.file)?;

    output_result(
        &format!("{} is valid", args.file.display()),
        &PatternTableResult {
            path: args.file.to_string_lossy().to_string(),
            patterns: filter.patterns().iter().map(|p| p.to_string()).collect(),
        },
        cli_args,
    )
}

/// Read the whole input from a file, or from stdin when no file is given.
fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            log::debug!("reading input from {}", path.display());
            Ok(fs::read(path)?)
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}
