//! Command line argument parsing for Yomi CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::NormalizationForm;
use crate::analysis::morphology::{DictionaryKind, SegmentMode};

/// Yomi - Sentence-aware Japanese tokenization for search indexing
#[derive(Parser, Debug, Clone)]
#[command(name = "yomi")]
#[command(about = "Sentence-aware Japanese tokenization for search indexing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct YomiArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl YomiArgs {
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
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize a document
    Tokenize(TokenizeArgs),

    /// Show how a document is split into sentences
    Sentences(SentencesArgs),

    /// Validate a POS pattern table
    #[command(name = "check-tags")]
    CheckTags(CheckTagsArgs),
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Input file (default: stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Tokenizer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Dictionary (ipadic, unidic); needs a build with `--features ipadic` or `unidic`
    #[arg(short, long, env = "YOMI_DICT")]
    pub dict: Option<DictionaryKind>,

    /// Segmentation mode (normal, decompose)
    #[arg(short, long)]
    pub mode: Option<SegmentMode>,

    /// Rewrite inflected words to their base form
    #[arg(long)]
    pub base_form: bool,

    /// Drop function words and symbols by POS
    #[arg(long)]
    pub stop_tags: bool,

    /// Stop tag table to use instead of the built-in one (implies --stop-tags)
    #[arg(long, value_name = "TABLE_FILE")]
    pub stop_tags_file: Option<PathBuf>,

    /// Also apply the stop word and lowercase filters
    #[arg(short, long)]
    pub analyzer: bool,

    /// Unicode normalization applied before tokenizing (with --analyzer)
    #[arg(long, requires = "analyzer")]
    pub normalize: Option<NormalizationForm>,
}

/// Arguments for sentence splitting
#[derive(Parser, Debug, Clone)]
pub struct SentencesArgs {
    /// Input file (default: stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Maximum number of runes in one sentence (0 = unlimited)
    #[arg(long)]
    pub max_rune_len: Option<usize>,

    /// Do not split at blank lines
    #[arg(long)]
    pub no_double_line_feed: bool,
}

/// Arguments for validating a pattern table
#[derive(Parser, Debug, Clone)]
pub struct CheckTagsArgs {
    /// Pattern table file
    #[arg(value_name = "TABLE_FILE")]
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
