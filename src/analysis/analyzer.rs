//! Analyzers: a tokenizer together with the filters applied around it.
//!
//! An analyzer is what a host index calls for every text field. It runs
//! char filters over the raw text, tokenizes the result and passes the tokens
//! through token filters.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that turn text into an indexable token stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod japanese;

pub use japanese::JapaneseAnalyzer;
