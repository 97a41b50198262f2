//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline, responsible for
//! splitting input text into tokens.
//!
//! # Available Tokenizers
//!
//! - [`japanese::JapaneseTokenizer`] - Sentence-scoped morphological analysis
//!   with POS-based dropping and base form rewriting

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can serve many
/// documents concurrently.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod japanese;
