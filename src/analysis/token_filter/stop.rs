//! Stop word filter.
//!
//! Removes tokens whose term is a stop word. The default list contains
//! frequent Japanese function words; since the Japanese tokenizer emits base
//! forms for inflected words, listing the base form covers every inflection.
//! Removing a token leaves its position unused, like dropped stop tags.
//!
//! # Examples
//!
//! ```
//! use yomi::analysis::token::Token;
//! use yomi::analysis::token_filter::Filter;
//! use yomi::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![Token::new("これら", 1), Token::new("私", 3), Token::new("猫", 5)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!((result[0].text.as_str(), result[0].position), ("私", 3));
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// The embedded Japanese stop word list.
pub const JAPANESE_STOP_WORDS: &str = include_str!("../../../assets/stop_words.txt");

/// Default Japanese stop words as a HashSet.
pub static DEFAULT_JAPANESE_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> =
    LazyLock::new(|| Arc::new(parse_word_list(JAPANESE_STOP_WORDS)));

/// Parse a word list: one word per line, blank lines and `#` comments ignored.
pub fn parse_word_list(list: &str) -> HashSet<String> {
    list.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// A filter that removes stop words from the token stream.
///
/// Keyword tokens are never removed.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default Japanese stop words.
    pub fn new() -> Self {
        StopFilter {
            stop_words: Arc::clone(&DEFAULT_JAPANESE_STOP_WORDS_SET),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: Arc::new(words.into_iter().map(|s| s.into()).collect()),
        }
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.keyword || !self.is_stop_word(&token.text))
            .collect();

        Ok(filtered_tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
