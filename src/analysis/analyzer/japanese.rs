//! Japanese language analyzer implementation.
//!
//! # Pipeline
//!
//! 1. Optional char filter (typically NFKC normalization)
//! 2. [`JapaneseTokenizer`] (sentence splitting, stop tags, base forms)
//! 3. Japanese stop word filter
//! 4. Lowercase filter
//!
//! # Examples
//!
//! ```no_run
//! use yomi::analysis::analyzer::{Analyzer, JapaneseAnalyzer};
//! use yomi::analysis::morphology::DictionaryKind;
//! use yomi::config::JapaneseTokenizerConfig;
//!
//! let config = JapaneseTokenizerConfig::new(DictionaryKind::Ipadic)
//!     .with_base_form(true)
//!     .with_stop_tags(true);
//! let analyzer = JapaneseAnalyzer::from_config(&config).unwrap();
//!
//! let tokens: Vec<_> = analyzer.analyze("これらは私の猫").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::japanese::JapaneseTokenizer;
use crate::config::JapaneseTokenizerConfig;
use crate::error::Result;

/// Analyzer for Japanese text.
#[derive(Clone)]
pub struct JapaneseAnalyzer {
    char_filter: Option<Arc<dyn CharFilter>>,
    tokenizer: Arc<JapaneseTokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl JapaneseAnalyzer {
    /// Wrap a tokenizer with the default Japanese stop words and lowercasing.
    pub fn new(tokenizer: JapaneseTokenizer) -> Self {
        JapaneseAnalyzer {
            char_filter: None,
            tokenizer: Arc::new(tokenizer),
            filters: vec![
                Arc::new(StopFilter::new()),
                Arc::new(LowercaseFilter::new()),
            ],
        }
    }

    /// Build the tokenizer from its configuration and wrap it.
    pub fn from_config(config: &JapaneseTokenizerConfig) -> Result<Self> {
        Ok(Self::new(JapaneseTokenizer::from_config(config)?))
    }

    /// Normalize the text with `char_filter` before tokenizing.
    pub fn with_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filter = Some(char_filter);
        self
    }

    /// Replace the token filters.
    pub fn with_filters(mut self, filters: Vec<Arc<dyn Filter>>) -> Self {
        self.filters = filters;
        self
    }

    /// The wrapped tokenizer.
    pub fn tokenizer(&self) -> &JapaneseTokenizer {
        &self.tokenizer
    }
}

impl Analyzer for JapaneseAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = match &self.char_filter {
            Some(char_filter) => self.tokenizer.tokenize(&char_filter.filter(text))?,
            None => self.tokenizer.tokenize(text)?,
        };

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "japanese"
    }
}

impl Debug for JapaneseAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JapaneseAnalyzer")
            .field("char_filter", &self.char_filter.as_ref().map(|c| c.name()))
            .field("tokenizer", &self.tokenizer)
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
