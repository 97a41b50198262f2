//! Japanese tokenizer built on sentence-scoped morphological analysis.
//!
//! The input is cut into sentences with a [`SentenceSplitter`], each sentence
//! is handed to a [`MorphAnalyzer`], and the returned morphemes are turned
//! into tokens whose offsets and positions refer to the whole document.
//!
//! # Pipeline
//!
//! For every sentence:
//!
//! 1. Analyze the sentence; `L` is the number of morphemes before filtering.
//! 2. Remove morphemes matching the drop filter (stop tags), if any.
//! 3. For each remaining morpheme, `start = base + offset` and
//!    `end = start + len(surface)`. The term is the base form when the rewrite
//!    filter matches and the analyzer supplied one, otherwise `input[start..end]`.
//! 4. The position is `counter + index`.
//! 5. `base` advances by the sentence length and `counter` by `L`, so dropped
//!    morphemes leave gaps in the positions instead of shifting later tokens.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use yomi::analysis::morphology::{MorphAnalyzer, Morpheme};
//! use yomi::analysis::pos::PosFilter;
//! use yomi::analysis::tokenizer::japanese::JapaneseTokenizer;
//! use yomi::error::Result;
//!
//! /// Treats every rune as a noun, except `は` which is a particle.
//! struct RuneAnalyzer;
//!
//! impl MorphAnalyzer for RuneAnalyzer {
//!     fn analyze(&self, sentence: &str) -> Result<Vec<Morpheme>> {
//!         Ok(sentence
//!             .char_indices()
//!             .enumerate()
//!             .map(|(index, (offset, c))| {
//!                 let pos = if c == 'は' { "助詞,係助詞,*,*" } else { "名詞,一般,*,*" };
//!                 let pos = pos.split(',').map(String::from).collect();
//!                 Morpheme::new(c.to_string(), offset, pos, index)
//!             })
//!             .collect())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "rune"
//!     }
//! }
//!
//! let tokenizer = JapaneseTokenizer::new(Arc::new(RuneAnalyzer))
//!     .with_stop_tags(PosFilter::from_patterns(["助詞"]).unwrap());
//! let tokens = tokenizer.tokenize_bytes("私は鰻".as_bytes()).unwrap();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!((tokens[1].text.as_str(), tokens[1].position), ("鰻", 3));
//! assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (6, 9));
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::morphology::{MorphAnalyzer, Morpheme};
use crate::analysis::pos::{PosFilter, PosFilterSet};
use crate::analysis::sentence::SentenceSplitter;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::config::JapaneseTokenizerConfig;
use crate::error::{Result, YomiError};

/// Tokenizer for Japanese text.
///
/// All fields are immutable after construction, so a single instance can be
/// shared between threads. The running offset and position counters live on
/// the stack of each call.
#[derive(Clone)]
pub struct JapaneseTokenizer {
    analyzer: Arc<dyn MorphAnalyzer>,
    splitter: SentenceSplitter,
    filters: PosFilterSet,
}

impl JapaneseTokenizer {
    /// Create a tokenizer with the default sentence splitter and no filters.
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        JapaneseTokenizer {
            analyzer,
            splitter: SentenceSplitter::default(),
            filters: PosFilterSet::None,
        }
    }

    /// Build a tokenizer from its configuration, loading the dictionary.
    pub fn from_config(config: &JapaneseTokenizerConfig) -> Result<Self> {
        let dict = config.validate()?;
        let analyzer = dict.load(config.mode)?;
        let tokenizer = Self::with_config(analyzer, config)?;

        log::info!(
            "japanese tokenizer ready (dict: {}, mode: {}, filters: {})",
            dict,
            config.mode.as_str(),
            tokenizer.filters.name()
        );

        Ok(tokenizer)
    }

    /// Build a tokenizer from its configuration around an existing analyzer.
    ///
    /// The `dict` and `mode` options are not consulted.
    pub fn with_config(
        analyzer: Arc<dyn MorphAnalyzer>,
        config: &JapaneseTokenizerConfig,
    ) -> Result<Self> {
        Ok(JapaneseTokenizer {
            analyzer,
            splitter: SentenceSplitter::new(&config.sentence),
            filters: config.filters()?,
        })
    }

    /// Drop morphemes whose POS matches `filter`.
    pub fn with_stop_tags(mut self, filter: PosFilter) -> Self {
        self.filters = self.filters.with_drop(filter);
        self
    }

    /// Rewrite morphemes whose POS matches `filter` to their base form.
    pub fn with_base_form(mut self, filter: PosFilter) -> Self {
        self.filters = self.filters.with_rewrite(filter);
        self
    }

    /// Replace both POS filters.
    pub fn with_filters(mut self, filters: PosFilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Replace the sentence splitter.
    pub fn with_sentence_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// The configured POS filters.
    pub fn filters(&self) -> &PosFilterSet {
        &self.filters
    }

    /// The morphological analyzer.
    pub fn analyzer(&self) -> &Arc<dyn MorphAnalyzer> {
        &self.analyzer
    }

    /// Tokenize raw document bytes.
    ///
    /// The input must be UTF-8; anything else fails the document with an
    /// analysis error.
    pub fn tokenize_bytes(&self, input: &[u8]) -> Result<Vec<Token>> {
        let text = std::str::from_utf8(input)
            .map_err(|e| YomiError::analysis(format!("input is not valid UTF-8: {e}")))?;
        self.tokenize_str(text)
    }

    /// Tokenize a document.
    ///
    /// Either every sentence is analyzed and all tokens are returned, or the
    /// first failure is returned and no tokens are.
    pub fn tokenize_str(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut base = 0;
        let mut position = 1;
        let mut sentence_count = 0;

        for sentence in self.splitter.split(text) {
            let mut morphemes = self.analyzer.analyze(sentence).inspect_err(|e| {
                log::warn!(
                    "{} analyzer failed on sentence at byte {}: {}",
                    self.analyzer.name(),
                    base,
                    e
                );
            })?;
            let unfiltered = morphemes.len();

            if let Some(drop) = self.filters.drop() {
                drop.drop_matching(&mut morphemes);
            }

            log::trace!(
                "sentence at byte {}: {} morphemes, {} kept",
                base,
                unfiltered,
                morphemes.len()
            );

            for morpheme in morphemes {
                tokens.push(self.assemble(sentence, base, position, unfiltered, morpheme)?);
            }

            base += sentence.len();
            position += unfiltered;
            sentence_count += 1;
        }

        log::debug!(
            "tokenized {} bytes: {} sentences, {} tokens",
            text.len(),
            sentence_count,
            tokens.len()
        );

        Ok(tokens)
    }

    /// Turn one morpheme of the sentence starting at byte `base` into a token.
    fn assemble(
        &self,
        sentence: &str,
        base: usize,
        position: usize,
        unfiltered: usize,
        morpheme: Morpheme,
    ) -> Result<Token> {
        if morpheme.index >= unfiltered {
            return Err(YomiError::analysis(format!(
                "morpheme '{}' has index {} in a sentence of {} morphemes",
                morpheme.surface, morpheme.index, unfiltered
            )));
        }

        let range = morpheme.end().map(|end| morpheme.offset..end);
        let surface = match range.and_then(|range| sentence.get(range)) {
            Some(surface) if !surface.is_empty() => surface,
            _ => {
                return Err(YomiError::analysis(format!(
                    "morpheme '{}' at byte {} does not lie within its sentence of {} bytes",
                    morpheme.surface,
                    morpheme.offset,
                    sentence.len()
                )));
            }
        };

        let start = base + morpheme.offset;
        let end = start + surface.len();

        let rewrite = self
            .filters
            .rewrite()
            .is_some_and(|filter| filter.matches(&morpheme.pos));
        let text = match morpheme.base_form {
            Some(base_form) if rewrite => base_form,
            _ => surface.to_string(),
        };

        Ok(Token::with_offsets(
            text,
            position + morpheme.index,
            start,
            end,
        ))
    }
}

impl Tokenizer for JapaneseTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(self.tokenize_str(text)?.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "japanese"
    }
}

impl Debug for JapaneseTokenizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JapaneseTokenizer")
            .field("analyzer", &self.analyzer.name())
            .field("splitter", &self.splitter)
            .field("filters", &self.filters)
            .finish()
    }
}
