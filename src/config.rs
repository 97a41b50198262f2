//! Configuration for the Japanese tokenizer.
//!
//! [`JapaneseTokenizerConfig`] is the typed form of the options a host
//! passes when it builds a tokenizer. It is validated once, at construction;
//! nothing here is consulted on the per-document path.
//!
//! ```
//! use yomi::config::JapaneseTokenizerConfig;
//! use yomi::analysis::morphology::DictionaryKind;
//!
//! let config = JapaneseTokenizerConfig::from_json(
//!     r#"{"dict": "ipa", "base_form": true, "stop_tags": true}"#,
//! ).unwrap();
//!
//! assert_eq!(config.dict, Some(DictionaryKind::Ipadic));
//! assert!(config.filters().unwrap().drop().is_some());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::morphology::{DictionaryKind, SegmentMode};
use crate::analysis::pos::{PosFilter, PosFilterSet};
use crate::analysis::pos_tags;
use crate::analysis::sentence::SentenceSplitterConfig;
use crate::error::{Result, YomiError};

/// Configuration for [`JapaneseTokenizer`](crate::analysis::tokenizer::japanese::JapaneseTokenizer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JapaneseTokenizerConfig {
    /// Dictionary to analyze with (required).
    pub dict: Option<DictionaryKind>,

    /// Segmentation mode of the analyzer.
    pub mode: SegmentMode,

    /// Rewrite inflected words to their base form.
    pub base_form: bool,

    /// POS patterns to rewrite instead of the default inflected categories.
    pub base_form_tags: Option<Vec<String>>,

    /// Drop morphemes whose POS is a stop tag.
    pub stop_tags: bool,

    /// Stop tag table to use instead of the embedded one.
    pub stop_tags_file: Option<PathBuf>,

    /// Sentence splitting.
    pub sentence: SentenceSplitterConfig,
}

impl JapaneseTokenizerConfig {
    /// Create a configuration for the given dictionary with no filters.
    pub fn new(dict: DictionaryKind) -> Self {
        Self {
            dict: Some(dict),
            ..Default::default()
        }
    }

    /// Enable or disable base form rewriting.
    pub fn with_base_form(mut self, enabled: bool) -> Self {
        self.base_form = enabled;
        self
    }

    /// Enable or disable stop tag dropping.
    pub fn with_stop_tags(mut self, enabled: bool) -> Self {
        self.stop_tags = enabled;
        self
    }

    /// Set the segmentation mode.
    pub fn with_mode(mut self, mode: SegmentMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            YomiError::configuration(format!("invalid tokenizer configuration: {e}"))
        })
    }

    /// Read a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Check the configuration and return the selected dictionary.
    pub fn validate(&self) -> Result<DictionaryKind> {
        let dict = self.dict.ok_or_else(|| {
            YomiError::configuration(r#"config requires dict, e.g. "ipadic" or "unidic""#)
        })?;

        if self.sentence.delimiters.is_empty() && self.sentence.max_rune_len == 0 {
            log::warn!("sentence splitting is disabled: no delimiters and no rune limit");
        }
        if self.base_form_tags.is_some() && !self.base_form {
            log::warn!("base_form_tags is set but base_form is disabled");
        }
        if self.stop_tags_file.is_some() && !self.stop_tags {
            log::warn!("stop_tags_file is set but stop_tags is disabled");
        }

        Ok(dict)
    }

    /// Build the POS filters selected by this configuration.
    ///
    /// Pattern tables are read here, once.
    pub fn filters(&self) -> Result<PosFilterSet> {
        let drop = if self.stop_tags {
            Some(match &self.stop_tags_file {
                Some(path) => PosFilter::load(path)?,
                None => pos_tags::default_stop_tags()?,
            })
        } else {
            None
        };

        let rewrite = if self.base_form {
            Some(match &self.base_form_tags {
                Some(tags) => PosFilter::from_patterns(tags)?,
                None => pos_tags::default_inflected()?,
            })
        } else {
            None
        };

        Ok(PosFilterSet::new(drop, rewrite))
    }
}
