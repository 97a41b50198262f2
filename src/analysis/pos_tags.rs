//! Built-in POS pattern sets.
//!
//! - [`DEFAULT_INFLECTED`]: categories rewritten to their base form when base
//!   form rewriting is enabled (verbs, adjectives, adjectival nouns).
//! - [`STOP_TAGS`]: the embedded IPADIC stop tag table (function words and
//!   punctuation), parsed once on first use.

use std::sync::LazyLock;

use crate::analysis::pos::PosFilter;
use crate::error::{Result, YomiError};

/// POS categories that carry inflected forms.
pub const DEFAULT_INFLECTED: &[&str] = &["動詞", "形容詞", "形容動詞"];

/// The embedded stop tag table.
pub const STOP_TAGS: &str = include_str!("../../assets/stop_tags.txt");

static DEFAULT_STOP_TAGS: LazyLock<std::result::Result<PosFilter, String>> =
    LazyLock::new(|| PosFilter::parse_table(STOP_TAGS).map_err(|e| e.to_string()));

/// Filter matching the inflected categories.
pub fn default_inflected() -> Result<PosFilter> {
    PosFilter::from_patterns(DEFAULT_INFLECTED)
}

/// Filter matching the embedded stop tags.
pub fn default_stop_tags() -> Result<PosFilter> {
    DEFAULT_STOP_TAGS.clone().map_err(YomiError::Configuration)
}
