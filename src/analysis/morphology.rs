//! Morphological analysis interface.
//!
//! The Japanese tokenizer does not segment text itself. It hands each
//! sentence to a [`MorphAnalyzer`] and works with the returned [`Morpheme`]s.
//! The concrete engine lives behind this trait so it can be swapped, and
//! replaced with fixtures in tests.
//!
//! Dictionary-backed analyzers are selected through the closed
//! [`DictionaryKind`] enumeration. With the `lindera` feature enabled,
//! [`DictionaryKind::load`] builds a `LinderaAnalyzer` on one of
//! the embedded dictionaries (`ipadic` and `unidic` features).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, YomiError};

#[cfg(feature = "lindera")]
pub mod lindera;

/// A morpheme produced by analyzing one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// Surface form as it appears in the sentence
    pub surface: String,

    /// Byte offset of the surface within the sentence
    pub offset: usize,

    /// POS hierarchy, coarse to fine (at most four levels are meaningful)
    pub pos: Vec<String>,

    /// Dictionary form, if the analyzer knows one
    pub base_form: Option<String>,

    /// 0-based sequence number within the sentence
    pub index: usize,
}

impl Morpheme {
    /// Create a morpheme without a base form.
    pub fn new<S: Into<String>>(surface: S, offset: usize, pos: Vec<String>, index: usize) -> Self {
        Morpheme {
            surface: surface.into(),
            offset,
            pos,
            base_form: None,
            index,
        }
    }

    /// Set the base form.
    pub fn with_base_form<S: Into<String>>(mut self, base_form: S) -> Self {
        self.base_form = Some(base_form.into());
        self
    }

    /// Byte offset just past the surface within the sentence, or `None` if
    /// it does not fit in a `usize`.
    pub fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.surface.len())
    }
}

/// Trait for morphological analyzers.
///
/// `analyze` receives one sentence and returns its morphemes in order, with
/// offsets relative to the sentence and indices starting at 0. It is called
/// concurrently from many documents, so implementations must be usable through
/// a shared reference.
pub trait MorphAnalyzer: Send + Sync {
    /// Analyze a single sentence.
    fn analyze(&self, sentence: &str) -> Result<Vec<Morpheme>>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Segmentation mode of dictionary-backed analyzers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentMode {
    /// Plain lattice segmentation.
    Normal,
    /// Penalize long compounds so they are decomposed into shorter words.
    #[default]
    Decompose,
}

impl SegmentMode {
    /// The mode name as understood by the segmenter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentMode::Normal => "normal",
            SegmentMode::Decompose => "decompose",
        }
    }
}

impl FromStr for SegmentMode {
    type Err = YomiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "normal" => Ok(SegmentMode::Normal),
            "decompose" | "search" => Ok(SegmentMode::Decompose),
            other => Err(YomiError::configuration(format!(
                "unsupported segment mode: {other}"
            ))),
        }
    }
}

/// The dictionaries a tokenizer can be built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DictionaryKind {
    /// IPADIC (MeCab IPA dictionary).
    Ipadic,
    /// UniDic.
    Unidic,
}

impl DictionaryKind {
    /// All supported dictionaries.
    pub const ALL: [DictionaryKind; 2] = [DictionaryKind::Ipadic, DictionaryKind::Unidic];

    /// Canonical identifier of the dictionary.
    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryKind::Ipadic => "ipadic",
            DictionaryKind::Unidic => "unidic",
        }
    }

    /// Index of the base form in the dictionary's feature fields.
    pub fn base_form_field(&self) -> usize {
        match self {
            DictionaryKind::Ipadic => 6,
            DictionaryKind::Unidic => 7,
        }
    }

    /// Build an analyzer on this dictionary.
    pub fn load(self, mode: SegmentMode) -> Result<Arc<dyn MorphAnalyzer>> {
        let loader: fn(SegmentMode) -> Result<Arc<dyn MorphAnalyzer>> = match self {
            DictionaryKind::Ipadic => load_ipadic,
            DictionaryKind::Unidic => load_unidic,
        };
        loader(mode)
    }
}

impl FromStr for DictionaryKind {
    type Err = YomiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ipadic" | "ipa" => Ok(DictionaryKind::Ipadic),
            "unidic" | "uni" => Ok(DictionaryKind::Unidic),
            other => Err(YomiError::configuration(format!(
                "unsupported dictionary: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for DictionaryKind {
    type Error = YomiError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "lindera")]
fn load_ipadic(mode: SegmentMode) -> Result<Arc<dyn MorphAnalyzer>> {
    Ok(Arc::new(self::lindera::LinderaAnalyzer::new(
        DictionaryKind::Ipadic,
        mode,
    )?))
}

#[cfg(feature = "lindera")]
fn load_unidic(mode: SegmentMode) -> Result<Arc<dyn MorphAnalyzer>> {
    Ok(Arc::new(self::lindera::LinderaAnalyzer::new(
        DictionaryKind::Unidic,
        mode,
    )?))
}

#[cfg(not(feature = "lindera"))]
fn load_ipadic(_mode: SegmentMode) -> Result<Arc<dyn MorphAnalyzer>> {
    Err(unavailable(DictionaryKind::Ipadic))
}

#[cfg(not(feature = "lindera"))]
fn load_unidic(_mode: SegmentMode) -> Result<Arc<dyn MorphAnalyzer>> {
    Err(unavailable(DictionaryKind::Unidic))
}

#[cfg(not(feature = "lindera"))]
fn unavailable(kind: DictionaryKind) -> YomiError {
    YomiError::configuration(format!(
        "dictionary '{kind}' is not available: yomi was built without the 'lindera' feature \
         (rebuild with `--features {kind}`)"
    ))
}
