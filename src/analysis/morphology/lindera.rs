use std::borrow::Cow;
use std::str::FromStr;

use lindera::dictionary::load_dictionary;
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;

use crate::analysis::pos::{POS_HIERARCHY, WILDCARD};
use crate::error::{Result, YomiError};

use super::{DictionaryKind, MorphAnalyzer, Morpheme, SegmentMode};

/// Morphological analyzer backed by a Lindera segmenter and one of its
/// embedded dictionaries.
pub struct LinderaAnalyzer {
    inner: Segmenter,
    kind: DictionaryKind,
}

impl LinderaAnalyzer {
    /// Create a new Lindera analyzer on an embedded dictionary.
    pub fn new(kind: DictionaryKind, mode: SegmentMode) -> Result<Self> {
        let mode_str = mode.as_str();
        let mode = Mode::from_str(mode_str).map_err(|e| {
            YomiError::configuration(format!("Invalid mode '{}': {}", mode_str, e))
        })?;
        let uri = format!("embedded://{}", kind.as_str());
        let dict = load_dictionary(&uri).map_err(|e| {
            YomiError::configuration(format!("Failed to load dictionary '{}': {}", kind, e))
        })?;
        let inner = Segmenter::new(mode, dict, None);

        log::info!("loaded {} dictionary (mode: {})", kind, mode_str);

        Ok(Self { inner, kind })
    }

    /// The dictionary this analyzer runs on.
    pub fn dictionary(&self) -> DictionaryKind {
        self.kind
    }
}

impl MorphAnalyzer for LinderaAnalyzer {
    fn analyze(&self, sentence: &str) -> Result<Vec<Morpheme>> {
        let tokens = self
            .inner
            .segment(Cow::Borrowed(sentence))
            .map_err(|e| YomiError::analysis(format!("Failed to segment text: {}", e)))?;

        let base_form_field = self.kind.base_form_field();
        let mut morphemes = Vec::with_capacity(tokens.len());

        for mut token in tokens {
            let (pos, base_form) = {
                let details = token.details();
                let pos: Vec<String> = details
                    .iter()
                    .take(POS_HIERARCHY)
                    .map(|s| s.to_string())
                    .collect();
                let base_form = details
                    .get(base_form_field)
                    .filter(|s| !s.is_empty() && **s != WILDCARD)
                    .map(|s| s.to_string());
                (pos, base_form)
            };

            morphemes.push(Morpheme {
                surface: token.surface.to_string(),
                offset: token.byte_start,
                pos,
                base_form,
                index: token.position,
            });
        }

        Ok(morphemes)
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}
