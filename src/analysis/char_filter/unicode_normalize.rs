use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, YomiError};

use super::CharFilter;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationForm {
    NFC,
    NFD,
    NFKC,
    NFKD,
}

impl FromStr for NormalizationForm {
    type Err = YomiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nfc" => Ok(NormalizationForm::NFC),
            "nfd" => Ok(NormalizationForm::NFD),
            "nfkc" => Ok(NormalizationForm::NFKC),
            "nfkd" => Ok(NormalizationForm::NFKD),
            _ => Err(YomiError::configuration(format!("no form named {s}"))),
        }
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NormalizationForm::NFC => "nfc",
            NormalizationForm::NFD => "nfd",
            NormalizationForm::NFKC => "nfkc",
            NormalizationForm::NFKD => "nfkd",
        };
        f.write_str(name)
    }
}

/// A char filter that performs Unicode normalization.
///
/// NFKC is the usual choice for Japanese: it folds half-width katakana and
/// full-width Latin letters into their canonical forms.
#[derive(Debug, Clone, Copy)]
pub struct UnicodeNormalizeCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizeCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> NormalizationForm {
        self.form
    }
}

impl CharFilter for UnicodeNormalizeCharFilter {
    fn filter(&self, input: &str) -> String {
        match self.form {
            NormalizationForm::NFC => input.nfc().collect(),
            NormalizationForm::NFD => input.nfd().collect(),
            NormalizationForm::NFKC => input.nfkc().collect(),
            NormalizationForm::NFKD => input.nfkd().collect(),
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_normalization() {
        let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::NFC);
        // "が" written as "か" + combining voiced sound mark
        assert_eq!(filter.filter("\u{304b}\u{3099}"), "\u{304c}");
    }

    #[test]
    fn test_nfkc_normalization() {
        let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::NFKC);
        // Half-width katakana and full-width Latin
        assert_eq!(filter.filter("ｶﾀｶﾅ"), "カタカナ");
        assert_eq!(filter.filter("\u{ff21}"), "A");
        assert_eq!(filter.filter("㌂"), "アンペア");
    }

    #[test]
    fn test_form_from_str() {
        assert_eq!("NFKC".parse::<NormalizationForm>().unwrap(), NormalizationForm::NFKC);
        assert_eq!("nfd".parse::<NormalizationForm>().unwrap(), NormalizationForm::NFD);
        assert_eq!(NormalizationForm::NFKD.to_string(), "nfkd");

        let err = "nfx".parse::<NormalizationForm>().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_filter_name() {
        let filter = UnicodeNormalizeCharFilter::new(NormalizationForm::NFC);
        assert_eq!(filter.name(), "unicode_normalize");
        assert_eq!(filter.form(), NormalizationForm::NFC);
    }
}
