//! Char filters applied to the raw text before tokenization.
//!
//! A char filter rewrites the whole input. Token offsets produced afterwards
//! refer to the filtered text, so only filters that keep byte alignment (or
//! hosts that index the filtered text) preserve offsets into the original.

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod unicode_normalize;

pub use unicode_normalize::{NormalizationForm, UnicodeNormalizeCharFilter};
