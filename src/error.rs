//! Error types for the Yomi library.
//!
//! All fallible operations return [`YomiError`] through the crate-wide
//! [`Result`] alias.
//!
//! Two kinds of failure matter to callers:
//!
//! - [`YomiError::Configuration`] is raised while a tokenizer or analyzer is
//!   being built (unknown dictionary, malformed POS pattern, missing option).
//!   It never occurs while tokenizing.
//! - [`YomiError::Analysis`] aborts the tokenization of a single document.
//!   It does not affect the tokenizer instance or other in-flight calls.
//!
//! # Examples
//!
//! ```
//! use yomi::error::{Result, YomiError};
//!
//! fn load(dict: &str) -> Result<()> {
//!     Err(YomiError::configuration(format!("unsupported dictionary: {dict}")))
//! }
//!
//! assert!(load("jumandic").unwrap_err().is_configuration());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Yomi operations.
#[derive(Error, Debug)]
pub enum YomiError {
    /// I/O errors (reading config files, pattern tables, input documents)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid or incomplete configuration, detected at construction time
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The morphological analysis of a document failed
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with YomiError.
pub type Result<T> = std::result::Result<T, YomiError>;

impl YomiError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        YomiError::Configuration(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        YomiError::Analysis(msg.into())
    }

    /// Check if this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, YomiError::Configuration(_))
    }

    /// Check if this is an analysis error.
    pub fn is_analysis(&self) -> bool {
        matches!(self, YomiError::Analysis(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = YomiError::configuration("unsupported dictionary: foo");
        assert_eq!(
            error.to_string(),
            "Configuration error: unsupported dictionary: foo"
        );
        assert!(error.is_configuration());
        assert!(!error.is_analysis());

        let error = YomiError::analysis("segmenter failed");
        assert_eq!(error.to_string(), "Analysis error: segmenter failed");
        assert!(error.is_analysis());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = YomiError::from(io_error);

        match error {
            YomiError::Io(_) => {} // Expected
            _ => panic!("Expected IO error"),
        }
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: YomiError = json_error.into();
        assert!(error.to_string().starts_with("JSON error:"));
    }
}
