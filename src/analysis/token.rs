//! Token types and utilities for text analysis.
//!
//! This module defines the data structures that flow out of the Japanese
//! tokenizer and through the downstream filter chain.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with its term, byte offsets and position
//! - [`TokenType`] - Classification of token content
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Positions and Offsets
//!
//! Offsets are absolute byte offsets into the document that was tokenized,
//! as a half-open interval. Positions are 1-based and may skip values where
//! morphemes were dropped, so phrase queries still see the original distances:
//!
//! ```text
//! Input: "私は鰻"  (は dropped as a particle)
//!
//!   Position 1: "私" [0, 3)
//!   Position 3: "鰻" [6, 9)
//! ```
//!
//! # Examples
//!
//! ```
//! use yomi::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("鰻", 3, 6, 9);
//! assert_eq!(token.text, "鰻");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 9);
//! assert_eq!(token.token_type, TokenType::Ideographic);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The term to index (surface text, or the base form if rewritten)
/// - `position` - 1-based position in the token stream
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `token_type` - Content classification
/// - `keyword` - Whether the token is protected from downstream rewriting
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The term of the token
    pub text: String,

    /// The position of the token in the token stream (1-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Token type classification
    pub token_type: TokenType,

    /// Whether this token is a keyword that downstream filters must leave alone
    pub keyword: bool,
}

/// Token type classification.
///
/// Every token produced by morphological analysis is classified as
/// [`TokenType::Ideographic`]; the type exists so downstream consumers can
/// tell CJK-origin tokens apart from tokens of other analyzers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// CJK-origin tokens produced by morphological analysis
    #[default]
    Ideographic,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            token_type: TokenType::Ideographic,
            keyword: false,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            token_type: TokenType::Ideographic,
            keyword: false,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The term as raw bytes.
    pub fn term(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Mark this token as a keyword.
    pub fn as_keyword(mut self) -> Self {
        self.keyword = true;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("猫", 1);
        assert_eq!(token.text, "猫");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.token_type, TokenType::Ideographic);
        assert!(!token.keyword);
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("ねこ", 5, 12, 18);
        assert_eq!(token.position, 5);
        assert_eq!(token.start_offset, 12);
        assert_eq!(token.end_offset, 18);
        assert_eq!(token.len(), 6);
        assert_eq!(token.term(), "ねこ".as_bytes());
    }

    #[test]
    fn test_token_with_text_keeps_offsets() {
        let token = Token::with_offsets("棲ん", 11, 39, 45).with_text("棲む");
        assert_eq!(token.text, "棲む");
        assert_eq!(token.start_offset, 39);
        assert_eq!(token.end_offset, 45);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("人魚", 1);
        assert_eq!(format!("{token}"), "人魚");
    }

    #[test]
    fn test_token_serializes_type_in_lowercase() {
        let token = Token::with_offsets("私", 1, 0, 3);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["token_type"], "ideographic");
        assert_eq!(json["start_offset"], 0);
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("関西", 1), Token::new("空港", 2)];

        let stream = tokens.into_token_stream();
        let collected: Vec<_> = stream.collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "関西");
        assert_eq!(collected[1].text, "空港");
    }
}
