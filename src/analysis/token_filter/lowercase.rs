//! Lowercase filter implementation.
//!
//! Japanese text has no case, but documents routinely mix in Latin words and
//! full-width Latin letters. This filter folds them to lowercase so queries
//! match regardless of case. Offsets and positions are left untouched.
//!
//! # Examples
//!
//! ```
//! use yomi::analysis::token::Token;
//! use yomi::analysis::token_filter::Filter;
//! use yomi::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Rust", 1), Token::new("ＡＰＩ", 2)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "rust");
//! assert_eq!(filtered[1].text, "ａｐｉ");
//! ```

use crate::analysis::token::{IntoTokenStream, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Keyword tokens are passed through unchanged.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.keyword {
                    token
                } else if token.text.is_ascii() {
                    let text = token.text.to_ascii_lowercase();
                    token.with_text(text)
                } else {
                    let text = token.text.to_lowercase();
                    token.with_text(text)
                }
            })
            .collect::<Vec<_>>();

        Ok(filtered_tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
