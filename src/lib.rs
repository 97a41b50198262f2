//! # Yomi
//!
//! Sentence-aware Japanese tokenization for full-text search indexing.
//!
//! ## Features
//!
//! - Byte-preserving sentence splitting
//! - Pluggable morphological analyzers (Lindera dictionaries behind a feature)
//! - POS-pattern stop tag dropping and base form rewriting
//! - Absolute byte offsets and gap-preserving positions across sentences
//! - Downstream stop word, lowercase and Unicode normalization filters
//!
//! ## Cargo features
//!
//! Dictionaries are opt-in, so the default build has no analyzer to load and
//! [`JapaneseTokenizer::from_config`](analysis::tokenizer::japanese::JapaneseTokenizer::from_config)
//! (and `yomi tokenize`) fail with a configuration error. Enable one:
//!
//! - `ipadic`: Lindera with the embedded IPADIC dictionary
//! - `unidic`: Lindera with the embedded UniDic dictionary
//! - `lindera`: Lindera without an embedded dictionary
//!
//! ```text
//! cargo install yomi --features ipadic
//! ```
//!
//! `yomi sentences`, `yomi check-tags` and tokenizers built around a custom
//! [`MorphAnalyzer`](analysis::morphology::MorphAnalyzer) need no dictionary.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, JapaneseAnalyzer};
    pub use crate::analysis::morphology::{DictionaryKind, MorphAnalyzer, Morpheme, SegmentMode};
    pub use crate::analysis::pos::{PosFilter, PosFilterSet, PosPattern};
    pub use crate::analysis::sentence::SentenceSplitter;
    pub use crate::analysis::token::{Token, TokenStream, TokenType};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::analysis::tokenizer::japanese::JapaneseTokenizer;
    pub use crate::config::JapaneseTokenizerConfig;
    pub use crate::error::{Result, YomiError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
