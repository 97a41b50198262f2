//! Sentence splitting for morphological analysis.
//!
//! The Japanese tokenizer analyzes one sentence at a time. [`SentenceSplitter`]
//! cuts the input into sentence-scoped slices whose concatenation is exactly
//! the input: no bytes are dropped, trimmed or reordered, so the byte length
//! of each slice can be used to track absolute offsets.
//!
//! # Boundary rules
//!
//! - A delimiter rune closes the sentence, together with the run of follower
//!   runes (closing quotes and brackets) that immediately follows it.
//! - A delimiter at the start of a sentence closes that sentence right away,
//!   so `"。。"` yields two one-delimiter sentences.
//! - When double line feed splitting is enabled, `"\n\n"` closes the sentence.
//! - A sentence is closed once it reaches `max_rune_len` runes (0 = unlimited),
//!   again together with any follower runes right after the cut.
//! - Whatever remains at the end of the input is the last sentence.
//! - Empty input yields no sentences and no sentence is ever empty.
//!
//! # Examples
//!
//! ```
//! use yomi::analysis::sentence::SentenceSplitter;
//!
//! let splitter = SentenceSplitter::default();
//! let sentences: Vec<_> = splitter.split("私は鰻。「ねこはいます。」そうか").collect();
//!
//! assert_eq!(sentences, vec!["私は鰻。", "「ねこはいます。」", "そうか"]);
//! ```

use serde::{Deserialize, Serialize};

/// Sentence-ending punctuation.
pub const DEFAULT_DELIMITERS: &[char] = &['。', '．', '！', '!', '？', '?'];

/// Runes absorbed into the sentence when they directly follow a delimiter.
pub const DEFAULT_FOLLOWERS: &[char] = &['.', '｣', '」', '』', ')', '）', '｝', '}', '〉', '》'];

/// Default maximum number of runes in one sentence.
pub const DEFAULT_MAX_RUNE_LEN: usize = 128;

/// Configuration for [`SentenceSplitter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceSplitterConfig {
    /// Runes that end a sentence.
    pub delimiters: Vec<char>,

    /// Runes absorbed into a sentence right after its delimiter.
    pub followers: Vec<char>,

    /// Whether two consecutive line feeds end a sentence.
    pub double_line_feed_split: bool,

    /// Maximum number of runes in one sentence (0 = unlimited).
    pub max_rune_len: usize,
}

impl Default for SentenceSplitterConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            followers: DEFAULT_FOLLOWERS.to_vec(),
            double_line_feed_split: true,
            max_rune_len: DEFAULT_MAX_RUNE_LEN,
        }
    }
}

/// Splits text into byte-preserving sentence slices.
///
/// The splitter holds only immutable configuration; every call to
/// [`SentenceSplitter::split`] returns a fresh cursor, so the same splitter
/// can be shared across threads and the sequence can be restarted at will.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSplitter {
    delimiters: Vec<char>,
    followers: Vec<char>,
    double_line_feed_split: bool,
    max_rune_len: usize,
}

impl SentenceSplitter {
    /// Create a splitter from its configuration.
    pub fn new(config: &SentenceSplitterConfig) -> Self {
        Self {
            delimiters: config.delimiters.clone(),
            followers: config.followers.clone(),
            double_line_feed_split: config.double_line_feed_split,
            max_rune_len: config.max_rune_len,
        }
    }

    /// Enable or disable splitting at a double line feed.
    pub fn with_double_line_feed_split(mut self, enabled: bool) -> Self {
        self.double_line_feed_split = enabled;
        self
    }

    /// Set the maximum number of runes in one sentence (0 = unlimited).
    pub fn with_max_rune_len(mut self, max_rune_len: usize) -> Self {
        self.max_rune_len = max_rune_len;
        self
    }

    /// Iterate over the sentences of `text`.
    pub fn split<'s, 't>(&'s self, text: &'t str) -> Sentences<'s, 't> {
        Sentences {
            splitter: self,
            text,
            cursor: 0,
        }
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    fn is_follower(&self, c: char) -> bool {
        self.followers.contains(&c)
    }

    /// Byte length of the first sentence of a non-empty `text`.
    fn boundary(&self, text: &str) -> usize {
        let mut runes = 0;
        let mut after_line_feed = false;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            let mut end = i + c.len_utf8();
            runes += 1;

            let at_limit = self.max_rune_len > 0 && runes >= self.max_rune_len;
            if self.is_delimiter(c) || at_limit {
                while let Some(&(j, f)) = chars.peek() {
                    if !self.is_follower(f) {
                        break;
                    }
                    end = j + f.len_utf8();
                    chars.next();
                }
                return end;
            }

            if self.double_line_feed_split && c == '\n' {
                if after_line_feed {
                    return end;
                }
                after_line_feed = true;
            } else {
                after_line_feed = false;
            }
        }

        text.len()
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(&SentenceSplitterConfig::default())
    }
}

/// Iterator over the sentences of a text, created by [`SentenceSplitter::split`].
#[derive(Debug, Clone)]
pub struct Sentences<'s, 't> {
    splitter: &'s SentenceSplitter,
    text: &'t str,
    cursor: usize,
}

impl<'s, 't> Sentences<'s, 't> {
    /// Byte offset of the next sentence in the original text.
    pub fn offset(&self) -> usize {
        self.cursor
    }
}

impl<'s, 't> Iterator for Sentences<'s, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.cursor..];
        if rest.is_empty() {
            return None;
        }

        let end = self.splitter.boundary(rest);
        self.cursor += end;
        Some(&rest[..end])
    }
}

impl std::iter::FusedIterator for Sentences<'_, '_> {}
