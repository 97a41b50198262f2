//! Text analysis module for Yomi.
//!
//! This module provides the Japanese tokenization pipeline and the filters
//! a host chains around it:
//!
//! - [`sentence`] splits text into byte-preserving sentences
//! - [`morphology`] defines the morphological analyzer interface
//! - [`pos`] and [`pos_tags`] match POS hierarchies against patterns
//! - [`tokenizer`] assembles analyzer output into document-level tokens
//! - [`char_filter`], [`token_filter`] and [`analyzer`] compose the full chain

pub mod analyzer;
pub mod char_filter;
pub mod morphology;
pub mod pos;
pub mod pos_tags;
pub mod sentence;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
