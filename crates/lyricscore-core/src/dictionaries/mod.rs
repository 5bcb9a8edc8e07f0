//! Word lists for text analysis.
//!
//! Provides the built-in common-word list, stop-words, syllable exceptions,
//! and abbreviations used by sentence splitting.

pub mod abbreviations;
pub mod common_words;
pub mod stopwords;
pub mod syllables;
