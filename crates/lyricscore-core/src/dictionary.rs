//! Reference dictionary of common words.
//!
//! A word that is alphabetic and absent from the dictionary counts as rare.
//! The dictionary is built once at startup and handed to every scorer by
//! reference; it is never mutated afterwards.

use std::collections::HashSet;

use camino::Utf8Path;

use crate::dictionaries::common_words::COMMON_WORDS;
use crate::error::DictionaryError;
use crate::text;

/// Immutable set of known-common, lower-cased words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDictionary {
    words: HashSet<String>,
}

impl ReferenceDictionary {
    /// The compiled-in list of everyday English words.
    pub fn builtin() -> Self {
        Self::from_words(COMMON_WORDS.iter().copied())
    }

    /// Build a dictionary from arbitrary words (lower-cased, blanks skipped).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a word list with one word per line.
    ///
    /// Lines starting with `#` are comments.
    #[tracing::instrument]
    pub fn from_path(path: &Utf8Path) -> Result<Self, DictionaryError> {
        let content =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| DictionaryError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let dictionary = Self::from_words(
            content
                .lines()
                .filter(|line| !line.trim_start().starts_with('#')),
        );
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(words = dictionary.len(), "loaded word list");
        Ok(dictionary)
    }

    /// Load from `path` when given, otherwise fall back to [`Self::builtin`].
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, DictionaryError> {
        path.map_or_else(|| Ok(Self::builtin()), Self::from_path)
    }

    /// Whether the dictionary knows `word` (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Whether `word` is rare: alphabetic and not in the dictionary.
    pub fn is_rare(&self, word: &str) -> bool {
        text::is_alphabetic(word) && !self.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for ReferenceDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}
