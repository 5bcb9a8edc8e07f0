//! In-memory store of retrieved lyrics.

use serde::{Deserialize, Serialize};

use crate::difficulty::{self, Thresholds};
use crate::dictionary::ReferenceDictionary;
use crate::results::{ResultRow, ResultsTable};

/// Lyrics keyed by sanitized track title, in insertion order.
///
/// Re-inserting an existing key replaces its text but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    entries: Vec<(String, String)>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` under `key`, returning the text it replaced.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        let key = key.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, text)),
            None => {
                self.entries.push((key, text));
                None
            }
        }
    }

    /// Lyric stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, text)| text.as_str())
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t.as_str()))
    }

    /// Number of stored lyrics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no lyric is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert every entry of `other` in its order, returning how many keys
    /// were new to this session.
    pub fn merge(&mut self, other: Self) -> usize {
        let mut added = 0;
        for (key, text) in other.entries {
            if self.insert(key, text).is_none() {
                added += 1;
            }
        }
        added
    }

    /// Drop every stored lyric.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// All lyrics joined, each preceded by a single space.
    pub fn concatenated_text(&self) -> String {
        self.entries.iter().fold(String::new(), |mut acc, (_, text)| {
            acc.push(' ');
            acc.push_str(text);
            acc
        })
    }

    /// Classify every lyric, in session order.
    #[tracing::instrument(skip_all, fields(lyrics = self.len()))]
    pub fn score_all(
        &self,
        dictionary: &ReferenceDictionary,
        thresholds: &Thresholds,
    ) -> ResultsTable {
        self.iter()
            .map(|(key, text)| {
                ResultRow::new(key, difficulty::classify(text, dictionary, thresholds))
            })
            .collect()
    }
}
