//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher = easier. Scores run roughly 0-100 but are not clamped: very
//! simple text scores above 100 and dense text can go negative.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::syllables;
use crate::text;

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease score.
    pub score: f64,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Number of words detected.
    pub words: usize,
    /// Total syllable count.
    pub syllables: usize,
}

/// Score text with Flesch Reading Ease.
///
/// Never fails. The sentence count is floored at one, and with no words the
/// syllable term drops out, so empty input scores the formula's constant.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(text: &str) -> ReadabilityReport {
    let sentences = text::split_sentences(text).len();
    let word_list = text::extract_words(text);
    let words = word_list.len();
    let syllables: usize = word_list
        .iter()
        .map(|w| syllables::count_syllables(w))
        .sum();

    let words_per_sentence = words as f64 / sentences.max(1) as f64;
    let syllables_per_word = if words == 0 {
        0.0
    } else {
        syllables as f64 / words as f64
    };
    let score = 84.6f64.mul_add(-syllables_per_word, 1.015f64.mul_add(-words_per_sentence, 206.835));

    ReadabilityReport {
        score,
        sentences,
        words,
        syllables,
    }
}

/// Flesch Reading Ease score of `text`.
pub fn flesch_reading_ease(text: &str) -> f64 {
    check_readability(text).score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_sentence_is_very_readable() {
        let report = check_readability("The cat sat on the mat.");
        assert_eq!(report.sentences, 1);
        assert_eq!(report.words, 6);
        assert_eq!(report.syllables, 6);
        assert!((report.score - 116.145).abs() < 1e-9);
    }

    #[test]
    fn dense_prose_scores_low() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated the establishment of interdepartmental \
                    communication protocols that facilitated the dissemination of \
                    procedural documentation.";
        assert!(flesch_reading_ease(text) < 30.0);
    }

    #[test]
    fn empty_input_scores_the_constant() {
        let report = check_readability("");
        assert_eq!(report.words, 0);
        assert_eq!(report.sentences, 0);
        assert!((report.score - 206.835).abs() < 1e-9);
    }

    #[test]
    fn unpunctuated_lyrics_are_one_sentence() {
        let report = check_readability("I will always love you\nI will always love you");
        assert_eq!(report.sentences, 1);
        assert_eq!(report.words, 10);
        assert!(report.score.is_finite());
    }
}
