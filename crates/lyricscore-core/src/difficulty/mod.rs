//! Lyric difficulty classification.
//!
//! Three scores feed the classifier:
//!
//! - [`lexical::lexical_difficulty`]: share of rare words
//! - [`sentence_length::grammar_complexity`]: mean words per sentence
//! - [`crate::readability::flesch_reading_ease`]: Flesch Reading Ease
//!
//! [`classify`] combines them through ordered thresholds into a
//! [`Difficulty`]. Everything here is pure: the same text, dictionary and
//! thresholds always give the same [`ScoreCard`].

pub mod lexical;
pub mod sentence_length;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionary::ReferenceDictionary;
use crate::readability;

pub use lexical::lexical_difficulty;
pub use sentence_length::grammar_complexity;

/// Three-level difficulty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Difficulty {
    /// Common words, short sentences, easy reading.
    Easy,
    /// Some rare vocabulary or middling readability.
    Medium,
    /// Many rare words, long sentences, or poor readability.
    Hard,
}

impl Difficulty {
    /// All labels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the label as shown in tables and CSV files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty: {s}. Use: Easy, Medium, Hard"))
    }
}

/// Cut-off values for the classifier.
///
/// The rules are evaluated in order and every comparison is strict:
///
/// 1. `rare_ratio > hard_rare_ratio`, `avg_sentence_length > hard_sentence_length`
///    or `readability < hard_readability` gives [`Difficulty::Hard`].
/// 2. Otherwise `rare_ratio > medium_rare_ratio` or
///    `readability < medium_readability` gives [`Difficulty::Medium`].
/// 3. Otherwise [`Difficulty::Easy`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Thresholds {
    /// Rare-word ratio above which a lyric is hard.
    pub hard_rare_ratio: f64,
    /// Mean sentence length above which a lyric is hard.
    pub hard_sentence_length: f64,
    /// Readability below which a lyric is hard.
    pub hard_readability: f64,
    /// Rare-word ratio above which a lyric is at least medium.
    pub medium_rare_ratio: f64,
    /// Readability below which a lyric is at least medium.
    pub medium_readability: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            hard_rare_ratio: 0.35,
            hard_sentence_length: 20.0,
            hard_readability: 30.0,
            medium_rare_ratio: 0.20,
            medium_readability: 50.0,
        }
    }
}

impl Thresholds {
    /// Apply the ordered rules to pre-computed scores.
    pub fn classify(&self, scores: &Scores) -> Difficulty {
        if scores.rare_ratio > self.hard_rare_ratio
            || scores.avg_sentence_length > self.hard_sentence_length
            || scores.readability < self.hard_readability
        {
            Difficulty::Hard
        } else if scores.rare_ratio > self.medium_rare_ratio
            || scores.readability < self.medium_readability
        {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }
}

/// Unrounded scores for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    /// Share of rare words, in `[0, 1]`.
    pub rare_ratio: f64,
    /// Mean words per sentence, `>= 0`.
    pub avg_sentence_length: f64,
    /// Flesch Reading Ease.
    pub readability: f64,
}

impl Scores {
    /// Compute all three scores for `text`.
    pub fn compute(text: &str, dictionary: &ReferenceDictionary) -> Self {
        Self {
            rare_ratio: lexical_difficulty(text, dictionary),
            avg_sentence_length: grammar_complexity(text),
            readability: readability::flesch_reading_ease(text),
        }
    }
}

/// Classifier output: the label plus the scores rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreCard {
    /// Difficulty label.
    pub difficulty: Difficulty,
    /// Share of rare words.
    pub rare_ratio: f64,
    /// Mean words per sentence.
    pub avg_sentence_length: f64,
    /// Flesch Reading Ease.
    pub readability: f64,
}

/// Classify a lyric.
///
/// The label is decided on the unrounded scores; the returned card carries
/// the scores rounded to two decimals. Empty text falls through every rule
/// and comes out [`Difficulty::Easy`].
#[tracing::instrument(skip(text, dictionary), fields(text_len = text.len()))]
pub fn classify(
    text: &str,
    dictionary: &ReferenceDictionary,
    thresholds: &Thresholds,
) -> ScoreCard {
    let scores = Scores::compute(text, dictionary);
    let difficulty = thresholds.classify(&scores);
    tracing::trace!(?scores, %difficulty, "classified");

    ScoreCard {
        difficulty,
        rare_ratio: round2(scores.rare_ratio),
        avg_sentence_length: round2(scores.avg_sentence_length),
        readability: round2(scores.readability),
    }
}

/// Round half away from zero to two decimals.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(rare_ratio: f64, avg_sentence_length: f64, readability: f64) -> Scores {
        Scores {
            rare_ratio,
            avg_sentence_length,
            readability,
        }
    }

    #[test]
    fn high_rare_ratio_is_hard_regardless_of_other_scores() {
        let t = Thresholds::default();
        assert_eq!(t.classify(&scores(0.36, 0.0, 120.0)), Difficulty::Hard);
        assert_eq!(t.classify(&scores(0.36, 50.0, -10.0)), Difficulty::Hard);
    }

    #[test]
    fn each_hard_clause_fires_alone() {
        let t = Thresholds::default();
        assert_eq!(t.classify(&scores(0.0, 20.5, 90.0)), Difficulty::Hard);
        assert_eq!(t.classify(&scores(0.0, 5.0, 29.9)), Difficulty::Hard);
    }

    #[test]
    fn boundaries_are_strict() {
        let t = Thresholds::default();
        // Exactly on every cut-off: no rule fires
        assert_eq!(t.classify(&scores(0.20, 20.0, 50.0)), Difficulty::Easy);
        // 0.35 is not hard, but it is above the medium cut-off
        assert_eq!(t.classify(&scores(0.35, 20.0, 50.0)), Difficulty::Medium);
        // Readability exactly 30 is medium, not hard
        assert_eq!(t.classify(&scores(0.0, 0.0, 30.0)), Difficulty::Medium);
    }

    #[test]
    fn rare_ratio_at_medium_cutoff_needs_low_readability() {
        let t = Thresholds::default();
        assert_eq!(t.classify(&scores(0.20, 8.0, 70.0)), Difficulty::Easy);
        assert_eq!(t.classify(&scores(0.20, 8.0, 45.0)), Difficulty::Medium);
    }

    #[test]
    fn custom_thresholds_apply() {
        let t = Thresholds {
            hard_sentence_length: 5.0,
            ..Thresholds::default()
        };
        assert_eq!(t.classify(&scores(0.0, 6.0, 90.0)), Difficulty::Hard);
    }

    #[test]
    fn simple_sentence_is_easy() {
        let dict = ReferenceDictionary::builtin();
        let card = classify("The cat sat on the mat.", &dict, &Thresholds::default());
        assert_eq!(card.difficulty, Difficulty::Easy);
        assert_eq!(card.rare_ratio, 0.0);
        assert_eq!(card.avg_sentence_length, 6.0);
        assert!(card.readability > 50.0);
    }

    #[test]
    fn empty_text_is_easy() {
        let dict = ReferenceDictionary::builtin();
        let card = classify("", &dict, &Thresholds::default());
        assert_eq!(card.difficulty, Difficulty::Easy);
        assert_eq!(card.rare_ratio, 0.0);
        assert_eq!(card.avg_sentence_length, 0.0);
    }

    #[test]
    fn classification_is_deterministic() {
        let dict = ReferenceDictionary::builtin();
        let text = "Quixotic zephyrs waltz. The night is young!";
        let first = classify(text, &dict, &Thresholds::default());
        let second = classify(text, &dict, &Thresholds::default());
        assert_eq!(first, second);
    }

    #[test]
    fn obscure_vocabulary_is_hard() {
        let dict = ReferenceDictionary::builtin();
        let card = classify(
            "Quixotic zephyrs waltz over obsequious ziggurats.",
            &dict,
            &Thresholds::default(),
        );
        assert_eq!(card.difficulty, Difficulty::Hard);
        assert!(card.rare_ratio > 0.35);
    }

    #[test]
    fn scores_are_rounded_to_two_decimals() {
        let dict = ReferenceDictionary::from_words(["a", "b"]);
        // 1 rare of 3 tokens = 0.333...
        let card = classify("a b c.", &dict, &Thresholds::default());
        assert_eq!(card.rare_ratio, 0.33);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" Easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert!("tough".parse::<Difficulty>().is_err());
    }
}
