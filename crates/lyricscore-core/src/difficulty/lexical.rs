//! Lexical rarity: the share of tokens the reference dictionary does not know.

use crate::dictionary::ReferenceDictionary;
use crate::text;

/// Fraction of tokens that are rare words.
///
/// The text is normalized and split on whitespace. Every token counts toward
/// the total, but only alphabetic tokens absent from `dictionary` count as
/// rare, so numbers dilute the ratio without raising it. Returns 0 when there
/// are no tokens.
pub fn lexical_difficulty(text: &str, dictionary: &ReferenceDictionary) -> f64 {
    let normalized = text::normalize(text);
    let tokens = text::tokens(&normalized);
    if tokens.is_empty() {
        return 0.0;
    }

    let rare = tokens.iter().filter(|t| dictionary.is_rare(t)).count();
    rare as f64 / tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> ReferenceDictionary {
        ReferenceDictionary::from_words(["the", "cat", "sat", "on", "mat", "i", "love", "you"])
    }

    #[test]
    fn common_words_are_not_rare() {
        assert_eq!(lexical_difficulty("The cat sat on the mat.", &dict()), 0.0);
    }

    #[test]
    fn counts_unknown_alphabetic_tokens() {
        // "adore" and "thee" are unknown: 2 of 4
        let ratio = lexical_difficulty("I adore thee, love!", &dict());
        assert!((ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn numbers_count_toward_total_only() {
        // "99" is a token but not alphabetic; "problems" is rare: 1 of 2
        let ratio = lexical_difficulty("99 problems", &dict());
        assert!((ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn apostrophes_fold_into_the_word() {
        // "don't" normalizes to "dont", which no dictionary lists
        let ratio = lexical_difficulty("I don't", &dict());
        assert!((ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_and_punctuation_only_are_zero() {
        assert_eq!(lexical_difficulty("", &dict()), 0.0);
        assert_eq!(lexical_difficulty("?! ... --", &dict()), 0.0);
    }

    #[test]
    fn ratio_stays_in_unit_interval() {
        for text in ["zyx wvu", "the the the", "qqq 1 2 3", "Ünïcode wörds"] {
            let ratio = lexical_difficulty(text, &dict());
            assert!((0.0..=1.0).contains(&ratio), "{text}: {ratio}");
        }
    }
}
