//! Grammar complexity measured as mean sentence length.

use crate::text;

/// Mean number of words per sentence.
///
/// Works on the raw text since sentence boundaries need the original
/// punctuation. Punctuation marks are not words. Returns 0 when no sentence
/// is detected.
pub fn grammar_complexity(text: &str) -> f64 {
    let sentences = text::split_sentences(text);
    if sentences.is_empty() {
        return 0.0;
    }

    let total: usize = sentences.iter().map(|s| text::extract_words(s).len()).sum();
    total as f64 / sentences.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_sentence() {
        assert_eq!(grammar_complexity("The cat sat on the mat."), 6.0);
    }

    #[test]
    fn averages_across_sentences() {
        // 4 words and 2 words
        assert_eq!(grammar_complexity("I will find you. Run now!"), 3.0);
    }

    #[test]
    fn no_sentences_is_zero() {
        assert_eq!(grammar_complexity(""), 0.0);
        assert_eq!(grammar_complexity(" \n\t "), 0.0);
        assert_eq!(grammar_complexity("... !?"), 0.0);
    }

    #[test]
    fn unpunctuated_verse_is_one_long_sentence() {
        let verse = "Hold me close\nNever let me go\nStay with me tonight";
        assert_eq!(grammar_complexity(verse), 11.0);
    }
}
