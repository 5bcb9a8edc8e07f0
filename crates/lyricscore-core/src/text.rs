//! Text processing utilities.
//!
//! Normalization, word tokenization and sentence splitting shared by the
//! scorers, the highlighter and the word cloud.

use crate::dictionaries::abbreviations::is_abbreviation;

/// Lower-case `text` and remove every ASCII punctuation character.
///
/// Removal is unconditional, so word-internal apostrophes and hyphens go too
/// (`"Don't"` becomes `"dont"`). Non-ASCII punctuation is left alone.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// Split normalized text into whitespace-separated tokens.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Whether a token consists only of alphabetic characters.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Extract words from text, splitting on whitespace and stripping edge punctuation.
///
/// Punctuation-only fragments (`-`, `...`) are not words.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .map(str::to_lowercase)
        .collect()
}

/// Split text into sentences.
///
/// Boundaries are runs of `.`, `!` or `?` (plus any closing quotes or
/// brackets). A period does not end a sentence after a known abbreviation or
/// a single capital initial, when it is glued to the next character
/// (`3.14`, `www.site.com`), or when the next word starts lower-case.
/// Line breaks are never boundaries on their own.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_terminator(chars[i]) {
            i += 1;
            continue;
        }

        let mut end = i;
        while end + 1 < chars.len() && (is_terminator(chars[end + 1]) || is_closer(chars[end + 1]))
        {
            end += 1;
        }

        if is_boundary(&chars, i, end) {
            push_sentence(&mut sentences, &chars[start..=end]);
            start = end + 1;
        }
        i = end + 1;
    }

    push_sentence(&mut sentences, &chars[start..]);
    sentences
}

const fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

fn push_sentence(sentences: &mut Vec<String>, chars: &[char]) {
    let sentence: String = chars.iter().collect();
    let sentence = sentence.trim();
    if sentence.chars().any(char::is_alphanumeric) {
        sentences.push(sentence.to_string());
    }
}

/// Decide whether the terminator run `chars[first..=last]` closes a sentence.
fn is_boundary(chars: &[char], first: usize, last: usize) -> bool {
    let Some(next) = chars[last + 1..].iter().find(|c| !c.is_whitespace()) else {
        return true;
    };

    let run = &chars[first..=last];
    if run.iter().any(|c| matches!(c, '!' | '?')) {
        return true;
    }

    if run.iter().filter(|c| is_terminator(**c)).count() == 1 {
        // Glued to the following character: decimals, URLs, "e.g".
        if chars.get(last + 1).is_some_and(|c| c.is_alphanumeric()) {
            return false;
        }
        let before = word_before(chars, first);
        if is_abbreviation(&before) || is_initial(&before) {
            return false;
        }
    }

    !next.is_lowercase()
}

/// The run of alphanumerics and periods that ends just before `pos`.
fn word_before(chars: &[char], pos: usize) -> String {
    let start = chars[..pos]
        .iter()
        .rposition(|c| !(c.is_alphanumeric() || *c == '.'))
        .map_or(0, |p| p + 1);
    chars[start..pos].iter().collect()
}

/// Single capital letter, optionally part of a dotted run (`J`, `J.K`).
fn is_initial(word: &str) -> bool {
    let last = word.rsplit('.').next().unwrap_or("");
    let mut letters = last.chars();
    matches!((letters.next(), letters.next()), (Some(c), None) if c.is_uppercase())
}
