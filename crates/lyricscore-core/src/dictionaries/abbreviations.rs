//! Abbreviations that should not end a sentence when followed by a period.
//!
//! Abbreviations that double as everyday lyric words ("sat", "sun", "wed",
//! "no") are left out so they still close sentences.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lower-cased abbreviations without their trailing period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "st", "capt", "col", "gen", "lt",
        "sgt", "sen", "gov", "pres",
    ]);

    // Latin and editorial
    set.extend(["etc", "vs", "e.g", "i.e", "cf", "viz", "n.b", "p.s", "feat", "ft", "prod"]);

    // Time and dates
    set.extend([
        "a.m", "p.m", "b.c", "a.d", "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept",
        "oct", "nov", "dec", "tue", "thu", "thurs", "fri",
    ]);

    // Places and organizations
    set.extend([
        "ave", "blvd", "rd", "dept", "u.s", "u.k", "u.s.a", "l.a", "n.y", "inc", "corp", "ltd",
        "bros", "vol", "approx",
    ]);

    set
});

/// Check if a word (with or without trailing periods) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    ABBREVIATIONS.contains(word_lower.trim_matches('.'))
}
