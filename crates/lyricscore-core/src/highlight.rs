//! Per-word highlighting of frequent and rare words.
//!
//! The text is re-emitted word by word as a list of [`Segment`]s whose
//! concatenation is the original input. Stop-words are never marked; the
//! most frequent words are marked [`SegmentKind::Frequent`]; remaining words
//! the dictionary does not know are marked [`SegmentKind::Rare`].

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::stopwords::is_stopword;
use crate::dictionary::ReferenceDictionary;

/// Default size of the frequent-word set.
pub const DEFAULT_FREQUENT_WORDS: usize = 20;

/// Runs of word characters; `don't` yields `don` and `t`.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// How a segment should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Unmarked text, including everything between words.
    Plain,
    /// One of the most frequent words of the lyric.
    Frequent,
    /// A word absent from the reference dictionary.
    Rare,
}

/// A run of text with a single display kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    /// The original text of the run.
    pub text: String,
    /// How to display it.
    pub kind: SegmentKind,
}

/// A highlighted lyric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Highlight {
    /// Segments in text order.
    pub segments: Vec<Segment>,
    /// The frequent-word set, most frequent first (lower-cased).
    pub frequent: Vec<String>,
}

impl Highlight {
    /// Reassemble the original text.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Number of segments of the given kind.
    pub fn count(&self, kind: SegmentKind) -> usize {
        self.segments.iter().filter(|s| s.kind == kind).count()
    }

    /// Render as an HTML fragment.
    ///
    /// Frequent words are bold green, rare words bold red. Plain text is
    /// escaped and line breaks become `<br>`.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for segment in &self.segments {
            let escaped = escape_html(&segment.text);
            match segment.kind {
                SegmentKind::Plain => html.push_str(&escaped.replace('\n', "<br>\n")),
                SegmentKind::Frequent => {
                    html.push_str(&format!("<span style='color:green'><b>{escaped}</b></span>"));
                }
                SegmentKind::Rare => {
                    html.push_str(&format!("<span style='color:red'><b>{escaped}</b></span>"));
                }
            }
        }
        html
    }
}

/// The `n` most frequent words (case-insensitive) with their counts.
///
/// Ties keep first-appearance order.
pub fn frequent_words(text: &str, n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for m in WORD_PATTERN.find_iter(text) {
        let word = m.as_str().to_lowercase();
        let count = counts.entry(word.clone()).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|w| {
            let c = counts[&w];
            (w, c)
        })
        .collect();
    // Stable sort keeps first-appearance order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Highlight the `frequent_count` most frequent words and all rare words.
#[tracing::instrument(skip(text, dictionary), fields(text_len = text.len()))]
pub fn highlight(text: &str, dictionary: &ReferenceDictionary, frequent_count: usize) -> Highlight {
    let frequent: Vec<String> = frequent_words(text, frequent_count)
        .into_iter()
        .map(|(w, _)| w)
        .collect();
    let frequent_set: HashSet<&str> = frequent.iter().map(String::as_str).collect();

    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut last = 0;

    for m in WORD_PATTERN.find_iter(text) {
        plain.push_str(&text[last..m.start()]);
        last = m.end();

        let word = m.as_str();
        let lower = word.to_lowercase();
        let kind = if is_stopword(&lower) {
            SegmentKind::Plain
        } else if frequent_set.contains(lower.as_str()) {
            SegmentKind::Frequent
        } else if dictionary.is_rare(word) {
            SegmentKind::Rare
        } else {
            SegmentKind::Plain
        };

        if kind == SegmentKind::Plain {
            plain.push_str(word);
        } else {
            flush_plain(&mut segments, &mut plain);
            segments.push(Segment {
                text: word.to_string(),
                kind,
            });
        }
    }
    plain.push_str(&text[last..]);
    flush_plain(&mut segments, &mut plain);

    Highlight { segments, frequent }
}

fn flush_plain(segments: &mut Vec<Segment>, plain: &mut String) {
    if !plain.is_empty() {
        segments.push(Segment {
            text: std::mem::take(plain),
            kind: SegmentKind::Plain,
        });
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
