//! Word cloud generation.
//!
//! [`word_frequencies`] turns text into weighted words; [`WordCloud::generate`]
//! places them on a canvas along an Archimedean spiral and
//! [`WordCloud::to_svg`] renders the result. Layout is deterministic: the
//! same text and options always give the same picture.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dictionaries::stopwords::is_stopword;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']*").expect("valid regex"));

/// Fill colors, cycled in placement order.
const PALETTE: &[&str] = &[
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];

/// Approximate glyph advance as a fraction of the font size.
const CHAR_WIDTH: f64 = 0.6;

/// Gap kept between neighbouring words.
const MARGIN: f64 = 2.0;

/// Radius growth per radian of the spiral.
const SPIRAL_GROWTH: f64 = 2.0;

/// Font shrink factor applied when a word does not fit.
const SHRINK: f64 = 0.9;

/// Rendering options for a word cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CloudOptions {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Maximum number of words to place.
    pub max_words: usize,
    /// SVG fill for the background.
    pub background: String,
    /// Smallest font size; words that only fit below it are dropped.
    pub min_font_size: u32,
    /// Largest font size. Defaults to a quarter of the canvas height.
    pub max_font_size: Option<u32>,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            max_words: 200,
            background: "white".to_string(),
            min_font_size: 4,
            max_font_size: None,
        }
    }
}

/// A word with its frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CloudWord {
    /// Display form (most common casing).
    pub word: String,
    /// Occurrences, plural forms included.
    pub count: usize,
    /// `count` relative to the most frequent word, in `(0, 1]`.
    pub weight: f64,
}

/// A word placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlacedWord {
    /// Display form.
    pub word: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Horizontal center.
    pub x: f64,
    /// Vertical center.
    pub y: f64,
    /// Fill color.
    pub color: String,
}

impl PlacedWord {
    /// Bounding box as `(left, top, right, bottom)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let (w, h) = text_size(&self.word, self.font_size);
        (self.x - w / 2.0, self.y - h / 2.0, self.x + w / 2.0, self.y + h / 2.0)
    }
}

/// A laid-out word cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordCloud {
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Background fill.
    pub background: String,
    /// Placed words, largest first.
    pub words: Vec<PlacedWord>,
}

#[derive(Debug, Default)]
struct Entry {
    casings: Vec<(String, usize)>,
    count: usize,
}

impl Entry {
    fn add(&mut self, form: &str, n: usize) {
        self.count += n;
        match self.casings.iter_mut().find(|(c, _)| c == form) {
            Some((_, seen)) => *seen += n,
            None => self.casings.push((form.to_string(), n)),
        }
    }

    fn display(&self) -> &str {
        let mut best: Option<&(String, usize)> = None;
        for casing in &self.casings {
            if best.is_none_or(|b| casing.1 > b.1) {
                best = Some(casing);
            }
        }
        best.map_or("", |(c, _)| c.as_str())
    }
}

/// Weighted words of `text`, most frequent first, at most `max_words`.
///
/// Trailing `'s` is stripped; stop-words and numbers are dropped; case
/// variants are merged; a plural `Xs` folds into `X` when `X` also occurs.
pub fn word_frequencies(text: &str, max_words: usize) -> Vec<CloudWord> {
    let mut entries: HashMap<String, Entry> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for m in TOKEN_PATTERN.find_iter(text) {
        let mut word = m.as_str();
        if word.to_lowercase().ends_with("'s") {
            word = &word[..word.len() - 2];
        }
        if word.is_empty() || word.chars().all(char::is_numeric) || is_stopword(word) {
            continue;
        }

        let key = word.to_lowercase();
        if !entries.contains_key(&key) {
            order.push(key.clone());
        }
        entries.entry(key).or_default().add(word, 1);
    }

    // Fold plurals into their singular
    for key in &order {
        if key.ends_with('s') && !key.ends_with("ss") {
            let singular = &key[..key.len() - 1];
            if entries.contains_key(singular)
                && let Some(plural) = entries.remove(key)
                && let Some(target) = entries.get_mut(singular)
            {
                let display = target.display().to_string();
                target.add(&display, plural.count);
            }
        }
    }

    let mut ranked: Vec<(String, usize)> = order
        .iter()
        .filter_map(|k| entries.get(k).map(|e| (e.display().to_string(), e.count)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(max_words);

    let max = ranked.first().map_or(1, |(_, c)| *c) as f64;
    ranked
        .into_iter()
        .map(|(word, count)| CloudWord {
            word,
            count,
            weight: count as f64 / max,
        })
        .collect()
}

fn text_size(word: &str, font_size: f64) -> (f64, f64) {
    (CHAR_WIDTH * font_size * word.chars().count() as f64, font_size)
}

fn overlaps(a: (f64, f64, f64, f64), b: (f64, f64, f64, f64)) -> bool {
    a.0 < b.2 + MARGIN && b.0 < a.2 + MARGIN && a.1 < b.3 + MARGIN && b.1 < a.3 + MARGIN
}

impl WordCloud {
    /// Lay out the words of `text`.
    ///
    /// Words are placed largest first. A word that finds no free spot is
    /// retried at a smaller size; once a word cannot be placed even at the
    /// minimum size, the canvas is considered full and layout stops.
    #[tracing::instrument(skip(text, options), fields(text_len = text.len()))]
    pub fn generate(text: &str, options: &CloudOptions) -> Self {
        let frequencies = word_frequencies(text, options.max_words);
        let width = f64::from(options.width);
        let height = f64::from(options.height);
        let min_font = f64::from(options.min_font_size.max(1));
        let max_font = options
            .max_font_size
            .map_or(height / 4.0, f64::from)
            .max(min_font);

        let mut placed: Vec<PlacedWord> = Vec::new();
        let mut last_size = max_font;

        for cw in &frequencies {
            let mut size = min_font
                .mul_add(1.0 - cw.weight, max_font * cw.weight)
                .min(last_size);
            let mut position = None;
            while size >= min_font {
                position = find_spot(&cw.word, size, width, height, &placed);
                if position.is_some() {
                    break;
                }
                size *= SHRINK;
            }

            let Some((x, y)) = position else {
                tracing::debug!(word = %cw.word, placed = placed.len(), "canvas full");
                break;
            };
            last_size = size;
            placed.push(PlacedWord {
                word: cw.word.clone(),
                font_size: size,
                x,
                y,
                color: PALETTE[placed.len() % PALETTE.len()].to_string(),
            });
        }

        tracing::debug!(
            candidates = frequencies.len(),
            placed = placed.len(),
            "word cloud laid out"
        );
        Self {
            width: options.width,
            height: options.height,
            background: options.background.clone(),
            words: placed,
        }
    }

    /// Whether no word was placed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Render as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">\n<rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>\n",
            w = self.width,
            h = self.height,
            bg = escape_xml(&self.background),
        );
        for word in &self.words {
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{:.1}\" fill=\"{}\" \
                 font-family=\"sans-serif\" text-anchor=\"middle\" \
                 dominant-baseline=\"central\">{}</text>\n",
                word.x,
                word.y,
                word.font_size,
                word.color,
                escape_xml(&word.word),
            ));
        }
        svg.push_str("</svg>\n");
        svg
    }
}

/// Walk the spiral from the canvas center and return the first free center.
fn find_spot(
    word: &str,
    size: f64,
    width: f64,
    height: f64,
    placed: &[PlacedWord],
) -> Option<(f64, f64)> {
    let (w, h) = text_size(word, size);
    if w > width || h > height {
        return None;
    }

    let (cx, cy) = (width / 2.0, height / 2.0);
    let aspect = height / width;
    let max_radius = width.max(height);
    let mut t: f64 = 0.0;

    loop {
        let r = SPIRAL_GROWTH * t;
        if r > max_radius {
            return None;
        }
        let x = r.mul_add(t.cos(), cx);
        let y = (r * aspect).mul_add(t.sin(), cy);
        let bounds = (x - w / 2.0, y - h / 2.0, x + w / 2.0, y + h / 2.0);

        let inside = bounds.0 >= 0.0 && bounds.1 >= 0.0 && bounds.2 <= width && bounds.3 <= height;
        if inside && !placed.iter().any(|p| overlaps(bounds, p.bounds())) {
            return Some((x, y));
        }

        // Roughly constant arc length between probes
        t += (8.0 / r.max(1.0)).min(0.2);
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
