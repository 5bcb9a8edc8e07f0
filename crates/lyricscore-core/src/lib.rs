//! Core library for lyricscore.
//!
//! This crate retrieves song lyrics, grades how hard each one is to read and
//! produces the artifacts the `lyricscore` CLI and MCP server present.
//!
//! # Modules
//!
//! - [`difficulty`] - Rare-word ratio, sentence length and the classifier
//! - [`readability`] - Flesch Reading Ease scoring
//! - [`dictionary`] - Reference dictionary of common words
//! - [`highlight`] - Frequent/rare word highlighting
//! - [`wordcloud`] - Word cloud layout and SVG rendering
//! - [`retrieval`] - Track list and lyric scraping
//! - [`session`] - In-memory lyric store
//! - [`results`] - Results table and CSV export
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use lyricscore_core::{Difficulty, ReferenceDictionary, Thresholds, classify};
//!
//! let dictionary = ReferenceDictionary::builtin();
//! let card = classify("The cat sat on the mat.", &dictionary, &Thresholds::default());
//! assert_eq!(card.difficulty, Difficulty::Easy);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod dictionary;
pub mod difficulty;
pub mod error;
pub mod highlight;
pub mod readability;
pub mod results;
pub mod retrieval;
pub mod session;
pub mod text;
pub mod wordcloud;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use dictionary::ReferenceDictionary;
pub use difficulty::{Difficulty, ScoreCard, Scores, Thresholds, classify};
pub use error::{
    ConfigError, ConfigResult, DictionaryError, ExportError, ExportResult, FetchError,
    FetchResult,
};
pub use highlight::{Highlight, Segment, SegmentKind, highlight};
pub use results::{ResultRow, ResultsTable};
pub use retrieval::{LyricsSource, SiteClient, Track, fetch_artist};
pub use session::Session;
pub use wordcloud::{CloudOptions, WordCloud};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
