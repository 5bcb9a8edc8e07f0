//! Error types for lyricscore-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a reference dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word-list file could not be read.
    #[error("failed to read word list {path}: {source}")]
    Read {
        /// Path of the word list.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The word list contained no usable words.
    #[error("word list {path} contains no words")]
    Empty {
        /// Path of the word list.
        path: Utf8PathBuf,
    },
}

/// Errors that can occur while retrieving lyrics.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed (network error, timeout, unreadable body).
    #[error("request to {url} failed: {source}")]
    Request {
        /// URL that was requested.
        url: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// URL that was requested.
        url: String,
        /// Status code returned by the server.
        status: u16,
    },

    /// A track link could not be resolved against the base URL.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl {
        /// The URL or link that failed to parse.
        url: String,
        /// Parser message.
        reason: String,
    },
}

/// Result type alias using [`FetchError`].
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur while exporting or importing results.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer produced bytes that are not UTF-8.
    #[error("CSV output is not valid UTF-8")]
    Utf8,
}

/// Result type alias using [`ExportError`].
pub type ExportResult<T> = Result<T, ExportError>;
