//! Logging and tracing setup.
//!
//! Human-readable events go to stderr (stdout carries command output and the
//! MCP protocol). When a log directory or file is configured, JSON-lines
//! events are also written there through a non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Explicit log file path (no rotation).
const LOG_PATH_ENV: &str = "LYRICSCORE_LOG_PATH";

/// Log directory (daily rotation).
const LOG_DIR_ENV: &str = "LYRICSCORE_LOG_DIR";

/// File name prefix for rotated logs.
const LOG_FILE_PREFIX: &str = "lyricscore.jsonl";

/// Where JSON-lines logs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFile {
    /// A single file that is appended to.
    Fixed(PathBuf),
    /// A directory holding one file per day.
    Daily(PathBuf),
}

/// Resolved logging destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// JSON-lines log destination, if any.
    pub log_file: Option<LogFile>,
}

impl ObservabilityConfig {
    /// Resolve destinations from the environment, falling back to `log_dir`
    /// from the configuration file.
    ///
    /// `LYRICSCORE_LOG_PATH` wins over `LYRICSCORE_LOG_DIR`, which wins over
    /// the configured directory.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = log_path
            .filter(|p| !p.as_os_str().is_empty())
            .map(LogFile::Fixed)
            .or_else(|| {
                env_dir
                    .filter(|p| !p.as_os_str().is_empty())
                    .or(config_dir)
                    .map(LogFile::Daily)
            });
        Self { log_file }
    }
}

/// Level for the stderr layer.
///
/// Stderr stays at warnings unless asked for more; `-q` keeps only errors.
pub const fn stderr_level(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Global event filter.
///
/// `RUST_LOG` wins when set and valid. Otherwise the configured level
/// applies, raised by `-v` flags and lowered to `error` by `-q`.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the whole run; dropping it flushes the
/// file writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    stderr: LevelFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr);

    let (file_layer, guard) = match &config.log_file {
        Some(destination) => {
            let appender = match destination {
                LogFile::Fixed(path) => {
                    let (dir, name) = split_log_path(path)?;
                    std::fs::create_dir_all(&dir)
                        .with_context(|| format!("failed to create {}", dir.display()))?;
                    tracing_appender::rolling::never(dir, name)
                }
                LogFile::Daily(dir) => {
                    std::fs::create_dir_all(dir)
                        .with_context(|| format!("failed to create {}", dir.display()))?;
                    tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)
                }
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn split_log_path(path: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    let name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    Ok((dir, PathBuf::from(name)))
}
