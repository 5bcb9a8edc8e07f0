//! Library interface for the `lyricscore` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//! - `server` - MCP server (feature `mcp`)

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                     Log filter (e.g., debug, lyricscore_core=trace)
    LYRICSCORE_LOG_PATH          Explicit log file path
    LYRICSCORE_LOG_DIR           Log directory (daily rotation)
    LYRICSCORE_BASE_URL          Lyrics site root for relative track links
    LYRICSCORE_DICTIONARY        Word list used as the reference dictionary
    LYRICSCORE_<KEY>__<FIELD>    Nested settings (e.g., LYRICSCORE_CLOUD__WIDTH)
";

/// Command-line interface definition for lyricscore.
#[derive(Parser)]
#[command(name = "lyricscore")]
#[command(about = "Scrape song lyrics and grade how hard they are to read", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Scrape an artist's lyrics and classify their difficulty
    Fetch(commands::fetch::FetchArgs),

    /// Classify local lyric files
    Classify(commands::classify::ClassifyArgs),

    /// Print a lyric with frequent and rare words marked
    Highlight(commands::highlight::HighlightArgs),

    /// Render a word cloud from local lyric files
    Cloud(commands::cloud::CloudArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
