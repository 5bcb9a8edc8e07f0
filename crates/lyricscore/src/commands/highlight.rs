//! Highlight command: mark frequent and rare words in one lyric.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lyricscore_core::{Config, Highlight, ReferenceDictionary, SegmentKind, highlight};

use super::read_input_file;

/// Arguments for the `highlight` subcommand.
#[derive(Args, Debug)]
pub struct HighlightArgs {
    /// Lyric file to highlight.
    pub file: Utf8PathBuf,

    /// Emit an HTML fragment instead of terminal colors
    #[arg(long)]
    pub html: bool,

    /// How many of the most frequent words to mark (overrides config)
    #[arg(long, value_name = "N")]
    pub frequent: Option<usize>,
}

/// Print a highlighted lyric: frequent words in bold green, rare words in bold red.
pub fn print_highlight(h: &Highlight) {
    let mut out = String::new();
    for segment in &h.segments {
        match segment.kind {
            SegmentKind::Plain => out.push_str(&segment.text),
            SegmentKind::Frequent => {
                out.push_str(&segment.text.green().bold().to_string());
            }
            SegmentKind::Rare => out.push_str(&segment.text.red().bold().to_string()),
        }
    }
    println!("{out}");
}

/// Highlight a lyric file.
#[instrument(name = "cmd_highlight", skip_all, fields(file = %args.file))]
pub fn cmd_highlight(
    args: HighlightArgs,
    global_json: bool,
    config: &Config,
    dictionary: &ReferenceDictionary,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(html = args.html, frequent = ?args.frequent, "executing highlight command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let marked = highlight(
        &content,
        dictionary,
        args.frequent.unwrap_or(config.frequent_words),
    );
    debug!(
        frequent = marked.count(SegmentKind::Frequent),
        rare = marked.count(SegmentKind::Rare),
        "lyric highlighted"
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&marked)?);
    } else if args.html {
        println!("{}", marked.to_html());
    } else {
        print_highlight(&marked);
    }
    Ok(())
}
