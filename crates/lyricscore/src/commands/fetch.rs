//! Fetch command: scrape an artist's lyrics, then classify them.

use std::time::Duration;

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::{debug, instrument, warn};

use lyricscore_core::{Config, ReferenceDictionary, Session, SiteClient, fetch_artist};

use super::{OutputArgs, present};

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Artist page URL (e.g. https://www.vagalume.com.br/legiao-urbana/)
    pub artist_url: String,

    /// Site root used to resolve track links (overrides config)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn create_spinner(hidden: bool) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if hidden {
        spinner.set_draw_target(ProgressDrawTarget::hidden());
        return spinner;
    }
    if let Ok(style) = ProgressStyle::default_spinner().template("{msg} {spinner} [{elapsed_precise}]")
    {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Retrieve every lyric of an artist and present the classification.
///
/// A failed retrieval is reported, but lyrics stored before the failure are
/// still classified and shown.
#[instrument(name = "cmd_fetch", skip_all, fields(artist_url = %args.artist_url))]
pub fn cmd_fetch(
    args: FetchArgs,
    global_json: bool,
    config: &Config,
    dictionary: &ReferenceDictionary,
) -> anyhow::Result<()> {
    debug!(base_url = ?args.base_url, timeout = ?args.timeout, "executing fetch command");

    let base_url = args.base_url.as_deref().unwrap_or(&config.base_url);
    let timeout = Duration::from_secs(args.timeout.unwrap_or(config.timeout_secs));
    let client = SiteClient::new(timeout).context("failed to build HTTP client")?;

    let spinner = create_spinner(global_json);
    spinner.set_message("Fetching track list");

    let mut session = Session::new();
    let outcome = fetch_artist(
        &client,
        &args.artist_url,
        base_url,
        &mut session,
        |index, total, track| {
            spinner.set_message(format!("[{}/{}] {}", index + 1, total, track.title));
        },
    );
    spinner.finish_and_clear();

    let failure = match outcome {
        Ok(stored) => {
            debug!(stored, "retrieval finished");
            None
        }
        Err(err) => {
            warn!(error = %err, stored = session.len(), "retrieval stopped early");
            Some(err)
        }
    };

    present(&session, &args.output, global_json, config, dictionary)?;

    match failure {
        Some(err) => Err(err).with_context(|| format!("failed to fetch {}", args.artist_url)),
        None => Ok(()),
    }
}
