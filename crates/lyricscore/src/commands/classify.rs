//! Classify command: grade local lyric files.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use lyricscore_core::{Config, ReferenceDictionary};

use super::{OutputArgs, load_lyric_files, present};

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Lyric files to classify; each file name becomes the track name.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Classify lyric files and present the results.
#[instrument(name = "cmd_classify", skip_all, fields(files = args.files.len()))]
pub fn cmd_classify(
    args: ClassifyArgs,
    global_json: bool,
    config: &Config,
    dictionary: &ReferenceDictionary,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, "executing classify command");

    let session = load_lyric_files(&args.files, max_input_bytes)?;
    present(&session, &args.output, global_json, config, dictionary)
}
