//! Cloud command: render an SVG word cloud from lyric files.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use lyricscore_core::{CloudOptions, Config, WordCloud};

use super::{load_lyric_files, write_file};

/// Arguments for the `cloud` subcommand.
#[derive(Args, Debug)]
pub struct CloudArgs {
    /// Lyric files to draw from.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// SVG file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Utf8PathBuf,

    /// Canvas width in pixels (overrides config)
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels (overrides config)
    #[arg(long)]
    pub height: Option<u32>,

    /// Maximum number of words (overrides config)
    #[arg(long)]
    pub max_words: Option<usize>,
}

impl CloudArgs {
    fn options(&self, config: &CloudOptions) -> CloudOptions {
        CloudOptions {
            width: self.width.unwrap_or(config.width),
            height: self.height.unwrap_or(config.height),
            max_words: self.max_words.unwrap_or(config.max_words),
            ..config.clone()
        }
    }
}

#[derive(Serialize)]
struct CloudReport<'a> {
    output: &'a str,
    width: u32,
    height: u32,
    words: usize,
}

/// Render a word cloud of all given lyrics.
#[instrument(name = "cmd_cloud", skip_all, fields(output = %args.output))]
pub fn cmd_cloud(
    args: CloudArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(files = ?args.files, "executing cloud command");

    let options = args.options(&config.cloud);
    let session = load_lyric_files(&args.files, max_input_bytes)?;
    let cloud = WordCloud::generate(&session.concatenated_text(), &options);
    if cloud.is_empty() {
        bail!("no words to plot: the lyrics contain only stopwords or numbers");
    }
    write_file(&args.output, &cloud.to_svg())?;

    if global_json {
        let report = CloudReport {
            output: args.output.as_str(),
            width: cloud.width,
            height: cloud.height,
            words: cloud.words.len(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {} ({} words)",
            "Wrote".green(),
            args.output,
            cloud.words.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn flags_override_config() {
        let args = CloudArgs {
            files: vec![],
            output: Utf8PathBuf::from("x.svg"),
            width: Some(300),
            height: None,
            max_words: Some(5),
        };
        let opts = args.options(&CloudOptions::default());
        assert_eq!(opts.width, 300);
        assert_eq!(opts.height, CloudOptions::default().height);
        assert_eq!(opts.max_words, 5);
    }

    #[test]
    fn stopword_only_lyrics_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let song = Utf8PathBuf::try_from(tmp.path().join("song.txt")).unwrap();
        fs::write(&song, "the and of 42").unwrap();
        let args = CloudArgs {
            files: vec![song],
            output: Utf8PathBuf::try_from(tmp.path().join("c.svg")).unwrap(),
            width: None,
            height: None,
            max_words: None,
        };
        let err = cmd_cloud(args, false, &Config::default(), None).unwrap_err();
        assert!(err.to_string().contains("no words to plot"));
    }
}
