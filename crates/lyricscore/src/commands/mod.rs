//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{info, warn};

use lyricscore_core::results::CSV_HEADERS;
use lyricscore_core::{
    Config, Difficulty, Highlight, ReferenceDictionary, ResultsTable, Session, WordCloud,
};

pub mod classify;
pub mod cloud;
pub mod fetch;
pub mod highlight;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

/// Notice shown when there is nothing to classify.
pub const AWAITING_LYRICS: &str = "Awaiting lyrics: nothing has been extracted yet.";

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Load lyric files into a session keyed by file name.
pub fn load_lyric_files(files: &[Utf8PathBuf], max_bytes: Option<usize>) -> anyhow::Result<Session> {
    let mut session = Session::new();
    for file in files {
        let text = read_input_file(file, max_bytes)?;
        let key = file.file_name().unwrap_or(file.as_str());
        if session.insert(key, text).is_some() {
            warn!(file = %file, "duplicate file name, keeping the last one");
        }
    }
    Ok(session)
}

/// Find a lyric by key, by key without `.txt`, or case-insensitively.
pub fn find_lyric<'a>(session: &'a Session, track: &str) -> Option<(&'a str, &'a str)> {
    let wanted = track.trim();
    let with_ext = format!("{wanted}.txt");
    session
        .iter()
        .find(|(key, _)| *key == wanted || *key == with_ext)
        .or_else(|| {
            session.iter().find(|(key, _)| {
                key.eq_ignore_ascii_case(wanted) || key.eq_ignore_ascii_case(&with_ext)
            })
        })
}

/// Output options shared by `fetch` and `classify`.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Only show tracks whose name contains this text (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Only show tracks with this difficulty
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Write the shown results to a CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<Utf8PathBuf>,

    /// Write an SVG word cloud of all lyrics
    #[arg(long, value_name = "FILE")]
    pub cloud: Option<Utf8PathBuf>,

    /// Print one lyric with frequent and rare words marked
    #[arg(long, value_name = "TRACK")]
    pub highlight: Option<String>,
}

#[derive(Serialize)]
struct SessionReport<'a> {
    lyrics: usize,
    results: &'a ResultsTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight: Option<Highlight>,
}

/// Classify a session and present the results as requested.
pub fn present(
    session: &Session,
    output: &OutputArgs,
    global_json: bool,
    config: &Config,
    dictionary: &ReferenceDictionary,
) -> anyhow::Result<()> {
    if session.is_empty() {
        if global_json {
            let report = SessionReport {
                lyrics: 0,
                results: &ResultsTable::default(),
                message: Some(AWAITING_LYRICS),
                highlight: None,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", AWAITING_LYRICS.yellow());
        }
        return Ok(());
    }

    let table = session
        .score_all(dictionary, &config.thresholds)
        .filter(output.name.as_deref(), output.difficulty);

    let highlight = match output.highlight.as_deref() {
        Some(track) => {
            let (_, text) = find_lyric(session, track).with_context(|| {
                format!(
                    "no lyric named {track:?}; available: {}",
                    session.keys().collect::<Vec<_>>().join(", ")
                )
            })?;
            Some(lyricscore_core::highlight(
                text,
                dictionary,
                config.frequent_words,
            ))
        }
        None => None,
    };

    if let Some(ref path) = output.csv {
        write_csv(&table, path)?;
    }
    if let Some(ref path) = output.cloud {
        let cloud = WordCloud::generate(&session.concatenated_text(), &config.cloud);
        if cloud.is_empty() {
            warn!("no words to plot, skipping word cloud");
        } else {
            write_file(path, &cloud.to_svg())?;
            info!(path = %path, words = cloud.words.len(), "word cloud written");
        }
    }

    if global_json {
        let report = SessionReport {
            lyrics: session.len(),
            results: &table,
            message: None,
            highlight,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&table, session.len());
        if let Some(ref h) = highlight {
            println!();
            highlight::print_highlight(h);
        }
    }
    Ok(())
}

/// Write a results table as CSV.
pub fn write_csv(table: &ResultsTable, path: &Utf8Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(path.as_std_path())
        .with_context(|| format!("failed to create {path}"))?;
    table
        .write_csv(std::io::BufWriter::new(file))
        .with_context(|| format!("failed to write {path}"))?;
    info!(path = %path, rows = table.len(), "results exported");
    Ok(())
}

/// Write text to a file, with the path in the error.
pub fn write_file(path: &Utf8Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path.as_std_path(), content).with_context(|| format!("failed to write {path}"))
}

fn paint_difficulty(d: Difficulty, width: usize) -> String {
    let padded = format!("{:<width$}", d.as_str());
    match d {
        Difficulty::Easy => padded.green().to_string(),
        Difficulty::Medium => padded.yellow().to_string(),
        Difficulty::Hard => padded.red().to_string(),
    }
}

/// Print the results as an aligned table followed by a per-label summary.
pub fn print_table(table: &ResultsTable, total: usize) {
    let name_width = table
        .iter()
        .map(|r| r.track_name.chars().count())
        .chain(std::iter::once(CSV_HEADERS[0].len()))
        .max()
        .unwrap_or(0);
    let widths = [
        name_width,
        CSV_HEADERS[1].len(),
        CSV_HEADERS[2].len(),
        CSV_HEADERS[3].len(),
        CSV_HEADERS[4].len(),
    ];

    let header = CSV_HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.bold());

    for row in table {
        println!(
            "{:<w0$}  {}  {:>w2$.2}  {:>w3$.2}  {:>w4$.2}",
            row.track_name,
            paint_difficulty(row.difficulty, widths[1]),
            row.rare_ratio,
            row.avg_sentence_length,
            row.readability,
            w0 = widths[0],
            w2 = widths[2],
            w3 = widths[3],
            w4 = widths[4],
        );
    }

    let counts = table
        .counts()
        .iter()
        .map(|(d, n)| format!("{n} {d}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!();
    println!(
        "{} {} of {} lyrics ({counts})",
        "Shown:".dimmed(),
        table.len(),
        total
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn oversized_input_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("big.txt")).unwrap();
        fs::write(&path, "la la la la").unwrap();

        let err = read_input_file(&path, Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert!(read_input_file(&path, None).is_ok());
    }

    #[test]
    fn lyric_files_are_keyed_by_file_name() {
        let tmp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        fs::write(dir.join("b.txt"), "bee").unwrap();
        fs::write(dir.join("a.txt"), "ay").unwrap();

        let session = load_lyric_files(&[dir.join("b.txt"), dir.join("a.txt")], None).unwrap();
        assert_eq!(session.keys().collect::<Vec<_>>(), vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn find_lyric_accepts_stem_and_any_case() {
        let mut session = Session::new();
        session.insert("Tempo Perdido.txt", "x");
        assert!(find_lyric(&session, "Tempo Perdido.txt").is_some());
        assert!(find_lyric(&session, "Tempo Perdido").is_some());
        assert!(find_lyric(&session, "tempo perdido").is_some());
        assert!(find_lyric(&session, "Tempo").is_none());
    }
}
