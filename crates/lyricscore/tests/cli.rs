//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Classify Command
// =============================================================================

const EASY_LYRIC: &str = "The sun is up. We go out and play.\nWe sing all day.";
const HARD_LYRIC: &str = "Obfuscating perspicacious interlocutors promulgate \
    recondite epistemological quandaries notwithstanding ineffable \
    sesquipedalian verbosity throughout labyrinthine colloquia";

fn lyrics_dir() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("easy.txt"), EASY_LYRIC).unwrap();
    std::fs::write(tmp.path().join("hard.txt"), HARD_LYRIC).unwrap();
    tmp
}

#[test]
fn classify_prints_table() {
    let tmp = lyrics_dir();
    cmd()
        .current_dir(tmp.path())
        .args(["--color", "never", "classify", "easy.txt", "hard.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Track Name"))
        .stdout(predicate::str::contains("easy.txt"))
        .stdout(predicate::str::contains("Easy"))
        .stdout(predicate::str::contains("Hard"));
}

#[test]
fn classify_json_lists_rows_in_argument_order() {
    let tmp = lyrics_dir();
    let output = cmd()
        .current_dir(tmp.path())
        .args(["classify", "hard.txt", "easy.txt", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["lyrics"], 2);
    assert_eq!(json["results"][0]["track_name"], "hard.txt");
    assert_eq!(json["results"][0]["difficulty"], "Hard");
    assert_eq!(json["results"][1]["track_name"], "easy.txt");
    assert_eq!(json["results"][1]["difficulty"], "Easy");
}

#[test]
fn classify_difficulty_filter_limits_rows() {
    let tmp = lyrics_dir();
    let output = cmd()
        .current_dir(tmp.path())
        .args([
            "classify",
            "easy.txt",
            "hard.txt",
            "--difficulty",
            "hard",
            "--json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = json["results"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["track_name"], "hard.txt");
}

#[test]
fn classify_exports_csv_and_cloud() {
    let tmp = lyrics_dir();
    cmd()
        .current_dir(tmp.path())
        .args([
            "classify",
            "easy.txt",
            "hard.txt",
            "--csv",
            "results.csv",
            "--cloud",
            "cloud.svg",
        ])
        .assert()
        .success();

    let csv = std::fs::read_to_string(tmp.path().join("results.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Track Name,Difficulty,% Rare Words,Avg Words/Sentence,Readability (Flesch)")
    );
    assert!(lines.next().unwrap().starts_with("easy.txt,Easy,"));
    assert!(lines.next().unwrap().starts_with("hard.txt,Hard,"));

    let svg = std::fs::read_to_string(tmp.path().join("cloud.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
}

#[test]
fn classify_with_highlight_marks_track() {
    let tmp = lyrics_dir();
    let output = cmd()
        .current_dir(tmp.path())
        .args(["classify", "easy.txt", "--highlight", "easy", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json["highlight"]["segments"].as_array().is_some());
}

#[test]
fn classify_missing_file_fails() {
    cmd()
        .args(["classify", "/nonexistent/song.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn classify_requires_a_file() {
    cmd()
        .arg("classify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn classify_respects_input_limit() {
    let tmp = lyrics_dir();
    std::fs::write(tmp.path().join(".lyricscore.toml"), "max_input_bytes = 10\n").unwrap();
    cmd()
        .current_dir(tmp.path())
        .args(["classify", "easy.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Highlight & Cloud Commands
// =============================================================================

#[test]
fn highlight_html_marks_rare_words() {
    let tmp = lyrics_dir();
    cmd()
        .current_dir(tmp.path())
        .args(["highlight", "hard.txt", "--html", "--frequent", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<span style='color:red'>"));
}

#[test]
fn cloud_writes_svg() {
    let tmp = lyrics_dir();
    cmd()
        .current_dir(tmp.path())
        .args([
            "cloud", "easy.txt", "hard.txt", "--output", "out.svg", "--width", "400",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("out.svg"));

    let svg = std::fs::read_to_string(tmp.path().join("out.svg")).unwrap();
    assert!(svg.contains("width=\"400\""));
}

#[test]
fn cloud_requires_output() {
    let tmp = lyrics_dir();
    cmd()
        .current_dir(tmp.path())
        .args(["cloud", "easy.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

// =============================================================================
// Fetch Command
// =============================================================================

#[test]
fn fetch_malformed_url_fails_with_awaiting_notice() {
    let output = cmd()
        .args(["fetch", "not a url", "--json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to fetch"));

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["lyrics"], 0);
    assert!(json["message"].as_str().unwrap().contains("Awaiting"));
}

#[test]
fn fetch_help_lists_output_options() {
    cmd()
        .args(["fetch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--csv"))
        .stdout(predicate::str::contains("--difficulty"))
        .stdout(predicate::str::contains("--highlight"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
