//! Info command implementation

use clap::Args;
use lyricscore_core::Thresholds;
use lyricscore_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    /// Word list path, or "built-in".
    dictionary: String,
    base_url: String,
    timeout_secs: u64,
    thresholds: Thresholds,
    frequent_words: usize,
    cloud_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            dictionary: config
                .dictionary
                .as_ref()
                .map_or_else(|| "built-in".to_string(), |p| p.to_string()),
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
            thresholds: config.thresholds,
            frequent_words: config.frequent_words,
            cloud_size: format!("{}x{}", config.cloud.width, config.cloud.height),
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources);
    let full_info = FullInfo {
        package: info,
        config: config_info,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.bold(),
            full_info.package.version.green()
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!("{}: {}", "License".dimmed(), full_info.package.license);
        }
        if !full_info.package.repository.is_empty() {
            println!(
                "{}: {}",
                "Repository".dimmed(),
                full_info.package.repository.cyan()
            );
        }
        if !full_info.package.homepage.is_empty() {
            println!(
                "{}: {}",
                "Homepage".dimmed(),
                full_info.package.homepage.cyan()
            );
        }

        // Configuration section
        println!();
        println!("{}", "Configuration".bold().underline());
        if let Some(ref path) = full_info.config.config_file {
            println!("{}: {}", "Config file".dimmed(), path.cyan());
        } else {
            println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
        }
        println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
        if let Some(ref dir) = full_info.config.log_dir {
            println!("{}: {}", "Log directory".dimmed(), dir);
        }
        println!(
            "{}: {}",
            "Input limit".dimmed(),
            full_info
                .config
                .max_input_bytes
                .map_or_else(|| "disabled".to_string(), |n| format!("{n} bytes"))
        );

        println!();
        println!("{}", "Retrieval".bold().underline());
        println!("{}: {}", "Base URL".dimmed(), full_info.config.base_url.cyan());
        println!("{}: {}s", "Timeout".dimmed(), full_info.config.timeout_secs);

        let t = &full_info.config.thresholds;
        println!();
        println!("{}", "Classification".bold().underline());
        println!("{}: {}", "Dictionary".dimmed(), full_info.config.dictionary);
        print_f64("Hard: rare ratio above", t.hard_rare_ratio);
        print_f64("Hard: words/sentence above", t.hard_sentence_length);
        print_f64("Hard: readability below", t.hard_readability);
        print_f64("Medium: rare ratio above", t.medium_rare_ratio);
        print_f64("Medium: readability below", t.medium_readability);
        println!(
            "{}: {}",
            "Highlighted frequent words".dimmed(),
            full_info.config.frequent_words
        );
        println!("{}: {}", "Word cloud size".dimmed(), full_info.config.cloud_size);
    }

    Ok(())
}

fn print_f64(label: &str, value: f64) {
    println!("{}: {}", label.dimmed(), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::default()
    }

    fn test_sources() -> ConfigSources {
        ConfigSources::default()
    }

    #[test]
    fn test_cmd_info_text_succeeds() {
        assert!(cmd_info(InfoArgs::default(), false, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        assert!(cmd_info(InfoArgs::default(), true, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let config = Config::default();
        let sources = ConfigSources::default();
        let info = ConfigInfo::from_config(&config, &sources);
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.dictionary, "built-in");
        assert_eq!(info.cloud_size, "800x400");
    }

    #[test]
    fn disabled_limit_is_omitted() {
        let config = Config {
            disable_input_limit: true,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert!(info.max_input_bytes.is_none());
    }
}
