//! `cleantext` - CLI for the cleantext profanity filter
//!
//! This binary reads text from an argument, a plain-text file or stdin,
//! censors it and prints or saves the result.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use cleantext::cli::{Cli, Command, ConfigCommand, FilterCommand};
use cleantext::filter::{highlight_placeholders, word_list, ANSI_CLOSE, ANSI_OPEN};
use cleantext::io::write_line;
use cleantext::{filter, init_logging, CensorStyle, Config, FilterResult, OutputSink, TextSource};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Only commands that act on the configuration load it
    match cli.command {
        Command::Filter(filter_cmd) => handle_filter(&load_config(cli.config)?, &filter_cmd),
        Command::Words(words_cmd) => handle_words(words_cmd.json),
        Command::Styles(styles_cmd) => handle_styles(&load_config(cli.config)?, styles_cmd.json),
        Command::Config(ConfigCommand::Show { json }) => {
            handle_config_show(&load_config(cli.config)?, json)
        }
        Command::Config(ConfigCommand::Path) => {
            let path = cli.config.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
            Ok(())
        }
        Command::Config(ConfigCommand::Validate { file }) => {
            let path = file
                .or(cli.config)
                .unwrap_or_else(Config::default_config_path);
            handle_validate(&path, &mut std::io::stdout().lock())
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    Config::load_from(path).context("could not load configuration")
}

fn handle_filter(config: &Config, cmd: &FilterCommand) -> Result<()> {
    let source = TextSource::from_args(cmd.text.clone(), cmd.file.clone());
    let text = source
        .read(config)
        .with_context(|| format!("could not read input from {}", source.describe()))?;
    if text.trim().is_empty() {
        warn!(source = %source.describe(), "Input is empty, nothing to filter");
    }

    let dir = std::env::current_dir().context("could not resolve current directory")?;
    let mut out = std::io::stdout().lock();
    run_filter(config, cmd, &text, &dir, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Filter `text` and send the result where `cmd` asks.
///
/// Everything meant for the terminal is written to `out`; `--download`
/// resolves its file name against `dir`.
fn run_filter(
    config: &Config,
    cmd: &FilterCommand,
    text: &str,
    dir: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let style = cmd.resolve_style(config);
    let result = filter(text, style);
    debug!(censored = result.censored_count, "Filter finished");

    let sink = cmd.output_sink(config, dir);

    if cmd.json {
        let report = serde_json::json!({
            "style": style,
            "replacement": style.replacement(),
            "result": &result,
            "filtered_percentage": result.filtered_percentage(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        if let OutputSink::File(_) = sink {
            sink.write(&result.censored_text)?;
        }
        return Ok(());
    }

    match &sink {
        OutputSink::Stdout => {
            // Placeholders typed by the user are not censored matches
            let highlight = cmd.highlight || config.output.highlight;
            if highlight && !result.is_clean() {
                let marked =
                    highlight_placeholders(&result.censored_text, style, ANSI_OPEN, ANSI_CLOSE);
                write_line(out, &marked)?;
            } else {
                write_line(out, &result.censored_text)?;
            }
        }
        OutputSink::File(path) => {
            sink.write(&result.censored_text)?;
            writeln!(out, "Saved censored text to {}", path.display())?;
        }
    }

    if cmd.stats {
        write_stats(out, &result)?;
    }
    Ok(())
}

fn write_stats(out: &mut impl Write, result: &FilterResult) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Statistics")?;
    writeln!(out, "----------")?;
    writeln!(out, "Words:           {}", result.word_count)?;
    writeln!(out, "Censored:        {}", result.censored_count)?;
    writeln!(out, "Filtered:        {}%", result.filtered_percentage())?;
    if result.is_clean() {
        writeln!(out, "No inappropriate content detected.")?;
    } else {
        writeln!(
            out,
            "Detected words ({}): {}",
            result.censored_words.len(),
            result.censored_words.join(", ")
        )?;
    }
    Ok(())
}

fn handle_words(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(word_list())?);
    } else {
        for word in word_list() {
            println!("{word}");
        }
    }
    Ok(())
}

fn handle_styles(config: &Config, json: bool) -> Result<()> {
    if json {
        let styles: Vec<_> = CensorStyle::ALL
            .iter()
            .map(|style| {
                serde_json::json!({
                    "name": style,
                    "replacement": style.replacement(),
                    "default": *style == config.filter.style,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&styles)?);
    } else {
        for style in CensorStyle::ALL {
            let marker = if style == config.filter.style { "*" } else { " " };
            println!("{marker} {:<10} {}", style.name(), style.replacement());
        }
    }
    Ok(())
}

fn handle_config_show(config: &Config, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        println!("Current Configuration");
        println!("=====================");
        println!();
        println!("[Filter]");
        println!("  Style:              {}", config.filter.style);
        println!();
        println!("[Input]");
        println!(
            "  Allowed extensions: {}",
            config.input.allowed_extensions.join(", ")
        );
        println!();
        println!("[Output]");
        println!("  Download file name: {}", config.output.download_file_name);
        println!("  Highlight:          {}", config.output.highlight);
    }
    Ok(())
}

/// Check one configuration file, failing if it is missing or invalid.
fn handle_validate(path: &Path, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Validating configuration: {}", path.display())?;
    Config::validate_file(path)
        .with_context(|| format!("configuration {} is not valid", path.display()))?;
    writeln!(out, "Configuration is valid.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleantext::cli::StyleArg;
    use std::fs;

    fn filter_command() -> FilterCommand {
        FilterCommand {
            text: None,
            file: None,
            style: None,
            output: None,
            download: false,
            json: false,
            highlight: false,
            stats: false,
        }
    }

    fn run(config: &Config, cmd: &FilterCommand, text: &str, dir: &Path) -> String {
        let mut out = Vec::new();
        run_filter(config, cmd, text, dir, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_filter_prints_censored_text() {
        let dir = tempfile::tempdir().unwrap();
        let output = run(&Config::default(), &filter_command(), "that is stupid", dir.path());
        assert_eq!(output, "that is [CENSORED]\n");
    }

    #[test]
    fn test_run_filter_download_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = FilterCommand {
            download: true,
            ..filter_command()
        };

        let output = run(&Config::default(), &cmd, "what the hell", dir.path());

        let saved = dir.path().join("cleaned-text.txt");
        assert_eq!(fs::read_to_string(&saved).unwrap(), "what the [CENSORED]");
        assert!(output.starts_with("Saved censored text to"));
        assert!(output.contains("cleaned-text.txt"));
    }

    #[test]
    fn test_run_filter_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/clean.txt");
        let cmd = FilterCommand {
            output: Some(target.clone()),
            style: Some(StyleArg::Asterisk),
            ..filter_command()
        };

        let output = run(&Config::default(), &cmd, "damn it", dir.path());

        assert_eq!(fs::read_to_string(&target).unwrap(), "**** it");
        assert!(!output.contains("**** it"));
        assert!(!dir.path().join("cleaned-text.txt").exists());
    }

    #[test]
    fn test_run_filter_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = FilterCommand {
            json: true,
            ..filter_command()
        };

        let output = run(&Config::default(), &cmd, "I hate hell", dir.path());
        let report: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(report["style"], "censored");
        assert_eq!(report["replacement"], "[CENSORED]");
        assert_eq!(report["result"]["censored_count"], 2);
        assert_eq!(report["result"]["censored_words"][0], "hate");
        assert_eq!(report["result"]["censored_text"], "I [CENSORED] [CENSORED]");
        assert_eq!(report["filtered_percentage"], 67);
    }

    #[test]
    fn test_run_filter_json_with_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report.txt");
        let cmd = FilterCommand {
            json: true,
            output: Some(target.clone()),
            ..filter_command()
        };

        let output = run(&Config::default(), &cmd, "so dumb", dir.path());
        let report: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(report["result"]["censored_count"], 1);
        assert_eq!(fs::read_to_string(&target).unwrap(), "so [CENSORED]");
    }

    #[test]
    fn test_run_filter_highlight_skips_clean_text() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = FilterCommand {
            style: Some(StyleArg::Asterisk),
            highlight: true,
            ..filter_command()
        };

        let output = run(&Config::default(), &cmd, "no bad ****", dir.path());

        assert_eq!(output, "no bad ****\n");
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_run_filter_highlight_marks_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = FilterCommand {
            style: Some(StyleArg::Asterisk),
            highlight: true,
            ..filter_command()
        };

        let output = run(&Config::default(), &cmd, "what the hell", dir.path());

        assert_eq!(output, format!("what the {ANSI_OPEN}****{ANSI_CLOSE}\n"));
    }

    #[test]
    fn test_run_filter_highlight_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output.highlight = true;

        let output = run(&config, &filter_command(), "you moron", dir.path());

        assert!(output.contains(ANSI_OPEN));
    }

    #[test]
    fn test_run_filter_stats() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = FilterCommand {
            stats: true,
            ..filter_command()
        };

        let output = run(&Config::default(), &cmd, "damn DAMN fine", dir.path());

        assert!(output.contains("Words:           3"));
        assert!(output.contains("Censored:        2"));
        assert!(output.contains("Filtered:        67%"));
        assert!(output.contains("Detected words (1): damn"));
    }

    #[test]
    fn test_run_filter_stats_clean() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = FilterCommand {
            stats: true,
            ..filter_command()
        };

        let output = run(&Config::default(), &cmd, "hello world", dir.path());

        assert!(output.contains("No inappropriate content detected."));
    }

    #[test]
    fn test_validate_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();

        let err = handle_validate(&dir.path().join("missing.toml"), &mut out).unwrap_err();

        assert!(format!("{err:#}").contains("not found"));
        assert!(!String::from_utf8(out).unwrap().contains("is valid"));
    }

    #[test]
    fn test_validate_invalid_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[filter]\nstyle = \"sparkles\"\n").unwrap();
        let mut out = Vec::new();

        assert!(handle_validate(&path, &mut out).is_err());
        assert!(!String::from_utf8(out).unwrap().contains("is valid"));
    }

    #[test]
    fn test_validate_good_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("good.toml");
        fs::write(&path, "[output]\nhighlight = true\n").unwrap();
        let mut out = Vec::new();

        handle_validate(&path, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Validating configuration"));
        assert!(output.ends_with("Configuration is valid.\n"));
    }
}
