//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};

use crate::config::Config;
use crate::filter::CensorStyle;
use crate::io::OutputSink;

/// Filter command arguments.
#[derive(Debug, Args)]
pub struct FilterCommand {
    /// Text to filter (reads stdin when neither TEXT nor --file is given)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read text from a plain-text file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Censor style (defaults to the configured style)
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Write the censored text to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Save the censored text under the configured download file name
    #[arg(short, long, conflicts_with = "output")]
    pub download: bool,

    /// Print the full result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Highlight placeholders in the printed text
    #[arg(long)]
    pub highlight: bool,

    /// Print match statistics after the text
    #[arg(long)]
    pub stats: bool,
}

impl FilterCommand {
    /// The style to filter with: the flag if given, else the configured one.
    #[must_use]
    pub fn resolve_style(&self, config: &Config) -> CensorStyle {
        self.style.map_or(config.filter.style, CensorStyle::from)
    }

    /// Where the censored text is written.
    ///
    /// `--output` wins, `--download` saves under the configured file name in
    /// `dir`, and stdout is used otherwise.
    #[must_use]
    pub fn output_sink(&self, config: &Config, dir: &Path) -> OutputSink {
        if let Some(path) = &self.output {
            OutputSink::File(path.clone())
        } else if self.download {
            OutputSink::File(config.download_path(dir))
        } else {
            OutputSink::Stdout
        }
    }
}

/// Words command arguments.
#[derive(Debug, Args)]
pub struct WordsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Styles command arguments.
#[derive(Debug, Args)]
pub struct StylesCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Censor style argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Replace matches with ****
    Asterisk,
    /// Replace matches with [CENSORED]
    Censored,
    /// Replace matches with an emoji
    Emoji,
}

impl From<StyleArg> for CensorStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Asterisk => Self::Asterisk,
            StyleArg::Censored => Self::Censored,
            StyleArg::Emoji => Self::Emoji,
        }
    }
}
