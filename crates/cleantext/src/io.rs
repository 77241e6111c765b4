//! Text sources and output sinks.
//!
//! The filter only ever sees strings. This module gets text in from a
//! command-line argument, a plain-text file or stdin, and gets the censored
//! text out to stdout or a file.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};

/// Where the text to filter comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Text given directly.
    Inline(String),
    /// A plain-text file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl TextSource {
    /// Pick a source from command-line arguments.
    ///
    /// Inline text wins over a file; with neither, stdin is used.
    #[must_use]
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, file) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }

    /// Read the full text from this source.
    ///
    /// # Errors
    ///
    /// Returns an error if a file source does not have an allowed plain-text
    /// extension, is not valid UTF-8, or cannot be read, or if stdin fails.
    pub fn read(&self, config: &Config) -> Result<String> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::File(path) => read_text_file(path, config),
            Self::Stdin => read_text(std::io::stdin().lock()),
        }
    }

    /// Short description for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Inline(_) => "argument".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "stdin".to_string(),
        }
    }
}

/// Read a plain-text file, rejecting anything that isn't one.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFileType`] for disallowed extensions,
/// [`Error::InvalidEncoding`] for non-UTF-8 content and [`Error::FileRead`]
/// when the file cannot be read.
pub fn read_text_file(path: &Path, config: &Config) -> Result<String> {
    if !config.is_allowed_extension(path) {
        return Err(Error::UnsupportedFileType {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read input file");

    String::from_utf8(bytes).map_err(|_| Error::InvalidEncoding {
        path: path.to_path_buf(),
    })
}

/// Name reported for stdin in encoding errors.
const STDIN_NAME: &str = "<stdin>";

/// Read all text from a reader such as stdin.
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] if the data is not valid UTF-8, or an
/// I/O error if reading fails.
pub fn read_text(mut reader: impl Read) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidEncoding {
        path: PathBuf::from(STDIN_NAME),
    })
}

/// Where censored text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Standard output.
    Stdout,
    /// A file on disk, replaced if it exists.
    File(PathBuf),
}

impl OutputSink {
    /// Write the text to this sink.
    ///
    /// Stdout output always ends with a newline; files receive the text
    /// exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directory cannot be
    /// created, or if writing fails.
    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                write_line(&mut out, text)?;
                out.flush()?;
                Ok(())
            }
            Self::File(path) => write_text_file(path, text),
        }
    }
}

/// Write text followed by a newline unless it already ends with one.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_line(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write text to a file, creating its parent directory if needed.
///
/// # Errors
///
/// Returns [`Error::DirectoryCreate`] or [`Error::FileWrite`] on failure.
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(path, text).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "Wrote censored text");
    Ok(())
}
