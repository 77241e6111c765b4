//! Diagnostics for the `cleantext` binary.
//!
//! Filtered text goes to stdout and may be piped into a file, so every log
//! line is sent to stderr instead.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How chatty the binary is, set by `-q` and `-v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// `-q`: errors only.
    Quiet,
    /// No flag: written files and empty-input warnings.
    #[default]
    Normal,
    /// `-v`: match counts per filter run.
    Verbose,
    /// `-vv`: every individual match.
    Trace,
}

impl Verbosity {
    /// The most detailed level shown at this verbosity.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Install the stderr subscriber for the `cleantext` target.
///
/// A `RUST_LOG` directive replaces the level picked from `verbosity`, which
/// also makes it possible to see logs from dependencies. Later calls are
/// no-ops.
///
/// ```no_run
/// use cleantext::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let directive = format!("cleantext={}", verbosity.to_level_filter());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    // A subscriber may already be set, e.g. by a test harness.
    let _ = subscriber.try_init();
}

/// Route warnings to the test output capture.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
