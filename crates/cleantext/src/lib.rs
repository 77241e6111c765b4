//! `cleantext` - Lexical profanity filter for plain text
//!
//! This library provides a whole-word, case-insensitive filter over a fixed
//! word list, plus the configuration, logging and text I/O used by the
//! `cleantext` command-line tool.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod io;
pub mod logging;

pub use config::Config;
pub use error::{Error, Result};
pub use filter::{filter, CensorStyle, FilterResult, ProfanityFilter};
pub use io::{OutputSink, TextSource};
pub use logging::init_logging;
