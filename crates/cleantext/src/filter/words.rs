//! Built-in word list and censor styles.
//!
//! Both tables are fixed at build time. The word list holds lowercase terms
//! only; matching against it is case-insensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The built-in list of profane terms.
const WORD_LIST: &[&str] = &[
    "idiot", "stupid", "damn", "hell", "shit", "fuck", "bitch", "ass", "asshole", "bastard",
    "crap", "piss", "moron", "dumb", "retard", "gay", "lame", "suck", "hate", "kill", "die",
    "murder", "rape", "sex", "porn", "nude", "naked",
];

/// Get the built-in word list.
#[must_use]
pub fn word_list() -> &'static [&'static str] {
    WORD_LIST
}

/// How matched words are replaced in the censored text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CensorStyle {
    /// Replace each match with a fixed mask of asterisks.
    Asterisk,

    /// Replace each match with a bracketed label.
    #[default]
    Censored,

    /// Replace each match with a symbolic marker.
    Emoji,
}

impl CensorStyle {
    /// Every available style, in menu order.
    pub const ALL: [CensorStyle; 3] = [Self::Asterisk, Self::Censored, Self::Emoji];

    /// The literal string substituted for every match.
    #[must_use]
    pub fn replacement(self) -> &'static str {
        match self {
            Self::Asterisk => "****",
            Self::Censored => "[CENSORED]",
            Self::Emoji => "\u{1f910}",
        }
    }

    /// The configuration name of this style.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Asterisk => "asterisk",
            Self::Censored => "censored",
            Self::Emoji => "emoji",
        }
    }
}

impl fmt::Display for CensorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CensorStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown censor style: {s}"))
    }
}
