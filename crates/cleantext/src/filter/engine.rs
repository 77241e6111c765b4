//! Profanity filter engine.
//!
//! This module provides the filter that scans text for words from the
//! built-in list and replaces every whole-word match with the placeholder
//! of the selected censor style.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::words::{word_list, CensorStyle};

/// Result of filtering a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult {
    /// The input text, unmodified.
    pub original_text: String,

    /// The input text with every match replaced.
    pub censored_text: String,

    /// Unique matched terms, lowercased, in order of first occurrence.
    pub censored_words: Vec<String>,

    /// Total number of matches, duplicates included.
    pub censored_count: usize,

    /// Number of whitespace-separated words in the input.
    pub word_count: usize,
}

impl FilterResult {
    /// A result with no matches and no words.
    fn untouched(text: &str) -> Self {
        Self {
            original_text: text.to_string(),
            censored_text: text.to_string(),
            censored_words: Vec::new(),
            censored_count: 0,
            word_count: 0,
        }
    }

    /// Check whether nothing was censored.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.censored_count == 0
    }

    /// Share of censored matches relative to the word count, as a rounded
    /// percentage.
    ///
    /// Returns 0 when the input has no words. The value is not clamped: text
    /// such as `"damn,damn"` is a single word with two matches and yields 200.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn filtered_percentage(&self) -> u64 {
        if self.word_count == 0 {
            return 0;
        }
        (self.censored_count as f64 / self.word_count as f64 * 100.0).round() as u64
    }
}

/// Whole-word, case-insensitive filter over the built-in word list.
#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    regex: Regex,
}

impl ProfanityFilter {
    /// Create a new filter, compiling the combined word pattern.
    ///
    /// # Panics
    ///
    /// Panics if the built-in word list produces an invalid regex.
    #[must_use]
    pub fn new() -> Self {
        let pattern = build_pattern(word_list());
        Self {
            regex: Regex::new(&pattern).expect("Invalid word list pattern"),
        }
    }

    /// Check whether the text contains any listed word.
    #[must_use]
    pub fn is_profane(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Filter text, replacing every match with the style's placeholder.
    #[must_use]
    pub fn filter(&self, text: &str, style: CensorStyle) -> FilterResult {
        if text.trim().is_empty() {
            trace!("Skipping blank input");
            return FilterResult::untouched(text);
        }

        let word_count = text.split_whitespace().count();

        let mut seen = HashSet::new();
        let mut censored_words = Vec::new();
        let mut censored_count = 0;
        for found in self.regex.find_iter(text) {
            let term = found.as_str().to_ascii_lowercase();
            trace!(term = %term, offset = found.start(), "Matched word");
            censored_count += 1;
            if seen.insert(term.clone()) {
                censored_words.push(term);
            }
        }

        let censored_text = if censored_count == 0 {
            text.to_string()
        } else {
            self.regex
                .replace_all(text, NoExpand(style.replacement()))
                .into_owned()
        };

        debug!(
            style = %style,
            word_count,
            censored_count,
            unique = censored_words.len(),
            "Filtered text"
        );

        FilterResult {
            original_text: text.to_string(),
            censored_text,
            censored_words,
            censored_count,
            word_count,
        }
    }
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Join the words into one alternation bounded by ASCII word boundaries.
///
/// Boundaries on both sides make the alternation order irrelevant: a shorter
/// term that is a prefix of a longer one cannot match inside the longer one.
fn build_pattern(words: &[&str]) -> String {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i-u)\b(?:{alternation})\b")
}

fn shared() -> &'static ProfanityFilter {
    static FILTER: OnceLock<ProfanityFilter> = OnceLock::new();
    FILTER.get_or_init(ProfanityFilter::new)
}

/// Filter text with the shared, lazily compiled filter.
///
/// # Examples
///
/// ```
/// use cleantext::filter::{filter, CensorStyle};
///
/// let result = filter("that is stupid", CensorStyle::Censored);
/// assert_eq!(result.censored_text, "that is [CENSORED]");
/// assert_eq!(result.censored_words, vec!["stupid"]);
/// ```
#[must_use]
pub fn filter(text: &str, style: CensorStyle) -> FilterResult {
    shared().filter(text, style)
}
