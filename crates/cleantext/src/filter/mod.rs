//! Profanity filtering for plain text.
//!
//! This module provides the filter engine:
//!
//! - **Fixed word list**: a small built-in list of lowercase terms, matched
//!   as whole words and case-insensitively.
//!
//! - **Censor styles**: every match is replaced with the same literal
//!   placeholder, chosen from a fixed menu of styles.
//!
//! - **Match statistics**: total matches, unique matched terms and the word
//!   count of the input.
//!
//! # Example
//!
//! ```
//! use cleantext::filter::{filter, CensorStyle};
//!
//! let result = filter("I hate hell", CensorStyle::Asterisk);
//!
//! assert_eq!(result.censored_text, "I **** ****");
//! assert_eq!(result.censored_words, vec!["hate", "hell"]);
//! assert_eq!(result.censored_count, 2);
//! assert_eq!(result.word_count, 3);
//!
//! // Words that merely contain a listed term are left alone
//! assert!(filter("hello", CensorStyle::Asterisk).is_clean());
//! ```

mod engine;
mod highlight;
mod words;

pub use engine::{filter, FilterResult, ProfanityFilter};
pub use highlight::{highlight_placeholders, ANSI_CLOSE, ANSI_OPEN};
pub use words::{word_list, CensorStyle};
