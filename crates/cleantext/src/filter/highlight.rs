//! Highlighting of placeholders in censored text.

use regex::RegexBuilder;

use super::words::CensorStyle;

/// ANSI sequence opening a bold red span.
pub const ANSI_OPEN: &str = "\x1b[1;31m";

/// ANSI sequence resetting all attributes.
pub const ANSI_CLOSE: &str = "\x1b[0m";

/// Wrap every occurrence of the style's placeholder in `open` and `close`.
///
/// Occurrences are found case-insensitively, so placeholders that were
/// already present in the original text are marked as well.
#[must_use]
pub fn highlight_placeholders(
    censored_text: &str,
    style: CensorStyle,
    open: &str,
    close: &str,
) -> String {
    let placeholder = style.replacement();
    let regex = match RegexBuilder::new(&regex::escape(placeholder))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => regex,
        Err(e) => {
            tracing::warn!(placeholder, error = %e, "Cannot highlight placeholder");
            return censored_text.to_string();
        }
    };

    regex
        .replace_all(censored_text, |caps: &regex::Captures<'_>| {
            format!("{open}{}{close}", &caps[0])
        })
        .into_owned()
}
