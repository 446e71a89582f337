//! Line-break hygiene for catalog values.
//!
//! Every generated definition occupies exactly one line, so a line break in a
//! source value would corrupt the output for every language. Target values are
//! repaired instead of rejected.

use std::{borrow::Cow, sync::LazyLock};

use anyhow::{Result, bail};
use regex::Regex;

use super::Catalog;

static LINE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n\r]").unwrap());

pub fn contains_line_break(value: &str) -> bool {
    LINE_BREAK_REGEX.is_match(value)
}

/// Replace each `\n` or `\r` with a single space.
pub fn collapse_line_breaks(value: &str) -> Cow<'_, str> {
    LINE_BREAK_REGEX.replace_all(value, " ")
}

/// Reject a source catalog that contains a multi-line value.
///
/// Keys are checked in sorted order so the reported key is stable when
/// several values are malformed.
pub fn validate_source(source: &Catalog) -> Result<()> {
    for key in source.sorted_keys() {
        if source.get(key).is_some_and(contains_line_break) {
            bail!(
                "definition of {} in {} contained a newline character.",
                key,
                source.file_path
            );
        }
    }
    Ok(())
}

/// Whether a key fits in 7-bit ASCII.
pub fn is_ascii_key(key: &str) -> bool {
    key.is_ascii()
}
