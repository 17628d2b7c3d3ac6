//! Space cleanup.

use std::sync::LazyLock;

use regex::Regex;

static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new("[ ]+").expect("valid regex"));

/// Collapse every run of literal spaces into one space.
///
/// Only `' '` is touched: tabs and newlines survive as they are, and a
/// leading or trailing run shrinks to a single space instead of being
/// trimmed.
pub fn collapse_spaces(text: &str) -> String {
    SPACE_RUN.replace_all(text, " ").into_owned()
}
