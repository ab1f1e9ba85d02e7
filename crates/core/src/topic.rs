//! Goal-title parsing and topic normalization.
//!
//! The normalization here is a narrow heuristic (per-word capitalization,
//! hyphen splitting, "List" -> "Lists"), not general pluralization. It is
//! kept behind this module so it can be replaced with a lookup table without
//! touching callers.

use std::sync::LazyLock;

use regex::Regex;

/// Leading "Master" filler, with any whitespace that follows it.
static MASTER_FILLER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bmaster\b\s*").unwrap());

/// Standalone "and" acting as a topic separator.
static AND_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s*\band\b\s*").unwrap());

/// Singular word "List" after capitalization.
static LIST_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bList\b").unwrap());

/// Splits a goal title into normalized topic names, preserving order.
///
/// Filler words are dropped ("Master", separator "and"), the remainder is
/// split on commas, and each token is normalized. An empty result means the
/// title held nothing but fillers.
#[must_use]
pub fn parse_topics(title: &str) -> Vec<String> {
    let stripped = MASTER_FILLER.replace(title, "");
    let comma_separated = AND_SEPARATOR.replace_all(&stripped, ",");
    comma_separated
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(normalize_topic)
        .collect()
}

/// Normalizes one topic token: hyphens become spaces, each word is
/// capitalized, and a singular "List" becomes "Lists". Idempotent, so
/// already-normalized names pass through unchanged.
#[must_use]
pub fn normalize_topic(raw: &str) -> String {
    let spaced = raw.replace('-', " ");
    let capitalized = spaced
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ");
    LIST_WORD.replace(&capitalized, "Lists").into_owned()
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
