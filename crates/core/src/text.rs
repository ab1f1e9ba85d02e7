//! Sanitizers for AI-produced text.

use std::sync::LazyLock;

use regex::Regex;

/// Markdown inline link: `[text](url)`.
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

/// Replaces residual markdown links with their link text. Applied to every
/// generated roadmap regardless of which path produced it.
#[must_use]
pub fn strip_markdown_links(text: &str) -> String {
    MARKDOWN_LINK.replace_all(text, "$1").into_owned()
}

/// Removes a surrounding ``` or ```json fence, if present, and trims.
/// Models wrap JSON payloads in fences often enough that every structured
/// response goes through this before parsing.
#[must_use]
pub fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let body = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest.strip_suffix("```").unwrap_or(rest)
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest.strip_suffix("```").unwrap_or(rest)
    } else {
        trimmed
    };
    body.trim()
}
