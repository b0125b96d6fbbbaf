//! Slug derivation and website normalization.

use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// Derives a URL-safe slug from a display name.
///
/// Lowercases the name, collapses every run of characters outside `[a-z0-9]`
/// into a single hyphen, and trims hyphens from both ends. Returns an empty
/// string when the name has no ASCII alphanumerics.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Acme AI, Inc."), "acme-ai-inc");
/// assert_eq!(slugify("  --Hello__World--  "), "hello-world");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Removes a leading `https://` or `http://` from a URL.
pub fn strip_protocol(url: &str) -> &str {
    let url = url.trim();
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
