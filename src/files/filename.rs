//! Filename generation and sanitization for exported chats.
//!
//! Produces `<title>_<YYYY-MM-DD>.md`, with every character outside
//! `[A-Za-z0-9]` replaced by `_` so the name is safe on common filesystems.

use chrono::{Local, NaiveDate};

/// Suffix for the fallback base name when a page has no usable title.
const FALLBACK_SUFFIX: &str = "_chat";

/// Extension for exported documents.
const EXTENSION: &str = ".md";

/// Generate a filename for an export using today's date.
///
/// A missing or blank title falls back to `{platform_key}_chat`.
pub fn generate(title: Option<&str>, platform_key: &str) -> String {
    generate_at(title, platform_key, Local::now().date_naive())
}

/// Generate a filename with an explicit date.
///
/// Deterministic given a fixed date; purely a string transform otherwise.
pub fn generate_at(title: Option<&str>, platform_key: &str, date: NaiveDate) -> String {
    let base = match title.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => format!("{platform_key}{FALLBACK_SUFFIX}"),
    };
    format!("{}_{}{}", sanitize(&base), date.format("%Y-%m-%d"), EXTENSION)
}

/// Replace every character outside `[A-Za-z0-9]` with `_`.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
