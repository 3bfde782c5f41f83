//! Tests for filename sanitization and generation.

use chatex::files::filename;
use chrono::NaiveDate;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

// ============================================================================
// Sanitization Tests
// ============================================================================

#[test]
fn sanitize_keeps_ascii_alphanumerics() {
    assert_eq!(filename::sanitize("Chat42"), "Chat42");
}

#[test]
fn sanitize_replaces_spaces_with_underscores() {
    assert_eq!(filename::sanitize("my chat log"), "my_chat_log");
}

#[test]
fn sanitize_replaces_path_separators() {
    assert_eq!(filename::sanitize("a/b\\c"), "a_b_c");
}

#[test]
fn sanitize_replaces_punctuation() {
    assert_eq!(filename::sanitize("what? why!"), "what__why_");
}

#[test]
fn sanitize_replaces_non_ascii() {
    assert_eq!(filename::sanitize("naïve"), "na_ve");
}

// ============================================================================
// Generation Tests
// ============================================================================

#[test]
fn generated_name_carries_title_date_and_extension() {
    assert_eq!(
        filename::generate_at(Some("Rust Help"), "chatgpt", date()),
        "Rust_Help_2024-03-15.md"
    );
}

#[test]
fn missing_title_uses_platform_fallback() {
    assert_eq!(
        filename::generate_at(None, "gemini", date()),
        "gemini_chat_2024-03-15.md"
    );
}

#[test]
fn whitespace_title_uses_platform_fallback() {
    assert_eq!(
        filename::generate_at(Some(" \t "), "claude", date()),
        "claude_chat_2024-03-15.md"
    );
}

#[test]
fn title_is_trimmed_before_sanitizing() {
    assert_eq!(
        filename::generate_at(Some("  edges  "), "claude", date()),
        "edges_2024-03-15.md"
    );
}

#[test]
fn generate_stamps_the_current_date() {
    let name = filename::generate(Some("today"), "chatgpt");
    assert!(name.starts_with("today_"));
    assert!(name.ends_with(".md"));
}
