//! Integration tests for the command line interface.

use crate::helpers::{chatgpt_page, claude_page, empty_page, gemini_page};
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn chatex() -> Command {
    Command::cargo_bin("chatex").expect("binary builds")
}

fn write_page(dir: &TempDir, name: &str, html: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, html).expect("fixture written");
    path
}

// ============================================================================
// Help and Usage
// ============================================================================

#[test]
fn help_shows_subcommands() {
    chatex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("platforms"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn export_without_input_exits_2() {
    chatex().arg("export").assert().code(2);
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn export_to_stdout() {
    let dir = TempDir::new().unwrap();
    let page = write_page(&dir, "chat.html", &chatgpt_page());

    chatex()
        .args(["export", "--platform", "chatgpt", "--stdout"])
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# ChatGPT Chat Export"))
        .stdout(predicate::str::contains("## User\n\nHow do I read a file?"));
}

#[test]
fn export_reads_stdin() {
    chatex()
        .args(["export", "-", "--platform", "claude", "--stdout"])
        .write_stdin(claude_page())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Claude Chat Export"));
}

#[test]
fn export_writes_generated_filename_into_output_dir() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let page = write_page(&dir, "chat.html", &gemini_page());

    chatex()
        .args(["export", "--platform", "gemini", "--output"])
        .arg(out.path())
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved "));

    let exported: Vec<_> = fs::read_dir(out.path()).unwrap().collect();
    assert_eq!(exported.len(), 1);
    let name = exported[0].as_ref().unwrap().file_name();
    let name = name.to_string_lossy();
    assert!(name.starts_with("Pasta_recipe_"), "got: {name}");
    assert!(name.ends_with(".md"));
}

#[test]
fn export_detects_platform_from_url() {
    chatex()
        .args([
            "export",
            "-",
            "--url",
            "https://gemini.google.com/app/abc",
            "--stdout",
        ])
        .write_stdin(gemini_page())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Gemini Chat Export"));
}

#[test]
fn export_rejects_unknown_url() {
    chatex()
        .args(["export", "-", "--url", "https://example.com/"])
        .write_stdin(empty_page())
        .assert()
        .failure()
        .stderr(predicate::str::contains("chatgpt, claude, gemini"));
}

#[test]
fn export_requires_platform_or_url() {
    chatex()
        .args(["export", "-"])
        .write_stdin(empty_page())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--platform or --url"));
}

#[test]
fn export_missing_file_fails_with_path() {
    chatex()
        .args(["export", "no-such-page.html", "--platform", "chatgpt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-page.html"));
}

#[test]
fn export_empty_page_reports_no_content() {
    chatex()
        .args(["export", "-", "--platform", "chatgpt"])
        .write_stdin(empty_page())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No chat content found"));
}

// ============================================================================
// JSON Output
// ============================================================================

#[test]
fn export_json_success_has_markdown_and_filename() {
    let output = chatex()
        .args(["export", "-", "--platform", "claude", "--json"])
        .write_stdin(claude_page())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error"], serde_json::Value::Null);
    assert!(json["markdown"]
        .as_str()
        .unwrap()
        .starts_with("# Claude Chat Export"));
    assert!(json["filename"].as_str().unwrap().ends_with(".md"));
}

#[test]
fn export_json_failure_exits_1_with_error_field() {
    let output = chatex()
        .args(["export", "-", "--platform", "claude", "--json"])
        .write_stdin(empty_page())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("No chat content found"));
    assert_eq!(json["markdown"], serde_json::Value::Null);
}

// ============================================================================
// Platforms and Config
// ============================================================================

#[test]
fn platforms_lists_all_three() {
    chatex()
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicate::str::contains("chatgpt"))
        .stdout(predicate::str::contains("claude.ai"))
        .stdout(predicate::str::contains("gemini.google.com"));
}

#[test]
fn config_path_prints_the_config_file() {
    chatex()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_prints_resolved_profiles() {
    chatex()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[chatgpt]"))
        .stdout(predicate::str::contains("[claude]"))
        .stdout(predicate::str::contains("containers"));
}
