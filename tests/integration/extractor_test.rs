//! End-to-end extraction tests through the public API.

use crate::helpers::{chatgpt_page, claude_page, empty_page, gemini_page};
use chatex::config::Config;
use chatex::extractor::{self, NO_CONTENT_ERROR};
use chatex::platform::Platform;
use scraper::Html;

fn extract(platform: Platform, html: &str) -> chatex::ExtractionResult {
    let doc = Html::parse_document(html);
    extractor::extractor_for(platform, None).extract(&doc)
}

// ============================================================================
// ChatGPT
// ============================================================================

#[test]
fn chatgpt_page_exports_both_turns() {
    let result = extract(Platform::ChatGpt, &chatgpt_page());
    assert!(result.is_success());

    let markdown = result.markdown.unwrap();
    assert!(markdown.starts_with("# ChatGPT Chat Export\n\n"));
    assert!(markdown.contains("## User\n\nHow do I read a file?"));
    assert!(markdown.contains("## ChatGPT\n\n"));
    assert!(markdown.contains("`std::fs::read_to_string`"));
    assert!(markdown.contains("```\nlet s = std::fs::read_to_string(path)?;\n```"));
}

#[test]
fn chatgpt_title_loses_branding_suffix() {
    let filename = extract(Platform::ChatGpt, &chatgpt_page()).filename.unwrap();
    assert!(filename.starts_with("Rust_Help_"), "got: {filename}");
    assert!(!filename.contains("ChatGPT"));
}

// ============================================================================
// Claude
// ============================================================================

#[test]
fn claude_page_exports_answer_without_reasoning() {
    let result = extract(Platform::Claude, &claude_page());
    let markdown = result.markdown.unwrap();

    assert!(markdown.contains("## User\n\nSort a vec of strings"));
    assert!(markdown.contains("Call `sort` on the vec:"));
    assert!(markdown.contains("```\nv.sort();\n```"));
    assert!(!markdown.contains("sort_unstable"));
}

#[test]
fn claude_message_blocks_end_with_separators() {
    let markdown = extract(Platform::Claude, &claude_page()).markdown.unwrap();
    for block in markdown.split("## ").skip(1) {
        assert!(block.contains("\n---\n"), "unterminated block: {block:?}");
    }
}

// ============================================================================
// Gemini
// ============================================================================

#[test]
fn gemini_page_exports_query_and_response() {
    let markdown = extract(Platform::Gemini, &gemini_page()).markdown.unwrap();
    assert!(markdown.contains("## User\n\nCarbonara without cream?"));
    assert!(markdown.contains("**no cream**"));
    assert!(markdown.contains("- eggs\n- guanciale\n- pecorino\n"));
}

#[test]
fn gemini_filename_comes_from_conversation_title() {
    let filename = extract(Platform::Gemini, &gemini_page()).filename.unwrap();
    assert!(filename.starts_with("Pasta_recipe_"), "got: {filename}");
}

// ============================================================================
// Shared Behavior
// ============================================================================

#[test]
fn every_platform_reports_no_content_on_an_empty_page() {
    for platform in Platform::ALL {
        let result = extract(platform, &empty_page());
        assert_eq!(result.error.as_deref(), Some(NO_CONTENT_ERROR));
        assert_eq!(result.markdown, None);
        assert_eq!(result.filename, None);
    }
}

#[test]
fn configured_selectors_replace_the_defaults() {
    let config = Config::parse(
        "[selectors.chatgpt]\ncontainers = [\"[data-turn]\"]\nuser_content = [\".body\"]\n",
    )
    .unwrap();
    let profile = config.selector_profile(Platform::ChatGpt);
    let extractor = extractor::with_profile(Platform::ChatGpt, profile, None);

    let doc = Html::parse_document(
        "<html><body>\
         <div data-turn data-message-author-role=\"user\">\
           <div class=\"body\">custom markup</div>\
         </div>\
         </body></html>",
    );
    let markdown = extractor.extract(&doc).markdown.unwrap();
    assert!(markdown.contains("## User\n\ncustom markup"));
}

#[test]
fn result_json_shape_is_stable() {
    let result = extract(Platform::Claude, &empty_page());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["error"], NO_CONTENT_ERROR);
    assert_eq!(json["markdown"], serde_json::Value::Null);
    assert_eq!(json["filename"], serde_json::Value::Null);
}
