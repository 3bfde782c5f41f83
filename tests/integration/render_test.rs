//! Tests for the HTML to Markdown renderer through the public API.

use chatex::markdown::{render, RenderOptions, Renderer};
use scraper::Html;
use url::Url;

fn render_body(html: &str) -> String {
    let doc = Html::parse_document(&format!("<html><body>{html}</body></html>"));
    render(doc.root_element())
}

// ============================================================================
// Inline Elements
// ============================================================================

#[test]
fn strong_and_emphasis() {
    assert_eq!(
        render_body("<p>a <strong>b</strong> <em>c</em></p>"),
        "a **b** *c*\n\n"
    );
}

#[test]
fn inline_code() {
    assert_eq!(render_body("<p>run <code>ls</code></p>"), "run `ls`\n\n");
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(render_body("just text"), "just text");
}

// ============================================================================
// Block Elements
// ============================================================================

#[test]
fn headings_by_level() {
    assert_eq!(render_body("<h2>Title</h2>"), "## Title\n\n");
    assert_eq!(render_body("<h6>Deep</h6>"), "###### Deep\n\n");
}

#[test]
fn horizontal_rule_is_not_a_heading() {
    assert_eq!(render_body("<hr>"), "\n---\n\n");
}

#[test]
fn unordered_list() {
    assert_eq!(
        render_body("<ul><li>one</li><li>two</li></ul>"),
        "- one\n- two\n\n"
    );
}

#[test]
fn ordered_list_numbers_items() {
    assert_eq!(
        render_body("<ol><li>a</li><li>b</li><li>c</li></ol>"),
        "1. a\n2. b\n3. c\n\n"
    );
}

#[test]
fn blockquote() {
    let out = render_body("<blockquote><p>wise words</p></blockquote>");
    assert!(out.contains("> wise words"), "got: {out:?}");
}

#[test]
fn code_block_with_language_label() {
    let html = "<pre><div class=\"code-block-decoration\"><span>Rust</span></div>\
                <code>fn main() {}</code></pre>";
    let out = render_body(html);
    assert!(out.contains("```rust\nfn main() {}\n```"), "got: {out:?}");
}

#[test]
fn code_block_without_language() {
    let out = render_body("<pre><code>x = 1</code></pre>");
    assert!(out.contains("```\nx = 1\n```"), "got: {out:?}");
}

#[test]
fn table_with_header_row() {
    let html = "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>";
    assert_eq!(render_body(html), "| A | B |\n| --- | --- |\n| 1 | 2 |\n\n");
}

#[test]
fn table_cells_escape_pipes() {
    let html = "<table><tr><td>a|b</td></tr></table>";
    assert!(render_body(html).contains("| a\\|b |"));
}

// ============================================================================
// Links and Images
// ============================================================================

#[test]
fn absolute_link() {
    assert_eq!(
        render_body("<a href=\"https://example.com/\">site</a>"),
        "[site](https://example.com/)"
    );
}

#[test]
fn relative_link_resolves_against_base_url() {
    let renderer = Renderer::new(RenderOptions {
        base_url: Some(Url::parse("https://claude.ai/chat/abc").unwrap()),
        ..RenderOptions::default()
    });
    let doc = Html::parse_document("<html><body><a href=\"/cite/1\">ref</a></body></html>");
    assert_eq!(
        renderer.render(doc.root_element()),
        "[ref](https://claude.ai/cite/1)"
    );
}

#[test]
fn image_alt_text_defaults() {
    assert_eq!(
        render_body("<img src=\"x.png\" alt=\"diagram\">"),
        "![diagram](x.png)"
    );
    assert_eq!(render_body("<img src=\"x.png\">"), "![Image](x.png)");
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn unknown_elements_render_their_children() {
    assert_eq!(
        render_body("<section><custom-widget><p>inner</p></custom-widget></section>"),
        "inner\n\n"
    );
}

#[test]
fn nested_inline_markup() {
    assert_eq!(
        render_body("<p><strong>bold <em>italic</em></strong></p>"),
        "**bold *italic***\n\n"
    );
}
