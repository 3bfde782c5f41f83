//! HTML to Markdown conversion.
//!
//! The renderer walks a DOM subtree recursively, classifies each element into
//! a [`NodeKind`](kind), and emits the matching Markdown. It is total over any
//! parsed document: text nodes pass through literally, unknown elements render
//! their children with no added markup, and missing optional pieces (language
//! labels, alt text, hrefs) resolve to defaults. The renderer never mutates
//! the document and never fails.
//!
//! Chat frontends decorate code blocks in platform-specific ways, so the
//! selectors used to find language labels and custom code-block markers are
//! carried in [`RenderOptions`] rather than hard-coded in the traversal.

mod kind;

use kind::NodeKind;
use scraper::{ElementRef, Node, Selector};
use tracing::warn;
use url::Url;

/// Configuration for a [`Renderer`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Base URL used to resolve relative link hrefs to absolute URLs.
    pub base_url: Option<Url>,
    /// Selector locating the language label inside a `pre` block.
    pub lang_label_selector: String,
    /// Class marking a custom (non-`pre`) code block element.
    pub code_block_class: String,
    /// Selector locating the language label inside a custom code block.
    pub code_block_lang_selector: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            lang_label_selector: "div.code-block-decoration span".to_string(),
            code_block_class: "code-block".to_string(),
            code_block_lang_selector: ".code-block-decoration".to_string(),
        }
    }
}

/// Recursive DOM subtree to Markdown transformer.
///
/// Selectors are parsed once at construction; an unparseable selector is
/// logged and disabled rather than failing the render.
#[derive(Debug, Clone)]
pub struct Renderer {
    opts: RenderOptions,
    code: Option<Selector>,
    lang_label: Option<Selector>,
    marker_lang: Option<Selector>,
    row: Option<Selector>,
    cell: Option<Selector>,
    header_cell: Option<Selector>,
}

impl Renderer {
    /// Create a renderer with the given options.
    pub fn new(opts: RenderOptions) -> Self {
        let lang_label = parse_selector(&opts.lang_label_selector);
        let marker_lang = parse_selector(&opts.code_block_lang_selector);
        Self {
            opts,
            code: parse_selector("code"),
            lang_label,
            marker_lang,
            row: parse_selector("tr"),
            cell: parse_selector("th, td"),
            header_cell: parse_selector("th"),
        }
    }

    /// Render the children of `node` to Markdown, in document order.
    ///
    /// This matches the extraction contract: extractors hand over a content
    /// root (a message body) and want its contents, not markup for the root
    /// element itself.
    pub fn render(&self, node: ElementRef) -> String {
        let mut out = String::new();
        self.render_children(node, &mut out);
        out
    }

    /// Render `node` itself, including its own markup.
    ///
    /// Used when block elements (`pre`, `table`, headings) are selected
    /// directly, so a code block keeps its fences.
    pub fn render_element(&self, node: ElementRef) -> String {
        let mut out = String::new();
        self.emit(node, &mut out);
        out
    }

    fn render_children(&self, el: ElementRef, out: &mut String) {
        for child in el.children() {
            match child.value() {
                Node::Text(text) => out.push_str(&text.text),
                Node::Element(_) => {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        self.emit(child_el, out);
                    }
                }
                // Comments, doctypes, processing instructions contribute nothing.
                _ => {}
            }
        }
    }

    fn emit(&self, el: ElementRef, out: &mut String) {
        match NodeKind::classify(el.value(), &self.opts.code_block_class) {
            NodeKind::Paragraph => {
                self.render_children(el, out);
                out.push_str("\n\n");
            }
            NodeKind::Strong => {
                out.push_str("**");
                self.render_children(el, out);
                out.push_str("**");
            }
            NodeKind::Emphasis => {
                out.push('*');
                self.render_children(el, out);
                out.push('*');
            }
            NodeKind::Code => self.emit_code(el, out),
            NodeKind::Pre => self.emit_pre(el, out),
            NodeKind::BulletList => {
                for item in el.children().filter_map(ElementRef::wrap) {
                    out.push_str("- ");
                    self.render_children(item, out);
                    out.push('\n');
                }
                out.push('\n');
            }
            NodeKind::NumberedList => {
                for (index, item) in el.children().filter_map(ElementRef::wrap).enumerate() {
                    out.push_str(&format!("{}. ", index + 1));
                    self.render_children(item, out);
                    out.push('\n');
                }
                out.push('\n');
            }
            // Prefixing is the parent list's responsibility.
            NodeKind::ListItem => self.render_children(el, out),
            NodeKind::Link => {
                let text = text_content(&el);
                let href = el.value().attr("href").unwrap_or("");
                out.push_str(&format!("[{}]({})", text, self.resolve_href(href)));
            }
            NodeKind::Heading(level) => {
                for _ in 0..level {
                    out.push('#');
                }
                out.push(' ');
                self.render_children(el, out);
                out.push_str("\n\n");
            }
            NodeKind::CodeBlock => self.emit_code_block_marker(el, out),
            NodeKind::Table => self.emit_table(el, out),
            NodeKind::Blockquote => {
                let mut inner = String::new();
                self.render_children(el, &mut inner);
                out.push_str("> ");
                out.push_str(&inner.replace('\n', "\n> "));
                out.push_str("\n\n");
            }
            NodeKind::Rule => out.push_str("\n---\n\n"),
            NodeKind::Image => {
                // alt="" counts as absent, matching how pages omit it.
                let alt = el
                    .value()
                    .attr("alt")
                    .filter(|a| !a.is_empty())
                    .unwrap_or("Image");
                let src = el.value().attr("src").unwrap_or("");
                out.push_str(&format!("![{}]({})", alt, src));
            }
            NodeKind::Container => self.render_children(el, out),
        }
    }

    /// Inline code wraps raw text in backticks; code nested in `pre` defers
    /// to the `pre` handler to avoid double-wrapping.
    fn emit_code(&self, el: ElementRef, out: &mut String) {
        let in_pre = el
            .parent()
            .and_then(ElementRef::wrap)
            .map(|parent| parent.value().name() == "pre")
            .unwrap_or(false);

        if in_pre {
            self.render_children(el, out);
        } else {
            out.push('`');
            out.push_str(&text_content(&el));
            out.push('`');
        }
    }

    fn emit_pre(&self, el: ElementRef, out: &mut String) {
        let code_text = self
            .code
            .as_ref()
            .and_then(|sel| el.select(sel).next())
            .map(|code| text_content(&code))
            .unwrap_or_else(|| text_content(&el));

        let lang = self
            .lang_label
            .as_ref()
            .and_then(|sel| el.select(sel).next())
            .map(|label| text_content(&label))
            .unwrap_or_default();

        out.push_str("\n```");
        out.push_str(&lang.to_lowercase());
        out.push('\n');
        out.push_str(&code_text);
        out.push_str("\n```\n\n");
    }

    /// Custom code blocks carry the language and code in nested marker
    /// elements instead of the `pre`/`code` pair.
    fn emit_code_block_marker(&self, el: ElementRef, out: &mut String) {
        let lang = self
            .marker_lang
            .as_ref()
            .and_then(|sel| el.select(sel).next())
            .map(|label| text_content(&label))
            .unwrap_or_default();

        let code = self
            .code
            .as_ref()
            .and_then(|sel| el.select(sel).next())
            .map(|code| text_content(&code))
            .unwrap_or_default();

        out.push_str("\n```");
        out.push_str(&lang);
        out.push('\n');
        out.push_str(&code);
        out.push_str("\n```\n\n");
    }

    fn emit_table(&self, el: ElementRef, out: &mut String) {
        let (Some(row_sel), Some(cell_sel), Some(header_sel)) =
            (self.row.as_ref(), self.cell.as_ref(), self.header_cell.as_ref())
        else {
            self.render_children(el, out);
            return;
        };

        for (row_index, row) in el.select(row_sel).enumerate() {
            let cells: Vec<String> = row
                .select(cell_sel)
                .map(|cell| {
                    let mut rendered = String::new();
                    self.render_children(cell, &mut rendered);
                    rendered.trim().replace('|', "\\|")
                })
                .collect();

            out.push_str(&format!("| {} |\n", cells.join(" | ")));

            // Separator row directly after a leading header row.
            if row_index == 0 && row.select(header_sel).next().is_some() {
                let separator = vec!["---"; cells.len()].join(" | ");
                out.push_str(&format!("| {} |\n", separator));
            }
        }
        out.push('\n');
    }

    fn resolve_href(&self, href: &str) -> String {
        match &self.opts.base_url {
            Some(base) => base
                .join(href)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| href.to_string()),
            None => href.to_string(),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Render the children of a DOM subtree with default options.
pub fn render(node: ElementRef) -> String {
    Renderer::default().render(node)
}

/// Concatenated text of all descendant text nodes, in document order.
pub(crate) fn text_content(el: &ElementRef) -> String {
    el.text().collect()
}

fn parse_selector(source: &str) -> Option<Selector> {
    match Selector::parse(source) {
        Ok(selector) => Some(selector),
        Err(err) => {
            warn!(selector = source, error = %err, "invalid selector disabled");
            None
        }
    }
}
