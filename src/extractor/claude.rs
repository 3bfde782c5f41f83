//! Claude extractor.
//!
//! Claude wraps every turn in a `data-test-render-count` container; a single
//! container can hold a user message, an assistant response, or both, so
//! both lookups run on each container.
//!
//! Assistant extraction deliberately restricts itself to visible-answer
//! blocks (`.standard-markdown` by default): Claude interleaves internal
//! reasoning sections in the same response container, and only user-facing
//! answer content belongs in the export. The marker is a best-effort guess
//! that needs periodic revision, which is why it lives in the selector
//! profile instead of this file.

use super::{
    page_title, trimmed_text, DocumentBuilder, ExtractionResult, PlatformExtractor, SelectorChain,
};
use crate::config::SelectorProfile;
use crate::files::filename;
use crate::markdown::{RenderOptions, Renderer};
use crate::platform::Platform;
use scraper::{Html, Selector};
use url::Url;

pub struct ClaudeExtractor {
    containers: SelectorChain,
    user_root: SelectorChain,
    user_content: SelectorChain,
    assistant_root: SelectorChain,
    answer_blocks: SelectorChain,
    answer_elements: Option<Selector>,
    title: SelectorChain,
    renderer: Renderer,
}

impl ClaudeExtractor {
    /// Create an extractor with the default selector profile.
    pub fn new() -> Self {
        Self::with_profile(Platform::Claude.default_profile(), None)
    }

    /// Create an extractor with an explicit profile; `base_url` resolves
    /// relative links in rendered content.
    pub fn with_profile(profile: SelectorProfile, base_url: Option<Url>) -> Self {
        let answer_elements = Some(profile.answer_elements.trim())
            .filter(|s| !s.is_empty())
            .and_then(|s| Selector::parse(s).ok());
        Self {
            containers: SelectorChain::new(&profile.containers),
            user_root: SelectorChain::new(&profile.user_root),
            user_content: SelectorChain::new(&profile.user_content),
            assistant_root: SelectorChain::new(&profile.assistant_root),
            answer_blocks: SelectorChain::new(&profile.answer_blocks),
            answer_elements,
            title: SelectorChain::new(&profile.title),
            renderer: Renderer::new(RenderOptions {
                base_url,
                ..RenderOptions::default()
            }),
        }
    }

    /// Render the visible answer blocks of one response, blank-line
    /// separated. Empty when nothing user-facing was found.
    fn render_answer(&self, response: scraper::ElementRef<'_>) -> String {
        let mut answer = String::new();
        for block in self.answer_blocks.all_in(response) {
            match &self.answer_elements {
                Some(selector) => {
                    for part in block.select(selector) {
                        if trimmed_text(part).is_none() {
                            continue;
                        }
                        let rendered = self.renderer.render_element(part);
                        let rendered = rendered.trim();
                        if !rendered.is_empty() {
                            answer.push_str(rendered);
                            answer.push_str("\n\n");
                        }
                    }
                }
                // No block-element filter configured: render the block whole.
                None => {
                    let rendered = self.renderer.render(block);
                    let rendered = rendered.trim();
                    if !rendered.is_empty() {
                        answer.push_str(rendered);
                        answer.push_str("\n\n");
                    }
                }
            }
        }
        answer
    }
}

impl Default for ClaudeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformExtractor for ClaudeExtractor {
    fn platform(&self) -> Platform {
        Platform::Claude
    }

    fn extract(&self, doc: &Html) -> ExtractionResult {
        let containers = self.containers.all_in(doc.root_element());
        if containers.is_empty() {
            return ExtractionResult::no_content();
        }

        let platform = self.platform();
        let mut builder = DocumentBuilder::new(platform.display_name());

        for container in containers {
            if let Some(user) = self.user_root.first_in(container) {
                let content_root = self.user_content.first_in(user).unwrap_or(user);
                if let Some(text) = trimmed_text(content_root) {
                    builder.push_message("User", &text);
                }
            }

            if let Some(response) = self.assistant_root.first_in(container) {
                let answer = self.render_answer(response);
                if !answer.trim().is_empty() {
                    builder.push_message(platform.display_name(), answer.trim_end());
                }
            }
        }

        let title = page_title(doc, &self.title, platform.title_suffix());
        let filename = filename::generate(title.as_deref(), platform.key());
        ExtractionResult::success(builder.finish(), filename)
    }
}
