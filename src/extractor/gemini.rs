//! Gemini extractor.
//!
//! Gemini renders turns as custom `<user-query>` and `<model-response>`
//! elements, so role classification goes by tag name, with class-based
//! container matching as a fallback for older markup.

use super::{
    page_title, trimmed_text, DocumentBuilder, ExtractionResult, PlatformExtractor, SelectorChain,
};
use crate::config::SelectorProfile;
use crate::files::filename;
use crate::markdown::{RenderOptions, Renderer};
use crate::platform::Platform;
use scraper::{ElementRef, Html};
use url::Url;

const USER_TAG: &str = "user-query";
const RESPONSE_TAG: &str = "model-response";
const USER_CLASS: &str = "query-container";
const RESPONSE_CLASS: &str = "response-container";

pub struct GeminiExtractor {
    containers: SelectorChain,
    user_content: SelectorChain,
    assistant_content: SelectorChain,
    title: SelectorChain,
    renderer: Renderer,
}

impl GeminiExtractor {
    /// Create an extractor with the default selector profile.
    pub fn new() -> Self {
        Self::with_profile(Platform::Gemini.default_profile(), None)
    }

    /// Create an extractor with an explicit profile; `base_url` resolves
    /// relative links in rendered content.
    pub fn with_profile(profile: SelectorProfile, base_url: Option<Url>) -> Self {
        Self {
            containers: SelectorChain::new(&profile.containers),
            user_content: SelectorChain::new(&profile.user_content),
            assistant_content: SelectorChain::new(&profile.assistant_content),
            title: SelectorChain::new(&profile.title),
            renderer: Renderer::new(RenderOptions {
                base_url,
                ..RenderOptions::default()
            }),
        }
    }
}

impl Default for GeminiExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

impl PlatformExtractor for GeminiExtractor {
    fn platform(&self) -> Platform {
        Platform::Gemini
    }

    fn extract(&self, doc: &Html) -> ExtractionResult {
        let containers = self.containers.all_in(doc.root_element());
        if containers.is_empty() {
            return ExtractionResult::no_content();
        }

        let platform = self.platform();
        let mut builder = DocumentBuilder::new(platform.display_name());

        for item in containers {
            let tag = item.value().name();
            if tag == USER_TAG || has_class(item, USER_CLASS) {
                let content_root = self.user_content.first_in(item).unwrap_or(item);
                if let Some(text) = trimmed_text(content_root) {
                    builder.push_message("User", &text);
                }
            } else if tag == RESPONSE_TAG || has_class(item, RESPONSE_CLASS) {
                let content_root = self.assistant_content.first_in(item).unwrap_or(item);
                if trimmed_text(content_root).is_some() {
                    builder.push_message(
                        platform.display_name(),
                        &self.renderer.render(content_root),
                    );
                }
            }
            // Fallback containers matched only by [data-message-id] carry no
            // role signal and are skipped.
        }

        let title = page_title(doc, &self.title, platform.title_suffix());
        let filename = filename::generate(title.as_deref(), platform.key());
        ExtractionResult::success(builder.finish(), filename)
    }
}
