//! ChatGPT extractor.
//!
//! ChatGPT marks every message container with a `data-message-author-role`
//! attribute, so role classification reads the attribute directly. System
//! messages and unrecognized roles are skipped.

use super::{
    page_title, trimmed_text, DocumentBuilder, ExtractionResult, PlatformExtractor, SelectorChain,
};
use crate::config::SelectorProfile;
use crate::files::filename;
use crate::markdown::{RenderOptions, Renderer};
use crate::platform::Platform;
use scraper::Html;
use tracing::debug;
use url::Url;

/// Attribute carrying the author role on ChatGPT message containers.
const ROLE_ATTR: &str = "data-message-author-role";

pub struct ChatGptExtractor {
    containers: SelectorChain,
    user_content: SelectorChain,
    assistant_content: SelectorChain,
    title: SelectorChain,
    renderer: Renderer,
}

impl ChatGptExtractor {
    /// Create an extractor with the default selector profile.
    pub fn new() -> Self {
        Self::with_profile(Platform::ChatGpt.default_profile(), None)
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

impl Default for ChatGptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformExtractor for ChatGptExtractor {
    fn platform(&self) -> Platform {
        Platform::ChatGpt
    }

    fn extract(&self, doc: &Html) -> ExtractionResult {
        let containers = self.containers.all_in(doc.root_element());
        if containers.is_empty() {
            return ExtractionResult::no_content();
        }

        let platform = self.platform();
        let mut builder = DocumentBuilder::new(platform.display_name());

        for message in containers {
            let Some(role) = message.value().attr(ROLE_ATTR) else {
                continue;
            };
            match role {
                "user" => {
                    // User input is literal text, not HTML to re-render.
                    let content_root = self.user_content.first_in(message).unwrap_or(message);
                    if let Some(text) = trimmed_text(content_root) {
                        builder.push_message("User", &text);
                    }
                }
                "assistant" => {
                    let content_root = self.assistant_content.first_in(message).unwrap_or(message);
                    if trimmed_text(content_root).is_some() {
                        builder.push_message(
                            platform.display_name(),
                            &self.renderer.render(content_root),
                        );
                    }
                }
                other => debug!(role = other, "skipping non-chat container"),
            }
        }

        let title = page_title(doc, &self.title, platform.title_suffix());
        let filename = filename::generate(title.as_deref(), platform.key());
        ExtractionResult::success(builder.finish(), filename)
    }
}
