//! Platform-specific chat extraction.
//!
//! Each supported platform gets one extractor implementing
//! [`PlatformExtractor`]. An extractor scans a parsed page for message
//! containers, classifies each as user or assistant, pulls the relevant
//! content subtree, and feeds assistant content through the Markdown
//! renderer (user input is treated as literal text - rendering a plain
//! prompt as HTML would mangle it). The results are assembled into one
//! document:
//!
//! ```text
//! # <Platform> Chat Export
//!
//! ## <Role>
//!
//! <content>
//!
//! ---
//!
//! ...
//! ```
//!
//! Extraction is a single synchronous pass over a read-only document. The
//! only error is the no-content case, represented as data in
//! [`ExtractionResult`] rather than a fault, so callers always pattern-match
//! on the result shape.

mod chatgpt;
mod claude;
mod gemini;

pub use chatgpt::ChatGptExtractor;
pub use claude::ClaudeExtractor;
pub use gemini::GeminiExtractor;

use crate::config::SelectorProfile;
use crate::markdown::text_content;
use crate::platform::Platform;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

/// Error message returned when a page yields no message containers.
pub const NO_CONTENT_ERROR: &str = "No chat content found. Ensure the page is fully loaded.";

/// Outcome of one extraction pass.
///
/// Exactly one of `error` or the `markdown` + `filename` pair is populated.
/// The constructors are the only producers, so the invariant holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub error: Option<String>,
    pub markdown: Option<String>,
    pub filename: Option<String>,
}

impl ExtractionResult {
    /// A completed extraction.
    pub fn success(markdown: String, filename: String) -> Self {
        Self {
            error: None,
            markdown: Some(markdown),
            filename: Some(filename),
        }
    }

    /// The no-content error: nothing on the page matched the container
    /// selectors.
    pub fn no_content() -> Self {
        Self {
            error: Some(NO_CONTENT_ERROR.to_string()),
            markdown: None,
            filename: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// One extractor per supported platform.
///
/// `extract` is total: it performs no I/O, never panics on well-formed
/// pages, and reports the no-content case through the result rather than an
/// error type.
pub trait PlatformExtractor {
    /// The platform this extractor understands.
    fn platform(&self) -> Platform;

    /// Convert a parsed page into a Markdown transcript.
    fn extract(&self, doc: &Html) -> ExtractionResult;
}

/// Build the extractor for `platform` with its default selector profile.
pub fn extractor_for(platform: Platform, base_url: Option<Url>) -> Box<dyn PlatformExtractor> {
    with_profile(platform, platform.default_profile(), base_url)
}

/// Build the extractor for `platform` with an explicit selector profile.
pub fn with_profile(
    platform: Platform,
    profile: SelectorProfile,
    base_url: Option<Url>,
) -> Box<dyn PlatformExtractor> {
    match platform {
        Platform::ChatGpt => Box::new(ChatGptExtractor::with_profile(profile, base_url)),
        Platform::Claude => Box::new(ClaudeExtractor::with_profile(profile, base_url)),
        Platform::Gemini => Box::new(GeminiExtractor::with_profile(profile, base_url)),
    }
}

/// An ordered list of candidate selectors, evaluated first-match-wins.
///
/// Chat frontends change their markup regularly, so every lookup the
/// extractors do is a chain of guesses from most to least specific.
/// Selectors that fail to parse are dropped with a warning; a bad override
/// cannot take the whole extraction down.
pub(crate) struct SelectorChain {
    selectors: Vec<Selector>,
}

impl SelectorChain {
    pub fn new<S: AsRef<str>>(candidates: &[S]) -> Self {
        let selectors = candidates
            .iter()
            .filter_map(|candidate| match Selector::parse(candidate.as_ref()) {
                Ok(selector) => Some(selector),
                Err(err) => {
                    warn!(selector = candidate.as_ref(), error = %err, "invalid selector dropped");
                    None
                }
            })
            .collect();
        Self { selectors }
    }

    /// First element matched by the first selector that matches anything
    /// under `scope`.
    pub fn first_in<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|selector| scope.select(selector).next())
    }

    /// All matches, in document order, of the first selector that matches
    /// anything under `scope`.
    pub fn all_in<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        for selector in &self.selectors {
            let matches: Vec<_> = scope.select(selector).collect();
            if !matches.is_empty() {
                return matches;
            }
        }
        Vec::new()
    }
}

/// Descendant text of `el`, trimmed; `None` when effectively empty.
pub(crate) fn trimmed_text(el: ElementRef<'_>) -> Option<String> {
    let text = text_content(&el);
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Conversation title from the page, with the platform branding suffix
/// removed.
pub(crate) fn page_title(doc: &Html, chain: &SelectorChain, suffix: Option<&str>) -> Option<String> {
    let element = chain.first_in(doc.root_element())?;
    let mut text = text_content(&element);
    if let Some(suffix) = suffix {
        text = text.replace(suffix, "");
    }
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Accumulates the export document in the persisted wire format.
pub(crate) struct DocumentBuilder {
    markdown: String,
}

impl DocumentBuilder {
    pub fn new(platform_name: &str) -> Self {
        Self {
            markdown: format!("# {platform_name} Chat Export\n\n"),
        }
    }

    /// Append one message block. `content` is used verbatim; trailing
    /// whitespace handling is the caller's call.
    pub fn push_message(&mut self, role: &str, content: &str) {
        self.markdown
            .push_str(&format!("## {role}\n\n{content}\n\n---\n\n"));
    }

    pub fn finish(self) -> String {
        self.markdown
    }
}
