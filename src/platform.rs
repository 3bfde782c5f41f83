//! Supported chat platforms and their static descriptors.
//!
//! Each platform carries the read-only data the rest of the tool needs: a
//! stable key for filenames and CLI flags, a display name for headings, the
//! domains it is served from, the branding suffix its page titles carry, and
//! the default selector profile its extractor starts from. The table is
//! constructed once and never mutated.

use crate::config::SelectorProfile;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use url::Url;

/// A supported chat platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[value(name = "chatgpt")]
    ChatGpt,
    #[value(name = "claude")]
    Claude,
    #[value(name = "gemini")]
    Gemini,
}

impl Platform {
    /// All supported platforms, in display order.
    pub const ALL: [Platform; 3] = [Platform::ChatGpt, Platform::Claude, Platform::Gemini];

    /// Stable lowercase key used in filenames, config sections, and flags.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ChatGpt => "chatgpt",
            Self::Claude => "claude",
            Self::Gemini => "gemini",
        }
    }

    /// Name used in document headings and user-facing messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ChatGpt => "ChatGPT",
            Self::Claude => "Claude",
            Self::Gemini => "Gemini",
        }
    }

    /// Domains the platform serves its chat UI from.
    pub fn domains(&self) -> &'static [&'static str] {
        match self {
            Self::ChatGpt => &["chat.openai.com", "chatgpt.com"],
            Self::Claude => &["claude.ai"],
            Self::Gemini => &["gemini.google.com"],
        }
    }

    /// Branding suffix the platform appends to page titles, if any.
    ///
    /// Gemini keeps the conversation title in a dedicated element, so there
    /// is nothing to strip.
    pub fn title_suffix(&self) -> Option<&'static str> {
        match self {
            Self::ChatGpt => Some(" - ChatGPT"),
            Self::Claude => Some(" - Claude"),
            Self::Gemini => None,
        }
    }

    /// Look up a platform by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Detect the platform a page URL belongs to by domain.
    pub fn detect(url: &Url) -> Option<Self> {
        let host = url.host_str()?;
        Self::ALL.into_iter().find(|platform| {
            platform
                .domains()
                .iter()
                .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")))
        })
    }

    /// The selector profile the platform's extractor uses out of the box.
    ///
    /// These are best-effort guesses at frontend markup that changes without
    /// notice; every entry can be overridden from the config file.
    pub fn default_profile(&self) -> SelectorProfile {
        match self {
            Self::ChatGpt => SelectorProfile {
                containers: vec!["[data-message-author-role]".into()],
                user_root: vec![],
                user_content: vec![".whitespace-pre-wrap".into()],
                assistant_root: vec![],
                assistant_content: vec![
                    ".markdown.prose".into(),
                    "[class*=\"markdown\"]".into(),
                    ".text-message-content".into(),
                ],
                answer_blocks: vec![],
                answer_elements: String::new(),
                title: vec!["title".into()],
            },
            Self::Claude => SelectorProfile {
                containers: vec!["[data-test-render-count]".into()],
                user_root: vec!["[data-testid=\"user-message\"]".into()],
                user_content: vec!["p.whitespace-pre-wrap".into(), "p".into()],
                assistant_root: vec![
                    ".font-claude-response".into(),
                    "[data-testid=\"model-response\"]".into(),
                ],
                assistant_content: vec![],
                // Visible answer containers only; thinking sections are not
                // wrapped in standard-markdown and stay out of the export.
                answer_blocks: vec![".standard-markdown".into(), ".grid-cols-1 > div".into()],
                answer_elements: "p, li, h1, h2, h3, h4, h5, h6, pre, table, blockquote".into(),
                title: vec![
                    "title".into(),
                    "[data-testid=\"chat-title\"]".into(),
                    "h1".into(),
                ],
            },
            Self::Gemini => SelectorProfile {
                containers: vec![
                    "user-query, model-response".into(),
                    ".query-container, .response-container, [data-message-id]".into(),
                ],
                user_root: vec![],
                user_content: vec![".query-text".into()],
                assistant_root: vec![],
                assistant_content: vec![".markdown".into(), ".model-response-text".into()],
                answer_blocks: vec![],
                answer_elements: String::new(),
                title: vec![".conversation-title".into()],
            },
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
