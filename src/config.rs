//! User configuration: per-platform selector overrides.
//!
//! Chat frontends rename their CSS classes and test ids without notice, so
//! every selector the extractors rely on is data, not code. The compiled-in
//! defaults live on [`Platform::default_profile`](crate::platform::Platform);
//! a TOML file under the user config directory can override any chain per
//! platform without rebuilding:
//!
//! ```toml
//! [selectors.claude]
//! answer_blocks = [".standard-markdown"]
//! ```

use crate::platform::Platform;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Resolved selector set driving one platform's extractor.
///
/// Every `Vec` is an ordered fallback chain, evaluated first-match-wins.
/// An empty chain means the lookup is unused for that platform (the
/// extractor falls back to the container element itself).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorProfile {
    /// Candidates for message containers.
    pub containers: Vec<String>,
    /// Marks the user half of a container.
    pub user_root: Vec<String>,
    /// Content root for user text, searched within the user root.
    pub user_content: Vec<String>,
    /// Marks the assistant half of a container.
    pub assistant_root: Vec<String>,
    /// Content root for assistant HTML, searched within the container.
    pub assistant_content: Vec<String>,
    /// Visible-answer block markers; content outside them (reasoning
    /// sections) is excluded from the export.
    pub answer_blocks: Vec<String>,
    /// Block-level elements collected inside each answer block. Empty means
    /// the whole block is rendered as-is.
    pub answer_elements: String,
    /// Candidates for the conversation title.
    pub title: Vec<String>,
}

/// Partial override for a [`SelectorProfile`]; unset fields keep the
/// platform defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorOverrides {
    pub containers: Option<Vec<String>>,
    pub user_root: Option<Vec<String>>,
    pub user_content: Option<Vec<String>>,
    pub assistant_root: Option<Vec<String>>,
    pub assistant_content: Option<Vec<String>>,
    pub answer_blocks: Option<Vec<String>>,
    pub answer_elements: Option<String>,
    pub title: Option<Vec<String>>,
}

impl SelectorOverrides {
    /// Apply the set fields on top of `profile`.
    fn apply(&self, profile: &mut SelectorProfile) {
        if let Some(containers) = &self.containers {
            profile.containers = containers.clone();
        }
        if let Some(user_root) = &self.user_root {
            profile.user_root = user_root.clone();
        }
        if let Some(user_content) = &self.user_content {
            profile.user_content = user_content.clone();
        }
        if let Some(assistant_root) = &self.assistant_root {
            profile.assistant_root = assistant_root.clone();
        }
        if let Some(assistant_content) = &self.assistant_content {
            profile.assistant_content = assistant_content.clone();
        }
        if let Some(answer_blocks) = &self.answer_blocks {
            profile.answer_blocks = answer_blocks.clone();
        }
        if let Some(answer_elements) = &self.answer_elements {
            profile.answer_elements = answer_elements.clone();
        }
        if let Some(title) = &self.title {
            profile.title = title.clone();
        }
    }
}

/// Per-platform override sections of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub chatgpt: SelectorOverrides,
    pub claude: SelectorOverrides,
    pub gemini: SelectorOverrides,
}

/// Top-level configuration, loaded from `config.toml` when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub selectors: Selectors,
}

impl Config {
    /// Path of the config file under the user config directory.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine the user config directory")?;
        Ok(dir.join("chatex").join("config.toml"))
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse a config document.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config file")
    }

    /// Write the config file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// The resolved selector profile for `platform`: its defaults with any
    /// configured overrides applied.
    pub fn selector_profile(&self, platform: Platform) -> SelectorProfile {
        let mut profile = platform.default_profile();
        self.overrides_for(platform).apply(&mut profile);
        profile
    }

    fn overrides_for(&self, platform: Platform) -> &SelectorOverrides {
        match platform {
            Platform::ChatGpt => &self.selectors.chatgpt,
            Platform::Claude => &self.selectors.claude,
            Platform::Gemini => &self.selectors.gemini,
        }
    }
}
