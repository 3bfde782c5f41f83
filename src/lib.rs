//! Export AI chat transcripts from saved HTML pages to Markdown.
//!
//! Supports ChatGPT, Claude, and Gemini. Each platform gets a dedicated
//! extractor that knows its DOM structure; all three share one HTML to
//! Markdown renderer and one export document format.

pub mod clipboard;
pub mod config;
pub mod extractor;
pub mod files;
pub mod markdown;
pub mod platform;

pub use config::Config;
pub use extractor::{ExtractionResult, PlatformExtractor};
pub use platform::Platform;
