//! System clipboard support for exported transcripts.
//!
//! Exports are plain text, so the whole module deals in text copies: the
//! orchestrator walks the platform's tools in priority order and hands the
//! Markdown to the first one that works.

mod copy;
mod error;
mod result;
mod tool;
mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};
