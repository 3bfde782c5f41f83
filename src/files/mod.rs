//! File naming for exported transcripts.

pub mod filename;
