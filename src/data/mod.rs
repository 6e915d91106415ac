//! Font data
//!
//! This module derives what a font supports:
//! - Best character map selection
//! - Codepoint extraction and charset serialization

pub mod unicode;

pub use unicode::{extract_codepoints, format_charset, read_codepoints};
