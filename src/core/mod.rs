//! Core application functionality
//!
//! This module contains:
//! - Command line handling
//! - Build configuration
//! - Error handling helpers
//! - Fixed settings

pub mod cli;
pub mod config;
pub mod errors;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config::{BuildConfig, MetadataFormat, RenderMode};
pub use errors::{AtlasContext, AtlasResult};
