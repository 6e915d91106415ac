//!    Error handling
//!
//! This module provides error handling using anyhow.
//! As a command line tool (not a library for others), we prioritize readable
//! context chains over a typed error hierarchy.

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, ensure, Error};
use anyhow::{Context, Result};
use std::path::Path;

/// Result type alias for convenience throughout the crate
pub type AtlasResult<T> = Result<T>;

/// Helper functions for creating common error contexts
pub trait AtlasContext<T> {
    /// Add file operation context to an error
    fn with_file_context<P: AsRef<Path>>(self, operation: &str, path: P) -> AtlasResult<T>;

    /// Add font operation context to an error
    fn with_font_context<P: AsRef<Path>>(self, operation: &str, font_path: P) -> AtlasResult<T>;
}

impl<T, E> AtlasContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context<P: AsRef<Path>>(self, operation: &str, path: P) -> AtlasResult<T> {
        self.with_context(|| format!("Failed to {} file: {}", operation, path.as_ref().display()))
    }

    fn with_font_context<P: AsRef<Path>>(self, operation: &str, font_path: P) -> AtlasResult<T> {
        self.with_context(|| {
            format!(
                "Failed to {operation} font '{}'",
                font_path.as_ref().display()
            )
        })
    }
}

/// Checks that the scan root is a directory before the run starts.
pub fn validate_root_path<P: AsRef<Path>>(path: P) -> AtlasResult<()> {
    let path = path.as_ref();

    ensure!(path.exists(), "Root path does not exist: {}", path.display());
    ensure!(
        path.is_dir(),
        "Root path must be a directory: {}",
        path.display()
    );

    Ok(())
}
