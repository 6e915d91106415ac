//! Command line arguments for the atlas builder

use clap::Parser;
use std::path::PathBuf;

use crate::core::config::MetadataFormat;
use crate::core::settings::DEFAULT_FONT_EXTENSION;

/// Build MSDF font atlases for every font directory under a root
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Directory whose immediate subdirectories hold one font asset each
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to the msdf-atlas-gen executable (defaults to one inside the root)
    #[arg(long)]
    pub generator: Option<PathBuf>,

    /// Format of the glyph metadata file
    #[arg(long, value_enum, default_value_t = MetadataFormat::Json)]
    pub metadata_format: MetadataFormat,

    /// Extension of the font files to pick up
    #[arg(long, default_value = DEFAULT_FONT_EXTENSION)]
    pub extension: String,

    /// Write charsets and log generator commands without running them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Write a JSON build report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exit with a failure status if any font failed to build
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
