//! Output file naming
//!
//! Outputs land next to the font they came from. A directory holding a single
//! font uses the plain names (`charset.txt`, `atlas.png`, `atlas.json`); when
//! several fonts share a directory each output set is prefixed with the font's
//! file stem so one font cannot overwrite another's atlas.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::config::MetadataFormat;
use crate::core::settings::{
    ATLAS_FILE_STEM, ATLAS_IMAGE_EXTENSION, CHARSET_FILE_EXTENSION,
    CHARSET_FILE_STEM,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputNaming {
    /// One font in the directory
    Shared,
    /// Several fonts in the directory, outputs keyed by font stem
    PerFont,
}

impl OutputNaming {
    pub fn for_font_count(count: usize) -> Self {
        if count > 1 {
            OutputNaming::PerFont
        } else {
            OutputNaming::Shared
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    pub charset: PathBuf,
    pub image: PathBuf,
    pub metadata: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path, font_path: &Path, naming: OutputNaming, format: MetadataFormat) -> Self {
        let prefix = match naming {
            OutputNaming::Shared => String::new(),
            OutputNaming::PerFont => font_path
                .file_stem()
                .map(|stem| format!("{}-", stem.to_string_lossy()))
                .unwrap_or_default(),
        };
        let file = |stem: &str, extension: &str| dir.join(format!("{prefix}{stem}.{extension}"));

        Self {
            charset: file(CHARSET_FILE_STEM, CHARSET_FILE_EXTENSION),
            image: file(ATLAS_FILE_STEM, ATLAS_IMAGE_EXTENSION),
            metadata: file(ATLAS_FILE_STEM, format.extension()),
        }
    }
}
