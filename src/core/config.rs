//! Build configuration
//!
//! `BuildConfig` is assembled once from the command line and handed to the
//! driver by reference. Nothing in it changes during a run.

use clap::ValueEnum;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::cli::CliArgs;
use crate::core::settings::{DEFAULT_FONT_EXTENSION, GENERATOR_NAME, GLYPH_SIZE};

/// Atlas render mode understood by the generator's `-type` flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Multi-channel signed distance field
    #[default]
    Msdf,
}

impl RenderMode {
    pub fn as_arg(self) -> &'static str {
        match self {
            RenderMode::Msdf => "msdf",
        }
    }
}

/// Format of the glyph metadata file written next to the atlas image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataFormat {
    #[default]
    Json,
    Csv,
}

impl MetadataFormat {
    /// Generator flag that selects this format, e.g. `-json`
    pub fn flag(self) -> &'static str {
        match self {
            MetadataFormat::Json => "-json",
            MetadataFormat::Csv => "-csv",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            MetadataFormat::Json => "json",
            MetadataFormat::Csv => "csv",
        }
    }
}

#[derive(Clone, Debug)]
pub struct BuildConfig {
    pub root_path: PathBuf,
    pub generator_executable_path: PathBuf,
    pub render_mode: RenderMode,
    pub glyph_size: u32,
    pub metadata_format: MetadataFormat,
    /// Matched case-sensitively against the end of each file name
    pub font_extension: String,
    pub dry_run: bool,
}

impl BuildConfig {
    /// Configuration with the generator expected next to the fonts in `root`.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        let root_path = root_path.into();
        let generator_executable_path = default_generator_path(&root_path);
        Self {
            root_path,
            generator_executable_path,
            render_mode: RenderMode::default(),
            glyph_size: GLYPH_SIZE,
            metadata_format: MetadataFormat::default(),
            font_extension: DEFAULT_FONT_EXTENSION.to_string(),
            dry_run: false,
        }
    }

    pub fn from_cli(args: &CliArgs) -> Self {
        let mut config = Self::new(args.root.clone());
        if let Some(generator) = &args.generator {
            config.generator_executable_path = generator.clone();
        }
        config.metadata_format = args.metadata_format;
        config.font_extension = args.extension.trim_start_matches('.').to_string();
        config.dry_run = args.dry_run;
        config
    }

    /// Suffix a file name must end with to count as a font, e.g. `.ttf`
    pub fn font_suffix(&self) -> String {
        format!(".{}", self.font_extension)
    }
}

/// `<root>/msdf-atlas-gen`, with `.exe` appended on Windows
pub fn default_generator_path(root: &Path) -> PathBuf {
    root.join(format!("{}{}", GENERATOR_NAME, std::env::consts::EXE_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_follow_fixed_render_parameters() {
        let config = BuildConfig::new("fonts");

        assert_eq!(config.render_mode, RenderMode::Msdf);
        assert_eq!(config.glyph_size, 50);
        assert_eq!(config.metadata_format, MetadataFormat::Json);
        assert_eq!(config.font_suffix(), ".ttf");
        assert!(!config.dry_run);
        assert_eq!(
            config.generator_executable_path,
            Path::new("fonts").join(format!("msdf-atlas-gen{}", std::env::consts::EXE_SUFFIX))
        );
    }

    #[test]
    fn cli_overrides_are_applied() {
        let args = CliArgs::parse_from([
            "atlas-builder",
            "assets/fonts",
            "--generator",
            "/opt/msdf/msdf-atlas-gen",
            "--metadata-format",
            "csv",
            "--extension",
            ".otf",
            "--dry-run",
        ]);
        let config = BuildConfig::from_cli(&args);

        assert_eq!(config.root_path, PathBuf::from("assets/fonts"));
        assert_eq!(
            config.generator_executable_path,
            PathBuf::from("/opt/msdf/msdf-atlas-gen")
        );
        assert_eq!(config.metadata_format, MetadataFormat::Csv);
        assert_eq!(config.font_suffix(), ".otf");
        assert!(config.dry_run);
        assert_eq!(config.glyph_size, GLYPH_SIZE);
    }

    #[test]
    fn metadata_format_flags() {
        assert_eq!(MetadataFormat::Json.flag(), "-json");
        assert_eq!(MetadataFormat::Csv.flag(), "-csv");
        assert_eq!(MetadataFormat::Csv.extension(), "csv");
    }
}
