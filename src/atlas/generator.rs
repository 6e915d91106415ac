//! The external atlas generator
//!
//! `msdf-atlas-gen` is treated as a black box: we hand it a font and a charset
//! on the command line and judge it by its exit status alone.

use anyhow::Context;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use crate::core::config::{BuildConfig, MetadataFormat, RenderMode};
use crate::core::errors::{bail, AtlasResult};
use crate::core::settings::GENERATOR_NAME;
use crate::io::outputs::OutputPaths;

/// Everything one generator invocation needs
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AtlasJob {
    pub font_path: PathBuf,
    pub charset_path: PathBuf,
    pub image_path: PathBuf,
    pub metadata_path: PathBuf,
    pub metadata_format: MetadataFormat,
    pub render_mode: RenderMode,
    pub glyph_size: u32,
}

impl AtlasJob {
    pub fn new(font_path: &Path, outputs: &OutputPaths, config: &BuildConfig) -> Self {
        Self {
            font_path: font_path.to_path_buf(),
            charset_path: outputs.charset.clone(),
            image_path: outputs.image.clone(),
            metadata_path: outputs.metadata.clone(),
            metadata_format: config.metadata_format,
            render_mode: config.render_mode,
            glyph_size: config.glyph_size,
        }
    }

    /// Generator arguments, without the executable itself
    pub fn command_args(&self) -> Vec<OsString> {
        vec![
            "-font".into(),
            self.font_path.clone().into(),
            "-imageout".into(),
            self.image_path.clone().into(),
            self.metadata_format.flag().into(),
            self.metadata_path.clone().into(),
            "-charset".into(),
            self.charset_path.clone().into(),
            "-type".into(),
            self.render_mode.as_arg().into(),
            "-size".into(),
            self.glyph_size.to_string().into(),
        ]
    }
}

/// Something that turns an `AtlasJob` into atlas files on disk
pub trait AtlasGenerator {
    fn generate(&self, job: &AtlasJob) -> AtlasResult<()>;

    /// Human readable command line for logs and dry runs
    fn command_line(&self, job: &AtlasJob) -> String {
        format_command_line(Path::new(GENERATOR_NAME), &job.command_args())
    }
}

/// Runs the `msdf-atlas-gen` executable as a child process
#[derive(Clone, Debug)]
pub struct MsdfAtlasGen {
    executable: PathBuf,
}

impl MsdfAtlasGen {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(config.generator_executable_path.clone())
    }

    pub fn command(&self, job: &AtlasJob) -> Command {
        let mut command = Command::new(&self.executable);
        command.args(job.command_args());
        command
    }
}

impl AtlasGenerator for MsdfAtlasGen {
    fn generate(&self, job: &AtlasJob) -> AtlasResult<()> {
        let command_line = self.command_line(job);
        debug!("Running {command_line}");

        let status = self
            .command(job)
            .status()
            .with_context(|| format!("Could not start `{command_line}`"))?;
        if !status.success() {
            bail!("`{command_line}` returned non-zero exit status: {status}");
        }
        Ok(())
    }

    fn command_line(&self, job: &AtlasJob) -> String {
        format_command_line(&self.executable, &job.command_args())
    }
}

/// Joins a program and its arguments, quoting those containing whitespace.
pub fn format_command_line(program: &Path, args: &[OsString]) -> String {
    std::iter::once(program.as_os_str())
        .chain(args.iter().map(OsString::as_os_str))
        .map(|part| {
            let part = part.to_string_lossy();
            if part.contains(char::is_whitespace) {
                format!("{part:?}")
            } else {
                part.into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
