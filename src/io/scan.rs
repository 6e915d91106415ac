//! Asset tree discovery
//!
//! The tree is one level deep: `root/<asset>/<font file>`. Entries come back
//! sorted by file name so repeated runs visit fonts in the same order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{AtlasContext, AtlasResult};

/// An immediate subdirectory of the root, named after the asset it holds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetDir {
    pub name: String,
    pub path: PathBuf,
}

/// Lists the directories directly under `root`. Files at the root are skipped.
pub fn find_asset_dirs(root: &Path) -> AtlasResult<Vec<AssetDir>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).with_file_context("list", root)? {
        let entry = entry.with_file_context("list", root)?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        dirs.push(AssetDir {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }
    dirs.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(dirs)
}

/// Lists the files in `dir` whose name ends with `suffix`, e.g. `.ttf`.
pub fn find_font_files(dir: &Path, suffix: &str) -> AtlasResult<Vec<PathBuf>> {
    let mut fonts = Vec::new();
    for entry in fs::read_dir(dir).with_file_context("list", dir)? {
        let entry = entry.with_file_context("list", dir)?;
        let path = entry.path();
        let is_font = entry.file_name().to_string_lossy().ends_with(suffix);
        if is_font && path.is_file() {
            fonts.push(path);
        }
    }
    fonts.sort();
    Ok(fonts)
}
