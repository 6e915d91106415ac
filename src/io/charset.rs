use std::fs;
use std::path::Path;

use crate::core::errors::{AtlasContext, AtlasResult};
use crate::data::unicode::format_charset;

/// Writes the charset file, replacing whatever was there.
pub fn write_charset_file(path: &Path, codepoints: &[u32]) -> AtlasResult<()> {
    fs::write(path, format_charset(codepoints)).with_file_context("write", path)
}
