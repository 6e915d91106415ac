//! Character map reading and charset serialization
//!
//! Only the sfnt table directory and the `cmap` table are parsed, so a font
//! with broken outline or metrics tables still yields its charset.

use anyhow::Context;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use ttf_parser::{cmap, PlatformId, RawFace, Tag};

use crate::core::errors::{AtlasContext, AtlasResult};
use crate::core::settings::{CHARSET_SEPARATOR, EXCLUDED_CODEPOINTS};

/// Subtables tried in order when picking a font's best character map.
///
/// Full-repertoire Windows maps win over the BMP-only ones, and Windows maps
/// win over their Unicode-platform equivalents.
pub const BEST_CMAP_PRIORITY: [(PlatformId, u16); 8] = [
    (PlatformId::Windows, 10),
    (PlatformId::Unicode, 6),
    (PlatformId::Unicode, 4),
    (PlatformId::Windows, 1),
    (PlatformId::Unicode, 3),
    (PlatformId::Unicode, 2),
    (PlatformId::Unicode, 1),
    (PlatformId::Unicode, 0),
];

/// Returns the highest priority Unicode subtable present in `table`.
///
/// Subtables that fail to parse (unknown formats, bad offsets) are skipped
/// rather than ending the search.
pub fn best_subtable<'a>(table: &cmap::Table<'a>) -> Option<cmap::Subtable<'a>> {
    let subtables = table.subtables;
    BEST_CMAP_PRIORITY.iter().find_map(|&(platform, encoding)| {
        (0..subtables.len())
            .filter_map(|index| subtables.get(index))
            .find(|subtable| subtable.platform_id == platform && subtable.encoding_id == encoding)
    })
}

/// Code points of the font's best character map, in map order, without
/// line feed and carriage return.
pub fn extract_codepoints(font_data: &[u8]) -> AtlasResult<Vec<u32>> {
    let face = RawFace::parse(font_data, 0).context("not a valid font file")?;
    let cmap_data = face
        .table(Tag::from_bytes(b"cmap"))
        .context("font has no character map (cmap table)")?;
    let table = cmap::Table::parse(cmap_data).context("character map is malformed")?;
    let subtable = best_subtable(&table).context("font has no Unicode character map")?;

    let mut seen = HashSet::new();
    let mut codepoints = Vec::new();
    subtable.codepoints(|codepoint| {
        if !EXCLUDED_CODEPOINTS.contains(&codepoint) && seen.insert(codepoint) {
            codepoints.push(codepoint);
        }
    });

    Ok(codepoints)
}

/// Reads a font from disk and extracts its supported code points.
pub fn read_codepoints(font_path: &Path) -> AtlasResult<Vec<u32>> {
    let data = fs::read(font_path).with_file_context("read", font_path)?;
    extract_codepoints(&data).with_context(|| {
        format!("Failed to read character map of '{}'", font_path.display())
    })
}

/// Decimal code points, each followed by `", "`
pub fn format_charset(codepoints: &[u32]) -> String {
    codepoints
        .iter()
        .map(|codepoint| format!("{codepoint}{CHARSET_SEPARATOR}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::{font_with_codepoints, FontBuilder};

    #[test]
    fn excludes_line_feed_and_carriage_return() {
        let font = font_with_codepoints(&[65, 66, 10, 13, 9731]);
        let codepoints = extract_codepoints(&font).unwrap();

        assert_eq!(codepoints, vec![65, 66, 9731]);
    }

    #[test]
    fn keeps_map_order() {
        let font = font_with_codepoints(&[0x263A, 0x41, 0x1F600, 0x20]);
        let codepoints = extract_codepoints(&font).unwrap();

        assert_eq!(codepoints, vec![0x263A, 0x41, 0x1F600, 0x20]);
    }

    #[test]
    fn repeated_codepoints_are_written_once() {
        let font = font_with_codepoints(&[65, 66, 65, 67, 66]);
        let codepoints = extract_codepoints(&font).unwrap();

        assert_eq!(codepoints, vec![65, 66, 67]);
    }

    #[test]
    fn prefers_full_repertoire_windows_map() {
        let font = FontBuilder::new()
            .format4(3, 1, &[0x41, 0x42])
            .format12(3, 10, &[0x41, 0x42, 0x1F600])
            .build();

        assert_eq!(extract_codepoints(&font).unwrap(), vec![0x41, 0x42, 0x1F600]);
    }

    #[test]
    fn windows_bmp_map_beats_unicode_platform_bmp_map() {
        let font = FontBuilder::new()
            .format4(0, 3, &[0x30])
            .format4(3, 1, &[0x31, 0x32])
            .build();

        assert_eq!(extract_codepoints(&font).unwrap(), vec![0x31, 0x32]);
    }

    #[test]
    fn falls_back_to_unicode_platform_map() {
        let font = FontBuilder::new().format4(0, 3, &[0x61, 0x62, 0x0A]).build();

        assert_eq!(extract_codepoints(&font).unwrap(), vec![0x61, 0x62]);
    }

    #[test]
    fn unparseable_subtable_does_not_hide_later_ones() {
        let font = FontBuilder::new()
            .raw_subtable(1, 0, &[0, 99, 0, 8, 0, 0, 0, 0])
            .format4(3, 1, &[0x41, 0x42])
            .build();

        assert_eq!(extract_codepoints(&font).unwrap(), vec![0x41, 0x42]);
    }

    #[test]
    fn symbol_only_font_has_no_unicode_map() {
        let font = FontBuilder::new().format4(3, 0, &[0xF041]).build();
        let err = extract_codepoints(&font).unwrap_err();

        assert!(err.to_string().contains("no Unicode character map"));
    }

    #[test]
    fn font_without_cmap_is_rejected() {
        let font = FontBuilder::new().build_without_cmap();
        let err = extract_codepoints(&font).unwrap_err();

        assert!(err.to_string().contains("no character map"));
    }

    #[test]
    fn garbage_is_not_a_font() {
        let err = extract_codepoints(b"definitely not a font").unwrap_err();

        assert!(err.to_string().contains("not a valid font file"));
    }

    #[test]
    fn read_codepoints_reports_font_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Broken.ttf");
        std::fs::write(&path, b"nope").unwrap();

        let err = read_codepoints(&path).unwrap_err();
        assert!(err.to_string().contains("Broken.ttf"));
    }

    #[test]
    fn charset_has_trailing_separator() {
        assert_eq!(format_charset(&[65, 66, 9731]), "65, 66, 9731, ");
        assert_eq!(format_charset(&[]), "");
    }
}
