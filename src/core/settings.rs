// Settings ///////////////////////////////////////////////////////////////////
// This module contains the fixed parameters of an atlas build.

// Generator //////////////////////////////////////////////////////////////////

/// File name of the atlas generator executable, looked up next to the root
pub const GENERATOR_NAME: &str = "msdf-atlas-gen";

/// Glyph size passed to the generator. Larger than the tool's default to get
/// more glyph resolution in the atlas.
pub const GLYPH_SIZE: u32 = 50;

// Font Discovery /////////////////////////////////////////////////////////////

/// Extension (without the dot) of files treated as fonts
pub const DEFAULT_FONT_EXTENSION: &str = "ttf";

// Charset ////////////////////////////////////////////////////////////////////

/// Line feed and carriage return never go into a charset
pub const EXCLUDED_CODEPOINTS: [u32; 2] = [10, 13];

/// Written after every code point, including the last one
pub const CHARSET_SEPARATOR: &str = ", ";

// Output File Names //////////////////////////////////////////////////////////

pub const CHARSET_FILE_STEM: &str = "charset";
pub const CHARSET_FILE_EXTENSION: &str = "txt";
pub const ATLAS_FILE_STEM: &str = "atlas";
pub const ATLAS_IMAGE_EXTENSION: &str = "png";
