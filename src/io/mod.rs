//! Input/Output Operations
//!
//! This module handles everything that touches the asset tree:
//! - Discovering asset directories and the font files inside them
//! - Naming the charset and atlas outputs for each font
//! - Writing charset files

pub mod charset;
pub mod outputs;
pub mod scan;

pub use charset::write_charset_file;
pub use outputs::{OutputNaming, OutputPaths};
pub use scan::{find_asset_dirs, find_font_files, AssetDir};
