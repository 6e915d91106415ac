pub mod atlas;
pub mod core;
pub mod data;
pub mod io;
pub mod utils;

pub use crate::atlas::{build_atlases, AtlasGenerator, BuildReport, MsdfAtlasGen};
pub use crate::core::{BuildConfig, CliArgs};
