//! Atlas generation
//!
//! This module drives the external generator:
//! - The generator seam and the `msdf-atlas-gen` subprocess
//! - The per-font build loop
//! - The end of run report

pub mod driver;
pub mod generator;
pub mod report;

pub use driver::build_atlases;
pub use generator::{AtlasGenerator, AtlasJob, MsdfAtlasGen};
pub use report::{BuildReport, FailureStage, FontOutcome, FontStatus};
