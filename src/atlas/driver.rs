//! Atlas build driver
//!
//! Walks `root/<asset>/<font>` and, for every font file found, derives its
//! codepoints, writes the charset and runs the generator. Each font is its own
//! failure boundary: a font that cannot be read, a charset that cannot be
//! written or a generator that exits non-zero is logged and recorded, and the
//! run moves on. Only an unreadable root aborts the run.

use anyhow::Context;
use std::path::Path;
use tracing::{debug, error, info};

use crate::atlas::generator::{AtlasGenerator, AtlasJob};
use crate::atlas::report::{BuildReport, FailureStage, FontOutcome, FontStatus};
use crate::core::config::BuildConfig;
use crate::core::errors::AtlasResult;
use crate::data::unicode::read_codepoints;
use crate::io::charset::write_charset_file;
use crate::io::outputs::{OutputNaming, OutputPaths};
use crate::io::scan::{find_asset_dirs, find_font_files, AssetDir};

/// Builds an atlas for every font under `config.root_path`.
pub fn build_atlases<G: AtlasGenerator>(
    config: &BuildConfig,
    generator: &G,
) -> AtlasResult<BuildReport> {
    let mut report = BuildReport::new(&config.root_path);
    let assets = find_asset_dirs(&config.root_path).with_context(|| {
        format!("Failed to scan font root {}", config.root_path.display())
    })?;
    report.directories_scanned = assets.len();

    let suffix = config.font_suffix();
    for asset in &assets {
        let fonts = match find_font_files(&asset.path, &suffix) {
            Ok(fonts) => fonts,
            Err(err) => {
                error!("Skipping {}: {err:#}", asset.name);
                report.record(FontOutcome::directory_failed(&asset.name, &err));
                continue;
            }
        };
        if fonts.is_empty() {
            debug!("No *{suffix} files in {}", asset.path.display());
            continue;
        }

        let naming = OutputNaming::for_font_count(fonts.len());
        for font_path in &fonts {
            let outcome = build_font(config, generator, asset, font_path, naming);
            report.record(outcome);
        }
    }

    report.finish();
    Ok(report)
}

fn build_font<G: AtlasGenerator>(
    config: &BuildConfig,
    generator: &G,
    asset: &AssetDir,
    font_path: &Path,
    naming: OutputNaming,
) -> FontOutcome {
    let outputs = OutputPaths::new(&asset.path, font_path, naming, config.metadata_format);
    let mut outcome = FontOutcome::new(&asset.name, font_path, outputs.clone());

    let codepoints = match read_codepoints(font_path) {
        Ok(codepoints) => codepoints,
        Err(err) => {
            error!("{err:#}");
            return outcome.failed(FailureStage::Extract, &err);
        }
    };
    outcome.codepoints = Some(codepoints.len());

    if let Err(err) = write_charset_file(&outputs.charset, &codepoints) {
        error!("{err:#}");
        return outcome.failed(FailureStage::WriteCharset, &err);
    }
    debug!(
        "Wrote {} codepoints to {}",
        codepoints.len(),
        outputs.charset.display()
    );

    let job = AtlasJob::new(font_path, &outputs, config);
    if config.dry_run {
        info!("Dry run: {}", generator.command_line(&job));
        return outcome.with_status(FontStatus::Planned);
    }

    match generator.generate(&job) {
        Ok(()) => {
            info!("Built {}", outputs.image.display());
            outcome.with_status(FontStatus::Built)
        }
        Err(err) => {
            error!("msdf-atlas-gen command failed with error: {err:#}");
            outcome.failed(FailureStage::Generate, &err)
        }
    }
}
