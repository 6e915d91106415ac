//! Per-run build report
//!
//! Every font ends up as one `FontOutcome`. A failed font never stops the run,
//! so the report is how partial success is surfaced at the end.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::errors::{AtlasContext, AtlasResult};
use crate::io::outputs::OutputPaths;

/// Step of the per-font pipeline that failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    ListDirectory,
    Extract,
    WriteCharset,
    Generate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FontStatus {
    Built,
    /// Charset written, generator skipped by a dry run
    Planned,
    Failed { stage: FailureStage, error: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FontOutcome {
    pub asset: String,
    /// `None` when the asset directory itself could not be listed
    pub font: Option<PathBuf>,
    pub outputs: Option<OutputPaths>,
    pub codepoints: Option<usize>,
    #[serde(flatten)]
    pub status: FontStatus,
}

impl FontOutcome {
    pub fn new(asset: &str, font: &Path, outputs: OutputPaths) -> Self {
        Self {
            asset: asset.to_string(),
            font: Some(font.to_path_buf()),
            outputs: Some(outputs),
            codepoints: None,
            status: FontStatus::Planned,
        }
    }

    pub fn directory_failed(asset: &str, error: &anyhow::Error) -> Self {
        Self {
            asset: asset.to_string(),
            font: None,
            outputs: None,
            codepoints: None,
            status: FontStatus::Failed {
                stage: FailureStage::ListDirectory,
                error: format!("{error:#}"),
            },
        }
    }

    pub fn with_status(mut self, status: FontStatus) -> Self {
        self.status = status;
        self
    }

    pub fn failed(self, stage: FailureStage, error: &anyhow::Error) -> Self {
        self.with_status(FontStatus::Failed {
            stage,
            error: format!("{error:#}"),
        })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, FontStatus::Failed { .. })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct BuildReport {
    pub root: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub directories_scanned: usize,
    pub fonts: Vec<FontOutcome>,
}

impl BuildReport {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            started_at: Utc::now(),
            finished_at: None,
            directories_scanned: 0,
            fonts: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: FontOutcome) {
        self.fonts.push(outcome);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn built_count(&self) -> usize {
        self.count(|status| matches!(status, FontStatus::Built))
    }

    pub fn planned_count(&self) -> usize {
        self.count(|status| matches!(status, FontStatus::Planned))
    }

    pub fn failures(&self) -> impl Iterator<Item = &FontOutcome> {
        self.fonts.iter().filter(|outcome| outcome.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    fn count(&self, predicate: impl Fn(&FontStatus) -> bool) -> usize {
        self.fonts
            .iter()
            .filter(|outcome| predicate(&outcome.status))
            .count()
    }

    pub fn log_summary(&self) {
        let failed = self.failures().count();
        info!(
            "Scanned {} directories: {} atlases built, {} planned, {} failed",
            self.directories_scanned,
            self.built_count(),
            self.planned_count(),
            failed
        );
        for outcome in self.failures() {
            let font = outcome
                .font
                .as_deref()
                .map(|font| font.display().to_string())
                .unwrap_or_else(|| outcome.asset.clone());
            if let FontStatus::Failed { stage, error } = &outcome.status {
                warn!("{font}: {stage:?} failed: {error}");
            }
        }
    }

    pub fn to_json(&self) -> AtlasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> AtlasResult<()> {
        fs::write(path, self.to_json()?).with_file_context("write report", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MetadataFormat;
    use crate::io::outputs::OutputNaming;
    use anyhow::anyhow;

    fn outcome(asset: &str) -> FontOutcome {
        let dir = Path::new("fonts").join(asset);
        let font = dir.join("Regular.ttf");
        let outputs = OutputPaths::new(&dir, &font, OutputNaming::Shared, MetadataFormat::Json);
        FontOutcome::new(asset, &font, outputs)
    }

    #[test]
    fn counts_outcomes_by_status() {
        let mut report = BuildReport::new(Path::new("fonts"));
        report.record(outcome("sans").with_status(FontStatus::Built));
        report.record(outcome("mono").with_status(FontStatus::Built));
        report.record(
            outcome("serif").failed(FailureStage::Generate, &anyhow!("exit 1")),
        );
        report.record(FontOutcome::directory_failed(
            "locked",
            &anyhow!("permission denied"),
        ));

        assert_eq!(report.built_count(), 2);
        assert_eq!(report.planned_count(), 0);
        assert_eq!(report.failures().count(), 2);
        assert!(report.has_failures());
    }

    #[test]
    fn json_report_flattens_status() {
        let mut report = BuildReport::new(Path::new("fonts"));
        report.directories_scanned = 1;
        report.record(
            outcome("sans").failed(FailureStage::Extract, &anyhow!("bad cmap")),
        );
        report.finish();

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        let font = &json["fonts"][0];

        assert_eq!(json["directories_scanned"], 1);
        assert_eq!(font["asset"], "sans");
        assert_eq!(font["status"], "failed");
        assert_eq!(font["stage"], "extract");
        assert_eq!(font["error"], "bad cmap");
        assert!(json["finished_at"].is_string());
    }

    #[test]
    fn error_chain_is_kept() {
        let error = anyhow!("no such file").context("Could not start `gen`");
        let outcome = outcome("sans").failed(FailureStage::Generate, &error);

        assert_eq!(
            outcome.status,
            FontStatus::Failed {
                stage: FailureStage::Generate,
                error: "Could not start `gen`: no such file".to_string(),
            }
        );
    }
}
