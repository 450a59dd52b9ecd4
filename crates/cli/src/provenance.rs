//! Sidecar describing how a trajectory file was produced.
//!
//! `<stem>.provenance.json` records the run label, library version, step
//! settings, controls, and the first and last vehicle states, so a trajectory
//! can be checked without re-reading the whole file.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::demo::AuvSample;

/// Constant controls as written to disk.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ControlsRecord {
    pub accel: [f64; 3],
    pub angular_accel: f64,
}

/// Everything needed to reproduce or spot-check a simulation run.
#[derive(Clone, Debug, Serialize)]
pub struct RunRecord {
    pub label: Option<String>,
    pub auvgeom_version: &'static str,
    pub dt: f64,
    pub steps: usize,
    pub controls: ControlsRecord,
    pub initial: AuvSample,
    pub final_state: AuvSample,
    pub output: String,
}

impl RunRecord {
    /// Build from a non-empty trajectory; `None` if `samples` is empty.
    pub fn from_samples(
        label: Option<String>,
        controls: ControlsRecord,
        dt: f64,
        samples: &[AuvSample],
        output: &Path,
    ) -> Option<Self> {
        let initial = samples.first()?.clone();
        let final_state = samples.last()?.clone();
        Some(Self {
            label,
            auvgeom_version: auvgeom::VERSION,
            dt,
            steps: samples.len() - 1,
            controls,
            initial,
            final_state,
            output: output.to_string_lossy().into_owned(),
        })
    }
}

/// `dive.json` → `dive.provenance.json`, in the same directory.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Write the record next to `artifact` and return the sidecar path.
pub fn write_sidecar(artifact: &Path, record: &RunRecord) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
