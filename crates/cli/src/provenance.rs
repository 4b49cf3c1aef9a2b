//! `<artifact>.provenance.json` sidecars: which command produced a CSV, from
//! which inputs, with which tolerances and parameters.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// One input file as it was read: path, byte size, and parsed point count.
#[derive(Debug, Serialize)]
pub struct InputRecord {
    pub path: String,
    pub bytes: u64,
    pub points: usize,
}

/// Sidecar document written next to an output CSV.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub hull2d_version: &'static str,
    pub command: &'static str,
    pub inputs: Vec<InputRecord>,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Sidecar {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            hull2d_version: hull2d::VERSION,
            command,
            inputs: Vec::new(),
            params,
            outputs: Vec::new(),
        }
    }

    /// Record an input file; its size is read from the filesystem.
    pub fn with_input(mut self, path: &Path, points: usize) -> Result<Self> {
        let bytes = fs::metadata(path)
            .with_context(|| format!("stat {}", path.display()))?
            .len();
        self.inputs.push(InputRecord {
            path: path.display().to_string(),
            bytes,
            points,
        });
        Ok(self)
    }

    /// Write the sidecar for `artifact` and return its path.
    pub fn write(mut self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
        self.outputs.push(artifact.display().to_string());
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `dir/hull.csv` -> `dir/hull.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "points".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}
