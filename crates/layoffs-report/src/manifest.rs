//! Run manifest tying outputs back to their input.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use layoffs_transform::CleaningReport;

use crate::hash::sha256_file;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    pub path: PathBuf,
    pub sha256: String,
}

impl OutputFile {
    /// Checksum an already-written output.
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            sha256: sha256_file(path)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunManifest {
    pub input: PathBuf,
    pub input_sha256: String,
    pub ingest_issues: usize,
    pub cleaning: CleaningReport,
    pub outputs: Vec<OutputFile>,
}

pub fn write_manifest(path: &Path, manifest: &RunManifest) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), manifest)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
