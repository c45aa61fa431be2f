//! Output generation for cleaning runs.
//!
//! - **Clean CSV**: the clean dataset in the nine-column source layout
//! - **Analytics JSON**: every analytics view
//! - **Manifest**: input and output checksums plus the cleaning report

mod dataset;
mod frame;
mod hash;
mod json;
mod manifest;

pub use dataset::{NULL_MARKER, write_clean_csv};
pub use frame::build_record_frame;
pub use hash::{sha256_file, sha256_hex};
pub use json::write_analytics_json;
pub use manifest::{OutputFile, RunManifest, write_manifest};

/// File name of the clean dataset within the output directory.
pub const CLEAN_CSV_FILE: &str = "layoffs_clean.csv";
/// File name of the analytics report within the output directory.
pub const ANALYTICS_JSON_FILE: &str = "layoffs_analytics.json";
/// File name of the run manifest within the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";
