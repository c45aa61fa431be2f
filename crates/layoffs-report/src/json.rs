use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use layoffs_analytics::AnalyticsReport;

/// Write the analytics report as pretty-printed JSON.
pub fn write_analytics_json(path: &Path, report: &AnalyticsReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote analytics report");
    Ok(())
}
