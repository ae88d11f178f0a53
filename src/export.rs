use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing::{info, warn};

use crate::config::OutputMode;
use crate::models::ItemRecord;

/// Serialize the full record collection to `path` as CSV.
///
/// `Overwrite` truncates the file and writes a header row derived from the
/// record field names; `Append` adds rows to the end without repeating the
/// header. An empty collection writes nothing and leaves the target file
/// untouched.
pub fn write_records(path: &Path, mode: OutputMode, records: &[ItemRecord]) -> Result<()> {
    if records.is_empty() {
        warn!("No records to write, skipping {}", path.display());
        return Ok(());
    }

    let (file, has_headers) = match mode {
        OutputMode::Overwrite => (
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
            true,
        ),
        OutputMode::Append => (
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open {} for append", path.display()))?,
            false,
        ),
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(has_headers)
        .from_writer(file);

    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("Failed to write record to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    info!(
        "Saved {} records to {} ({} mode)",
        records.len(),
        path.display(),
        mode
    );

    Ok(())
}
