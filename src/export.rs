//! JSON Lines export of function records
//!
//! One serialized [`FunctionRecord`] per line, the format embedding
//! pipelines stream from.

use crate::types::FunctionRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write records to any writer as JSON Lines, returning the number written
pub fn write_json_lines<W: Write>(writer: W, records: &[FunctionRecord]) -> Result<usize> {
    let mut writer = BufWriter::new(writer);
    for record in records {
        serde_json::to_writer(&mut writer, record).context("Failed to serialize record")?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(records.len())
}

/// Create (or truncate) `path` and write records to it as JSON Lines
pub fn export_json_lines(path: &Path, records: &[FunctionRecord]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create export file {:?}", path))?;
    let written = write_json_lines(file, records)?;
    tracing::info!("Wrote {} records to {}", written, path.display());
    Ok(written)
}
