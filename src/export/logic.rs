// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::models::record::StatusRecord;
use std::path::Path;

/// Write `records` to `path` in the chosen format.
///
/// An existing destination is only overwritten with `force`.
pub fn export_records(
    records: &[StatusRecord],
    path: &Path,
    format: &ExportFormat,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => super::csv::write_csv(path, records)?,
        ExportFormat::Json => super::json::write_json(path, records)?,
    }

    log::info!("{} export completed: {}", format.as_str(), path.display());
    Ok(())
}
