use crate::errors::{AppError, AppResult};
use crate::models::record::StatusRecord;
use std::fs;
use std::path::Path;

/// Write the records as pretty-printed JSON.
pub fn write_json(path: &Path, records: &[StatusRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
