use crate::errors::{AppError, AppResult};
use crate::models::record::StatusRecord;
use csv::Writer;
use std::path::Path;

/// Write the records as CSV, with the same column labels the JSON log
/// uses as keys.
pub fn write_csv(path: &Path, records: &[StatusRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    for record in records {
        wtr.serialize(record)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
