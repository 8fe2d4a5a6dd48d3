// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Verify the destination can be created or overwritten.
///
/// - If the file does NOT exist -> Ok
/// - If it exists and `force` is set -> Ok
/// - If it exists and `force == false` -> error, nothing touched.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::Export(format!(
        "destination already exists: {}",
        path.display()
    )))
}
