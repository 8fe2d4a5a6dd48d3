//! Path utilities: expand ~, resolve and prepare log locations.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn is_absolute(path: &str) -> bool {
    PathBuf::from(path).is_absolute()
}

/// Resolve a location string to a writable directory, creating it if
/// missing. Rejects paths that exist but are not directories.
pub fn resolve_location(location: &str) -> AppResult<PathBuf> {
    let dir = expand_tilde(location);
    if dir.exists() && !dir.is_dir() {
        return Err(AppError::Config(format!(
            "log location is not a directory: {}",
            dir.display()
        )));
    }
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
