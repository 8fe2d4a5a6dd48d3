//! Durable append-only store for status records.
//!
//! One JSON array per location, in `connection_logs.json`. Writes are
//! serialized per location and land via temp-file-then-rename, so a crash
//! mid-write never truncates history already on disk.

use crate::errors::{AppError, AppResult};
use crate::models::record::StatusRecord;
use crate::utils::sync::lock_or_recover;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// File name used at every log location.
pub const LOG_FILE_NAME: &str = "connection_logs.json";

/// Append-only event log store.
///
/// Safe for concurrent callers: a per-location lock guards the whole
/// read-modify-write-rename sequence, so an event-driven writer and a
/// periodic poller targeting the same location never lose an update to
/// each other. Final file order is whichever caller locks first;
/// timestamps, not file order, are authoritative for a timeline.
pub struct EventLogStore {
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl EventLogStore {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn location_lock(&self, location: &Path) -> Arc<Mutex<()>> {
        let mut map = lock_or_recover(&self.locks);
        map.entry(location.to_path_buf())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Append one record to the log at `location`.
    ///
    /// The log file is created lazily on first append. Existing content
    /// that fails to parse is reported as [`AppError::Corrupt`] and left
    /// untouched; history is never discarded to make an append succeed.
    pub fn append(&self, location: &Path, record: &StatusRecord) -> AppResult<()> {
        let lock = self.location_lock(location);
        let _guard = lock_or_recover(&lock);

        let path = location.join(LOG_FILE_NAME);
        let mut records = read_records(&path)?;
        records.push(record.clone());
        write_atomic(&path, &records)
    }

    /// All records at `location` in persisted order.
    ///
    /// A missing or empty file is an empty log; unparseable content is
    /// [`AppError::Corrupt`], never an empty result.
    pub fn load_all(&self, location: &Path) -> AppResult<Vec<StatusRecord>> {
        let lock = self.location_lock(location);
        let _guard = lock_or_recover(&lock);

        read_records(&location.join(LOG_FILE_NAME))
    }
}

impl Default for EventLogStore {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn read_records(path: &Path) -> AppResult<Vec<StatusRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content)
        .map_err(|e| AppError::Corrupt(format!("{}: {}", path.display(), e)))
}

/// Rewrite the full array through a sibling temp file and rename it into
/// place. The rename stays on one filesystem, so readers observe either
/// the old array or the new one, never a prefix.
pub(crate) fn write_atomic(path: &Path, records: &[StatusRecord]) -> AppResult<()> {
    // compact output, matching the format the log was born with
    let json = serde_json::to_string(records)
        .map_err(|e| AppError::Other(format!("serialize event log: {}", e)))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
