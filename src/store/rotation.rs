//! Retention for the otherwise unbounded event log.
//!
//! `connection_logs.json` grows for the life of the installation. Rotation
//! archives the live array into a compressed, timestamp-named sibling and
//! restarts the live file empty. Records are archived, never dropped.

use crate::errors::{AppError, AppResult};
use crate::store::event_log::{EventLogStore, LOG_FILE_NAME, read_records, write_atomic};
use crate::utils::sync::lock_or_recover;
use chrono::Local;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// When to rotate a location's log.
#[derive(Debug, Clone, Copy)]
pub struct RetentionPolicy {
    /// Rotate once the live log holds more than this many records.
    pub max_records: usize,
}

impl EventLogStore {
    /// Archive the live log at `location` if it exceeds the policy cap.
    ///
    /// Runs under the same per-location lock as `append`, so no record can
    /// slip between the archive write and the reset of the live file.
    /// Returns the archive path when a rotation happened.
    pub fn rotate(
        &self,
        location: &Path,
        policy: &RetentionPolicy,
    ) -> AppResult<Option<PathBuf>> {
        let lock = self.location_lock(location);
        let _guard = lock_or_recover(&lock);

        let path = location.join(LOG_FILE_NAME);
        let records = read_records(&path)?;
        if records.len() <= policy.max_records {
            return Ok(None);
        }

        let archive = archive_path(location);
        let json = serde_json::to_string(&records)
            .map_err(|e| AppError::Other(format!("serialize archive: {}", e)))?;

        let file = fs::File::create(&archive)?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(json.as_bytes())?;
        encoder.finish()?;

        write_atomic(&path, &[])?;

        log::info!(
            "rotated {} records into {}",
            records.len(),
            archive.display()
        );
        Ok(Some(archive))
    }
}

// Same-second rotations must not overwrite an earlier archive.
fn archive_path(location: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d%H%M%S").to_string();
    let mut candidate = location.join(format!("connection_logs-{}.json.gz", stamp));
    let mut n = 1;
    while candidate.exists() {
        candidate = location.join(format!("connection_logs-{}-{}.json.gz", stamp, n));
        n += 1;
    }
    candidate
}
