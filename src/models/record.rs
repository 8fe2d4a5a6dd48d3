use crate::utils::time;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One timestamped observation of a signal's state.
///
/// Serialized key order follows field order here: `Time`,
/// `Connection type`, `Status`. Logs written by earlier versions of the
/// app use exactly these keys, so the renames are load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    #[serde(rename = "Time")]
    pub time: String, // local "YYYY-MM-DD HH:MM:SS", no timezone marker
    #[serde(rename = "Connection type")]
    pub connection_type: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl StatusRecord {
    pub fn new(time: &str, connection_type: &str, status: &str) -> Self {
        Self {
            time: time.to_string(),
            connection_type: connection_type.to_string(),
            status: status.to_string(),
        }
    }

    /// Parse the record timestamp. Returns None for malformed values;
    /// records are never rejected on read because of their timestamp.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        time::parse_timestamp(&self.time)
    }
}
