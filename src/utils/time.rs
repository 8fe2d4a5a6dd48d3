//! Time utilities: local timestamp formatting and parsing for log records.

use chrono::{Local, NaiveDateTime};

/// Format shared by every record in the log: local time, second
/// precision, no timezone marker. Concurrent same-second events are
/// indistinguishable by timestamp alone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of record timestamps. Injectable so tests control time.
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Wall-clock time in the local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}
