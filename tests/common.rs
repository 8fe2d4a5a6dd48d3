#![allow(dead_code)]
use rconnlogger::errors::{AppError, AppResult};
use rconnlogger::models::record::StatusRecord;
use rconnlogger::monitor::probes::StateSource;
use rconnlogger::utils::time::Clock;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Create a unique, empty log directory inside the system temp dir and
/// remove anything left over from a previous run
pub fn setup_log_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rconnlogger", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create log dir");
    path
}

pub fn record(time: &str, connection_type: &str, status: &str) -> StatusRecord {
    StatusRecord::new(time, connection_type, status)
}

/// Toggleable state source for driving probes in tests.
pub struct FlagSource(pub Arc<AtomicBool>);

impl StateSource for FlagSource {
    fn is_active(&self) -> AppResult<bool> {
        Ok(self.0.load(Ordering::SeqCst))
    }
}

/// Source that always fails, for exercising per-signal failure isolation.
pub struct BrokenSource;

impl StateSource for BrokenSource {
    fn is_active(&self) -> AppResult<bool> {
        Err(AppError::Signal("probe unavailable".to_string()))
    }
}

/// Clock that returns a fixed timestamp.
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now(&self) -> String {
        self.0.clone()
    }
}

/// Clock whose seconds advance by one on every call, for ordering
/// assertions.
pub struct TickClock {
    counter: AtomicU64,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }
}

impl Clock for TickClock {
    fn now(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst).min(59);
        format!("2024-01-15 09:30:{:02}", n)
    }
}
