//! rConnLogger library root.
//! Connectivity monitoring with an append-only JSON event log: signal
//! probes, a lock-guarded crash-safe store, and rotation/export helpers.
//!
//! The crate is an embedded library. Platform concerns (connectivity
//! callbacks, radio state reads, durable job scheduling) enter through the
//! traits in [`monitor`]; everything written to disk goes through
//! [`store::event_log::EventLogStore`].

pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod monitor;
pub mod store;
pub mod utils;

pub use config::Config;
pub use errors::{AppError, AppResult};
pub use models::record::StatusRecord;
pub use models::signal_kind::SignalKind;
pub use monitor::connectivity::ConnectivityMonitor;
pub use store::event_log::{EventLogStore, LOG_FILE_NAME};
