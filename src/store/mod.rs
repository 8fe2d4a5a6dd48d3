pub mod event_log;
pub mod rotation;

pub use event_log::{EventLogStore, LOG_FILE_NAME};
pub use rotation::RetentionPolicy;
