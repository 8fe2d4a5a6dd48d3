//! Periodic execution of monitoring rounds.
//!
//! Durable, restart-surviving scheduling belongs to the host platform;
//! this module defines the seam plus an in-process thread scheduler for
//! hosts and tests without an OS-level facility.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// Recurring-task facility consumed by the monitor.
///
/// Implementations run `work` once after `initial_delay`, then every
/// `interval`, until the returned handle is canceled.
pub trait PeriodicScheduler {
    fn schedule(
        &self,
        interval: Duration,
        initial_delay: Duration,
        work: Box<dyn Fn() + Send + 'static>,
    ) -> TaskHandle;
}

/// Cancellation token for a scheduled task.
///
/// Dropping the handle also cancels: the worker observes the closed
/// channel at its next wakeup and exits. In-flight work finishes; the
/// store's atomic rename keeps the log whole either way.
pub struct TaskHandle {
    stop: Sender<()>,
}

impl TaskHandle {
    pub fn cancel(self) {
        let _ = self.stop.send(());
    }
}

/// In-process scheduler backed by one worker thread per task.
pub struct ThreadScheduler;

impl PeriodicScheduler for ThreadScheduler {
    fn schedule(
        &self,
        interval: Duration,
        initial_delay: Duration,
        work: Box<dyn Fn() + Send + 'static>,
    ) -> TaskHandle {
        let (stop, ticks) = mpsc::channel();

        thread::spawn(move || {
            match ticks.recv_timeout(initial_delay) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
            }
            loop {
                work();
                match ticks.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                }
            }
        });

        TaskHandle { stop }
    }
}
