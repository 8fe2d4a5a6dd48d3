//! ConnectivityMonitor: reads tracked signals and drives the event log.
//!
//! Two independent triggers feed the same store: platform change
//! callbacks (via [`SignalSubscription`]) and periodic poll rounds (via
//! [`PeriodicScheduler`]). Both may fire concurrently; the store's
//! per-location lock keeps their appends whole.

use crate::errors::{AppError, AppResult};
use crate::models::record::StatusRecord;
use crate::models::signal_kind::SignalKind;
use crate::monitor::probes::SignalProbe;
use crate::monitor::scheduler::{PeriodicScheduler, TaskHandle};
use crate::monitor::subscription::{SignalSubscription, SubscriptionHandle};
use crate::store::event_log::EventLogStore;
use crate::utils::sync::lock_or_recover;
use crate::utils::time::Clock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub type ObserverId = u64;

type RecordObserver = Box<dyn Fn(&StatusRecord) + Send + Sync>;

pub struct ConnectivityMonitor {
    store: Arc<EventLogStore>,
    location: PathBuf,
    clock: Arc<dyn Clock>,
    probes: Vec<Box<dyn SignalProbe>>,
    observers: Mutex<Vec<(ObserverId, RecordObserver)>>,
    next_observer: AtomicU64,
    // UI display hint only; never consulted for dedup decisions
    last_seen: Mutex<HashMap<SignalKind, String>>,
}

impl ConnectivityMonitor {
    pub fn new(store: Arc<EventLogStore>, location: &Path, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            location: location.to_path_buf(),
            clock,
            probes: Vec::new(),
            observers: Mutex::new(Vec::new()),
            next_observer: AtomicU64::new(1),
            last_seen: Mutex::new(HashMap::new()),
        }
    }

    /// Add a signal to the tracked set. Call before sharing the monitor
    /// across threads.
    pub fn track(&mut self, probe: Box<dyn SignalProbe>) {
        self.probes.push(probe);
    }

    pub fn tracked(&self) -> Vec<SignalKind> {
        self.probes.iter().map(|p| p.kind()).collect()
    }

    /// Event-driven entry: the platform reported a transition on `kind`.
    ///
    /// Reads the probe's current status and appends one record. Every
    /// delivery is logged, even when the state matches the previously
    /// recorded one. Failures are logged and swallowed; monitoring keeps
    /// running.
    pub fn on_signal_change(&self, kind: SignalKind) {
        if let Err(e) = self.check_signal(kind) {
            log::warn!("status check for {} failed: {}", kind.name(), e);
        }
    }

    /// Log the current state of `kind` once at startup, so the log opens
    /// with the state the device is already in.
    pub fn check_initial_state(&self, kind: SignalKind) {
        self.on_signal_change(kind);
    }

    /// One poll round: read every tracked signal and append one record
    /// per signal, unconditionally. A failed read or append on one signal
    /// does not stop the remaining signals. Returns how many records were
    /// appended.
    pub fn run_round(&self) -> usize {
        let mut appended = 0;
        for probe in &self.probes {
            let kind = probe.kind();
            match probe
                .current_status()
                .and_then(|status| self.record(kind, status))
            {
                Ok(_) => appended += 1,
                Err(e) => log::warn!("round check for {} failed: {}", kind.name(), e),
            }
        }
        appended
    }

    fn check_signal(&self, kind: SignalKind) -> AppResult<StatusRecord> {
        let probe = self
            .probes
            .iter()
            .find(|p| p.kind() == kind)
            .ok_or_else(|| AppError::UnknownSignal(kind.name().to_string()))?;
        let status = probe.current_status()?;
        self.record(kind, status)
    }

    fn record(&self, kind: SignalKind, status: String) -> AppResult<StatusRecord> {
        let record = StatusRecord::new(&self.clock.now(), kind.name(), &status);
        self.store.append(&self.location, &record)?;

        lock_or_recover(&self.last_seen).insert(kind, status);
        self.notify(&record);
        Ok(record)
    }

    fn notify(&self, record: &StatusRecord) {
        let observers = lock_or_recover(&self.observers);
        for (_, observer) in observers.iter() {
            observer(record);
        }
    }

    /// Register an `on_record_appended` hook for UI/notification layers.
    pub fn subscribe(
        &self,
        observer: impl Fn(&StatusRecord) + Send + Sync + 'static,
    ) -> ObserverId {
        let id = self.next_observer.fetch_add(1, Ordering::SeqCst);
        lock_or_recover(&self.observers).push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: ObserverId) {
        lock_or_recover(&self.observers).retain(|(oid, _)| *oid != id);
    }

    /// Last status recorded for `kind` by this monitor instance.
    pub fn last_status(&self, kind: SignalKind) -> Option<String> {
        lock_or_recover(&self.last_seen).get(&kind).cloned()
    }

    /// Full persisted history, for populating an initial view.
    pub fn load_history(&self) -> AppResult<Vec<StatusRecord>> {
        self.store.load_all(&self.location)
    }

    /// Register with the platform's change-notification mechanism for
    /// `kind`. The callback runs on the platform's thread. Tear down with
    /// `source.unsubscribe(handle)`; the callback holds only a weak
    /// reference, so it goes quiet once the monitor is dropped.
    pub fn attach(
        self: &Arc<Self>,
        kind: SignalKind,
        source: &dyn SignalSubscription,
    ) -> SubscriptionHandle {
        let monitor = Arc::downgrade(self);
        source.subscribe(Box::new(move || {
            if let Some(monitor) = monitor.upgrade() {
                monitor.on_signal_change(kind);
            }
        }))
    }

    /// Hand the poll round to a scheduler as its unit of work.
    pub fn start_polling(
        self: &Arc<Self>,
        scheduler: &dyn PeriodicScheduler,
        interval: Duration,
        initial_delay: Duration,
    ) -> TaskHandle {
        let monitor = Arc::downgrade(self);
        scheduler.schedule(
            interval,
            initial_delay,
            Box::new(move || {
                if let Some(monitor) = monitor.upgrade() {
                    monitor.run_round();
                }
            }),
        )
    }
}
