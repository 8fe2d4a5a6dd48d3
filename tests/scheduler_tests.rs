use rconnlogger::monitor::connectivity::ConnectivityMonitor;
use rconnlogger::monitor::probes::InternetReachability;
use rconnlogger::monitor::scheduler::{PeriodicScheduler, ThreadScheduler};
use rconnlogger::store::event_log::EventLogStore;
use rconnlogger::utils::time::SystemClock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

mod common;
use common::{FlagSource, setup_log_dir};

#[test]
fn test_initial_delay_is_honored() {
    let counter = Arc::new(AtomicUsize::new(0));
    let scheduler = ThreadScheduler;

    let work = {
        let counter = Arc::clone(&counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    };
    let handle = scheduler.schedule(Duration::from_millis(20), Duration::from_millis(200), work);

    thread::sleep(Duration::from_millis(50));
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    handle.cancel();
}

#[test]
fn test_task_repeats_until_canceled() {
    let counter = Arc::new(AtomicUsize::new(0));
    let scheduler = ThreadScheduler;

    let work = {
        let counter = Arc::clone(&counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    };
    let handle = scheduler.schedule(Duration::from_millis(20), Duration::from_millis(10), work);

    thread::sleep(Duration::from_millis(300));
    let before_cancel = counter.load(Ordering::SeqCst);
    assert!(before_cancel >= 2, "expected repeats, got {}", before_cancel);

    handle.cancel();
    thread::sleep(Duration::from_millis(100));
    let after_cancel = counter.load(Ordering::SeqCst);

    thread::sleep(Duration::from_millis(150));
    assert_eq!(counter.load(Ordering::SeqCst), after_cancel);
}

#[test]
fn test_dropping_the_handle_cancels() {
    let counter = Arc::new(AtomicUsize::new(0));
    let scheduler = ThreadScheduler;

    let work = {
        let counter = Arc::clone(&counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    };
    let handle = scheduler.schedule(Duration::from_millis(20), Duration::from_millis(10), work);
    drop(handle);

    thread::sleep(Duration::from_millis(150));
    let count = counter.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(150));
    assert_eq!(counter.load(Ordering::SeqCst), count);
}

#[test]
fn test_polling_appends_rounds_until_canceled() {
    let dir = setup_log_dir("polling");
    let store = Arc::new(EventLogStore::new());
    let mut monitor = ConnectivityMonitor::new(store, &dir, Arc::new(SystemClock));
    monitor.track(Box::new(InternetReachability::new(Box::new(FlagSource(
        Arc::new(AtomicBool::new(true)),
    )))));
    let monitor = Arc::new(monitor);

    let scheduler = ThreadScheduler;
    let handle = monitor.start_polling(
        &scheduler,
        Duration::from_millis(20),
        Duration::from_millis(10),
    );

    thread::sleep(Duration::from_millis(300));
    handle.cancel();

    let after_cancel = monitor.load_history().expect("history").len();
    assert!(after_cancel >= 2, "expected rounds, got {}", after_cancel);

    thread::sleep(Duration::from_millis(200));
    assert_eq!(monitor.load_history().expect("history").len(), after_cancel);
}
