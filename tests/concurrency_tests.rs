use rconnlogger::store::event_log::EventLogStore;
use std::sync::Arc;
use std::thread;

mod common;
use common::{record, setup_log_dir};

/// Two concurrent writers against the same location: every append must
/// survive, none may be lost to an interleaved read-modify-write.
#[test]
fn test_interleaved_appends_lose_nothing() {
    let dir = setup_log_dir("interleaved");
    let store = Arc::new(EventLogStore::new());

    const PER_WRITER: usize = 50;

    let writers: Vec<_> = ["callback", "worker"]
        .into_iter()
        .map(|name| {
            let store = Arc::clone(&store);
            let dir = dir.clone();
            thread::spawn(move || {
                for i in 0..PER_WRITER {
                    let r = record(
                        "2024-01-15 09:30:00",
                        "Internet",
                        &format!("{}-{}", name, i),
                    );
                    store.append(&dir, &r).expect("append");
                }
            })
        })
        .collect();

    for w in writers {
        w.join().expect("writer thread");
    }

    let records = store.load_all(&dir).expect("load");
    assert_eq!(records.len(), PER_WRITER * 2);

    // each writer's records are all present and in its own order
    for name in ["callback", "worker"] {
        let statuses: Vec<_> = records
            .iter()
            .filter(|r| r.status.starts_with(name))
            .map(|r| r.status.clone())
            .collect();
        let expected: Vec<_> = (0..PER_WRITER).map(|i| format!("{}-{}", name, i)).collect();
        assert_eq!(statuses, expected);
    }
}

/// A reader racing a writer must always observe a parseable array,
/// never a half-written file.
#[test]
fn test_reader_never_sees_partial_write() {
    let dir = setup_log_dir("reader_race");
    let store = Arc::new(EventLogStore::new());

    let writer = {
        let store = Arc::clone(&store);
        let dir = dir.clone();
        thread::spawn(move || {
            for i in 0..100 {
                let r = record("2024-01-15 09:30:00", "Internet", &format!("s-{}", i));
                store.append(&dir, &r).expect("append");
            }
        })
    };

    let reader = {
        let store = Arc::clone(&store);
        let dir = dir.clone();
        thread::spawn(move || {
            let mut last_len = 0;
            for _ in 0..200 {
                let records = store.load_all(&dir).expect("load must never fail mid-write");
                // the log only grows
                assert!(records.len() >= last_len);
                last_len = records.len();
            }
        })
    };

    writer.join().expect("writer thread");
    reader.join().expect("reader thread");

    assert_eq!(store.load_all(&dir).expect("load").len(), 100);
}
