//! Tests for utility functions

use temporal_priority_queue::util::{init_tracing, now_ms, Clock, ManualClock, SystemClock, Timestamp};

#[test]
fn test_system_clock_tracks_now_ms() {
    let before = now_ms();
    let reading = SystemClock.now();
    let after = now_ms();
    assert!(before <= reading && reading <= after);
}

#[test]
fn test_manual_clock_set_and_advance() {
    let clock = ManualClock::new(100);
    assert_eq!(clock.now(), 100);
    clock.set(5);
    assert_eq!(clock.advance(10), 15);
    assert_eq!(clock.now(), 15);
}

#[test]
fn test_function_clock() {
    fn epoch() -> Timestamp {
        0
    }
    assert_eq!(epoch.now(), 0);
}

#[test]
fn test_init_tracing_is_repeatable() {
    init_tracing();
    init_tracing();
    tracing::info!("tracing initialized twice without panicking");
}
