//! Tests for builder modules

use temporal_priority_queue::builders::TemporalQueueBuilder;
use temporal_priority_queue::config::TemporalQueueConfig;
use temporal_priority_queue::core::QueueError;
use temporal_priority_queue::util::{Clock, ManualClock};

#[test]
fn test_builder_defaults() {
    let builder = TemporalQueueBuilder::new();
    assert_eq!(*builder.config(), TemporalQueueConfig::default());

    let queue = builder.build::<String>().unwrap();
    assert_eq!(queue.size(), 0);
    assert!((queue.time_rank_increase() - 60_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_builder_overrides() {
    let queue = TemporalQueueBuilder::new()
        .with_time_rank_increase(250.0)
        .with_initial_capacity(64)
        .with_clock(ManualClock::new(0))
        .build::<u8>()
        .unwrap();

    assert!((queue.time_rank_increase() - 250.0).abs() < f64::EPSILON);
    assert_eq!(queue.config().initial_capacity, 64);
}

#[test]
fn test_builder_from_config() {
    let config = TemporalQueueConfig::new().with_time_rank_increase(5.0);
    let builder = TemporalQueueBuilder::from_config(config);
    assert_eq!(*builder.config(), config);
}

#[test]
fn test_builder_rejects_invalid_interval() {
    let result = TemporalQueueBuilder::new()
        .with_time_rank_increase(-10.0)
        .build::<u8>();
    assert!(matches!(result, Err(QueueError::InvalidConfig(_))));
}

#[test]
fn test_builder_shares_manual_clock() {
    let clock = ManualClock::new(0);
    let mut queue = TemporalQueueBuilder::new()
        .with_time_rank_increase(1.0)
        .with_clock(clock.clone())
        .build()
        .unwrap();

    queue.enqueue("early", 0.0);
    clock.advance(3);
    queue.enqueue("late", 2.0);

    assert_eq!(queue.clock().now(), 3);
    assert_eq!(queue.dequeue(), Some("early"));
}
