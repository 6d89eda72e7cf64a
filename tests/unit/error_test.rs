//! Tests for error types

use temporal_priority_queue::core::QueueError;

#[test]
fn test_invalid_config_error() {
    let err = QueueError::InvalidConfig("time_rank_increase must be finite".to_string());
    assert_eq!(
        format!("{err}"),
        "invalid configuration: time_rank_increase must be finite"
    );
}

#[test]
fn test_parse_error() {
    let err = QueueError::Parse("expected value".to_string());
    assert_eq!(format!("{err}"), "parse error: expected value");
}
