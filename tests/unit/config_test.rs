//! Tests for configuration validation

use temporal_priority_queue::config::{TemporalQueueConfig, DEFAULT_TIME_RANK_INCREASE};
use temporal_priority_queue::core::QueueError;

#[test]
fn test_queue_config_validation() {
    let valid = TemporalQueueConfig {
        time_rank_increase: 1_000.0,
        initial_capacity: 16,
    };
    assert!(valid.validate().is_ok());
}

#[test]
fn test_queue_config_invalid_zero_interval() {
    let invalid = TemporalQueueConfig {
        time_rank_increase: 0.0,
        initial_capacity: 16,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_queue_config_invalid_infinite_interval() {
    let invalid = TemporalQueueConfig {
        time_rank_increase: f64::INFINITY,
        initial_capacity: 0,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_queue_config_from_json() {
    let json = r#"{
        "time_rank_increase": 30000.0,
        "initial_capacity": 128
    }"#;

    let config = TemporalQueueConfig::from_json_str(json).unwrap();
    assert!((config.time_rank_increase - 30_000.0).abs() < f64::EPSILON);
    assert_eq!(config.initial_capacity, 128);
}

#[test]
fn test_queue_config_from_json_uses_defaults() {
    let config = TemporalQueueConfig::from_json_str("{}").unwrap();
    assert!((config.time_rank_increase - DEFAULT_TIME_RANK_INCREASE).abs() < f64::EPSILON);
    assert_eq!(config.initial_capacity, 0);
}

#[test]
fn test_queue_config_from_json_rejects_invalid_values() {
    let result = TemporalQueueConfig::from_json_str(r#"{ "time_rank_increase": -5 }"#);
    assert!(matches!(result, Err(QueueError::InvalidConfig(_))));
}

#[test]
fn test_queue_config_from_json_rejects_malformed_input() {
    let result = TemporalQueueConfig::from_json_str("{ time_rank_increase: ");
    assert!(matches!(result, Err(QueueError::Parse(_))));
}

#[test]
fn test_queue_config_serializes() {
    let config = TemporalQueueConfig::new().with_initial_capacity(8);
    let json = serde_json::to_value(config).unwrap();
    assert_eq!(json["initial_capacity"], 8);
    assert_eq!(json["time_rank_increase"], 60_000.0);
}
