//! Error types for queue construction.

use thiserror::Error;

/// Errors produced while building a queue. Queue operations themselves
/// never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Configuration input could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}
