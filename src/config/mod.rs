//! Configuration models for temporal queues.

pub mod queue;

pub use queue::{TemporalQueueConfig, DEFAULT_TIME_RANK_INCREASE};
