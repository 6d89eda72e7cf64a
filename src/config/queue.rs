//! Temporal queue configuration.

use serde::{Deserialize, Serialize};

use crate::core::QueueError;

/// One minute in milliseconds.
pub const DEFAULT_TIME_RANK_INCREASE: f64 = 60_000.0;

/// Tuning knobs for a temporal priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalQueueConfig {
    /// Elapsed clock time equivalent to one unit of priority.
    pub time_rank_increase: f64,
    /// Entries to reserve space for up front.
    pub initial_capacity: usize,
}

impl Default for TemporalQueueConfig {
    fn default() -> Self {
        Self {
            time_rank_increase: DEFAULT_TIME_RANK_INCREASE,
            initial_capacity: 0,
        }
    }
}

impl TemporalQueueConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time rank increase.
    #[must_use]
    pub const fn with_time_rank_increase(mut self, time_rank_increase: f64) -> Self {
        self.time_rank_increase = time_rank_increase;
        self
    }

    /// Set the initial capacity.
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidConfig`] unless `time_rank_increase` is
    /// finite and strictly positive.
    pub fn validate(&self) -> Result<(), QueueError> {
        let value = self.time_rank_increase;
        if !value.is_finite() {
            return Err(QueueError::InvalidConfig(format!(
                "time_rank_increase must be finite, got {value}"
            )));
        }
        if value <= 0.0 {
            return Err(QueueError::InvalidConfig(format!(
                "time_rank_increase must be greater than 0, got {value}"
            )));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Parse`] for malformed JSON and
    /// [`QueueError::InvalidConfig`] for out-of-range values.
    pub fn from_json_str(input: &str) -> Result<Self, QueueError> {
        let cfg: Self =
            serde_json::from_str(input).map_err(|e| QueueError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
