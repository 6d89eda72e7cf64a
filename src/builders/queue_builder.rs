//! Builder to construct temporal queues from configuration.

use crate::config::TemporalQueueConfig;
use crate::core::QueueError;
use crate::infra::queue::TemporalPriorityQueue;
use crate::util::clock::{Clock, SystemClock};

/// Step-by-step construction of a [`TemporalPriorityQueue`].
///
/// ```rust
/// use temporal_priority_queue::builders::TemporalQueueBuilder;
/// use temporal_priority_queue::util::ManualClock;
///
/// let mut queue = TemporalQueueBuilder::new()
///     .with_time_rank_increase(1_000.0)
///     .with_clock(ManualClock::new(0))
///     .build::<&str>()
///     .unwrap();
/// queue.enqueue("job", 1.0);
/// assert_eq!(queue.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TemporalQueueBuilder<C = SystemClock> {
    config: TemporalQueueConfig,
    clock: C,
}

impl TemporalQueueBuilder {
    /// Builder with default configuration and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(TemporalQueueConfig::default())
    }

    /// Builder seeded from an existing configuration.
    #[must_use]
    pub const fn from_config(config: TemporalQueueConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl Default for TemporalQueueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> TemporalQueueBuilder<C> {
    /// Clock time equivalent to one unit of priority.
    #[must_use]
    pub const fn with_time_rank_increase(mut self, time_rank_increase: f64) -> Self {
        self.config.time_rank_increase = time_rank_increase;
        self
    }

    /// Entries to reserve space for up front.
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.config.initial_capacity = initial_capacity;
        self
    }

    /// Replace the time source.
    #[must_use]
    pub fn with_clock<D: Clock>(self, clock: D) -> TemporalQueueBuilder<D> {
        TemporalQueueBuilder {
            config: self.config,
            clock,
        }
    }

    /// Configuration accumulated so far.
    #[must_use]
    pub const fn config(&self) -> &TemporalQueueConfig {
        &self.config
    }
}

impl<C: Clock> TemporalQueueBuilder<C> {
    /// Validate the configuration and build the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidConfig`] if the time rank increase is
    /// zero, negative, or not finite.
    pub fn build<T>(self) -> Result<TemporalPriorityQueue<T, C>, QueueError> {
        TemporalPriorityQueue::with_config(self.config, self.clock)
    }
}
