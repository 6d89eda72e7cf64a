//! In-memory priority heap that lets waiting entries gain rank over time.
//!
//! Entries are ordered by an effective priority: the caller's base priority
//! plus one unit for every `time_rank_increase` of clock time the entry has
//! waited relative to its rival. A low-priority entry that waits long enough
//! therefore surfaces ahead of newer high-priority work, which keeps
//! dispatch starvation-free without giving up priorities.
//!
//! The heap is a dense `Vec` addressed by index arithmetic. Because the
//! comparison depends on insertion timestamps, order is only re-established
//! along the path touched by an enqueue or dequeue; nothing re-sorts on pure
//! passage of time.
//!
//! ```rust
//! use temporal_priority_queue::config::TemporalQueueConfig;
//! use temporal_priority_queue::infra::queue::TemporalPriorityQueue;
//! use temporal_priority_queue::util::ManualClock;
//!
//! let clock = ManualClock::new(0);
//! let config = TemporalQueueConfig::new().with_time_rank_increase(1.0);
//! let mut queue = TemporalPriorityQueue::with_config(config, clock.clone()).unwrap();
//!
//! queue.enqueue("old", 1.0);
//! clock.advance(2);
//! queue.enqueue("new", 2.0);
//!
//! // "old" waited two intervals, enough to beat a one-unit priority gap
//! assert_eq!(queue.dequeue(), Some("old"));
//! assert_eq!(queue.dequeue(), Some("new"));
//! assert_eq!(queue.dequeue(), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::config::TemporalQueueConfig;
use crate::core::entry::{compare, HeapEntry};
use crate::core::{PriorityQueue, QueueError};
use crate::util::clock::{Clock, SystemClock};

const fn left_child(index: usize) -> usize {
    2 * index + 1
}

const fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// `None` for the root.
const fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Binary max-heap ranked by priority and age.
///
/// Not synchronized; wrap it in a lock if several threads need it.
pub struct TemporalPriorityQueue<T, C = SystemClock> {
    heap: Vec<HeapEntry<T>>,
    config: TemporalQueueConfig,
    clock: C,
    next_sequence: u64,
}

impl<T> TemporalPriorityQueue<T> {
    /// Queue with the default one-minute rank interval and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<T> Default for TemporalPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clock> TemporalPriorityQueue<T, C> {
    /// Queue with the default configuration and a custom clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self::from_parts(TemporalQueueConfig::default(), clock)
    }

    /// Queue with an explicit configuration and clock.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidConfig`] if the time rank increase is
    /// zero, negative, or not finite.
    pub fn with_config(config: TemporalQueueConfig, clock: C) -> Result<Self, QueueError> {
        if let Err(e) = config.validate() {
            tracing::warn!("rejected temporal queue configuration: {}", e);
            return Err(e);
        }
        Ok(Self::from_parts(config, clock))
    }

    fn from_parts(config: TemporalQueueConfig, clock: C) -> Self {
        Self {
            heap: Vec::with_capacity(config.initial_capacity),
            config,
            clock,
            next_sequence: 0,
        }
    }

    /// Add a payload. The clock is read once and the entry's rank is settled
    /// against its ancestors before returning.
    pub fn enqueue(&mut self, payload: T, priority: f64) {
        let inserted_at = self.clock.now();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.heap
            .push(HeapEntry::new(payload, priority, inserted_at, sequence));
        self.sift_up(self.heap.len() - 1);

        tracing::trace!(
            priority,
            inserted_at,
            sequence,
            size = self.heap.len(),
            "entry enqueued"
        );
    }

    /// Remove and return the highest-ranked payload, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        match self.heap.len() {
            0 => {
                self.next_sequence = 0;
                None
            }
            1 => {
                self.reset_sequence();
                self.heap.pop().map(|entry| entry.payload)
            }
            _ => {
                // last entry moves into the root slot
                let root = self.heap.swap_remove(0);
                self.sift_down(0);
                tracing::trace!(size = self.heap.len(), "entry dequeued");
                Some(root.payload)
            }
        }
    }

    /// View the highest-ranked payload without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|entry| &entry.payload)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Alias for [`size`](Self::size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every entry and start a fresh insertion-order epoch.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.reset_sequence();
    }

    /// Clock time equivalent to one unit of priority.
    #[must_use]
    pub const fn time_rank_increase(&self) -> f64 {
        self.config.time_rank_increase
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &TemporalQueueConfig {
        &self.config
    }

    /// The clock stamping new entries.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    fn reset_sequence(&mut self) {
        if self.next_sequence != 0 {
            tracing::debug!(
                "queue drained, resetting sequence counter from {}",
                self.next_sequence
            );
        }
        self.next_sequence = 0;
    }

    fn outranks(&self, a: usize, b: usize) -> bool {
        compare(&self.heap[a], &self.heap[b], self.config.time_rank_increase) == Ordering::Greater
    }

    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent_index) = parent(index) {
            if !self.outranks(index, parent_index) {
                break;
            }
            self.heap.swap(index, parent_index);
            index = parent_index;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = left_child(index);
            let right = right_child(index);

            // right wins only if it beats both its sibling and the node
            let next = if right < len && self.outranks(right, left) && self.outranks(right, index) {
                right
            } else if left < len && self.outranks(left, index) {
                left
            } else {
                break;
            };

            self.heap.swap(index, next);
            index = next;
        }
    }
}

impl<T, C: Clock> PriorityQueue<T> for TemporalPriorityQueue<T, C> {
    fn enqueue(&mut self, payload: T, priority: f64) {
        Self::enqueue(self, payload, priority);
    }

    fn dequeue(&mut self) -> Option<T> {
        Self::dequeue(self)
    }

    fn peek(&self) -> Option<&T> {
        Self::peek(self)
    }

    fn size(&self) -> usize {
        Self::size(self)
    }
}

impl<T, C: Clock> Extend<(T, f64)> for TemporalPriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = (T, f64)>>(&mut self, iter: I) {
        for (payload, priority) in iter {
            self.enqueue(payload, priority);
        }
    }
}

impl<T, C> fmt::Debug for TemporalPriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporalPriorityQueue")
            .field("size", &self.heap.len())
            .field("time_rank_increase", &self.config.time_rank_increase)
            .field("next_sequence", &self.next_sequence)
            .finish_non_exhaustive()
    }
}
