//! # Temporal Priority Queue
//!
//! A priority queue whose ordering combines an explicit numeric priority with
//! the age of each entry, for starvation-free dispatch.
//!
//! Plain priority queues starve low-priority work whenever high-priority work
//! keeps arriving. This crate ranks each entry by its base priority plus a
//! bonus for how long it has waited: every `time_rank_increase` of clock time
//! is worth one unit of priority. Old work eventually surfaces while fresh
//! urgent work still jumps ahead of fresh routine work.
//!
//! ## Key Features
//!
//! - **Age-Aware Ordering**: Priority and waiting time on one real-valued scale
//! - **FIFO Tie-Breaks**: Equal effective rank dequeues in insertion order
//! - **Injectable Clock**: Wall clock by default, virtual clock for tests
//! - **Array-Backed Heap**: O(log n) enqueue/dequeue, O(1) peek/size
//! - **Validated Configuration**: Degenerate rank intervals are rejected up front
//!
//! ## Example
//!
//! ```rust
//! use temporal_priority_queue::builders::TemporalQueueBuilder;
//! use temporal_priority_queue::util::ManualClock;
//!
//! let clock = ManualClock::new(0);
//! let mut queue = TemporalQueueBuilder::new()
//!     .with_time_rank_increase(60_000.0)
//!     .with_clock(clock.clone())
//!     .build()
//!     .unwrap();
//!
//! queue.enqueue("nightly-report", 1.0);
//! clock.advance(5 * 60_000);
//! queue.enqueue("user-request", 3.0);
//!
//! // five minutes of waiting outweighs a two-unit priority gap
//! assert_eq!(queue.dequeue(), Some("nightly-report"));
//! assert_eq!(queue.dequeue(), Some("user-request"));
//! ```
//!
//! For complete examples, see:
//! - `tests/temporal_queue_test.rs` - Behavioral integration tests

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core queue abstractions, ordering, and errors.
pub mod core;
/// Configuration models for queues.
pub mod config;
/// Builders to construct queues from configuration.
pub mod builders;
/// Infrastructure adapters for queue storage.
pub mod infra;
/// Shared utilities: clocks and telemetry.
pub mod util;

pub use crate::builders::TemporalQueueBuilder;
pub use crate::config::TemporalQueueConfig;
pub use crate::core::{PriorityQueue, QueueError};
pub use crate::infra::TemporalPriorityQueue;
pub use crate::util::{Clock, ManualClock, SystemClock, Timestamp};
