//! Core queue abstractions, ordering, and errors.

pub(crate) mod entry;
pub mod error;
pub mod queue;

pub use error::QueueError;
pub use queue::PriorityQueue;
