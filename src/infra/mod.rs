//! Infrastructure adapters for in-memory queue storage.

pub mod queue;
pub use queue::TemporalPriorityQueue;
