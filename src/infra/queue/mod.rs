//! Queue backends.

pub mod temporal;

pub use temporal::TemporalPriorityQueue;
