//! Heap slots and the age-aware comparator.

use std::cmp::Ordering;

use crate::util::clock::Timestamp;

/// One slot in the heap. Fields are fixed at enqueue time.
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry<T> {
    pub payload: T,
    pub priority: f64,
    pub inserted_at: Timestamp,
    pub sequence: u64,
}

impl<T> HeapEntry<T> {
    pub const fn new(payload: T, priority: f64, inserted_at: Timestamp, sequence: u64) -> Self {
        Self {
            payload,
            priority,
            inserted_at,
            sequence,
        }
    }
}

/// Effective rank difference of `a` over `b`: the raw priority gap plus
/// one priority unit for every `time_rank_increase` that `a` has waited
/// longer than `b`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn rank_delta<T>(a: &HeapEntry<T>, b: &HeapEntry<T>, time_rank_increase: f64) -> f64 {
    let waited_longer = i128::from(b.inserted_at) - i128::from(a.inserted_at);
    a.priority - b.priority + waited_longer as f64 / time_rank_increase
}

/// Compare two entries. `Greater` means `a` outranks `b` and belongs closer
/// to the root. Exact ties go to the earlier insertion. A NaN delta compares
/// `Equal`, so it never triggers a swap.
#[allow(clippy::float_cmp)]
pub(crate) fn compare<T>(a: &HeapEntry<T>, b: &HeapEntry<T>, time_rank_increase: f64) -> Ordering {
    let delta = rank_delta(a, b, time_rank_increase);
    if delta == 0.0 {
        return b.sequence.cmp(&a.sequence);
    }
    delta.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}
