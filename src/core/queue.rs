//! Queue abstraction implemented by the temporal heap.

/// Priority queue surface: higher priority comes out first.
pub trait PriorityQueue<T> {
    /// Add a payload with its base priority.
    fn enqueue(&mut self, payload: T, priority: f64);
    /// Remove and return the top payload, or `None` when empty.
    fn dequeue(&mut self) -> Option<T>;
    /// View the top payload without removing it.
    fn peek(&self) -> Option<&T>;
    /// Number of stored entries.
    fn size(&self) -> usize;
    /// Whether the queue holds no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
