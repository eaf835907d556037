//! # Read side of a collection.
//!
//! Dispatchers only need to take a snapshot; they accept any [`EventSource`]
//! so the same dispatcher serves both collection flavours.

/// Read-only view over collected events.
pub trait EventSource<E> {
    /// Number of collected events.
    fn len(&self) -> usize;

    /// True if nothing was collected.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Freshly allocated copy of the events, in insertion order.
    ///
    /// Mutating the returned `Vec` never affects the source, and later
    /// additions to the source never show up in an earlier copy.
    fn all(&self) -> Vec<E>;
}
