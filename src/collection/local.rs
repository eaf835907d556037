//! # Single-owner event collection.
//!
//! [`Collection`] performs no synchronization at all. Mutation goes through
//! `&mut self`, so the borrow checker confines it to one logical owner at a
//! time; use [`SharedCollection`](super::SharedCollection) when several
//! threads must append concurrently.
//!
//! ## Example
//! ```rust
//! use domain_events::Collection;
//!
//! let mut evs = Collection::new();
//! evs.add("order-placed");
//! evs.add("stock-reserved");
//!
//! assert_eq!(evs.len(), 2);
//! assert_eq!(evs.all(), vec!["order-placed", "stock-reserved"]);
//! ```

use std::fmt;

use super::{CollectionConfig, EventSource, buffer::Buffer};
use crate::error::ensure;

/// Append-only, ordered buffer of events owned by one unit of work.
#[derive(Clone)]
pub struct Collection<E> {
    buf: Buffer<E>,
}

impl<E> Collection<E> {
    /// Creates an empty collection with the default capacity.
    pub fn new() -> Self {
        Self::from_config(&CollectionConfig::default())
    }

    /// Creates an empty collection with room for `capacity` events.
    ///
    /// `0` means the default capacity.
    ///
    /// # Panics
    /// If `capacity` exceeds [`COLLECTION_SIZE_MAX`](super::COLLECTION_SIZE_MAX).
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_config(&CollectionConfig::with_initial_capacity(capacity))
    }

    /// Creates an empty collection from explicit settings.
    ///
    /// # Panics
    /// If the configured capacity is out of range.
    #[track_caller]
    pub fn from_config(cfg: &CollectionConfig) -> Self {
        Self {
            buf: ensure(Buffer::new(cfg)),
        }
    }

    /// Appends one event.
    ///
    /// # Panics
    /// If the collection already holds
    /// [`COLLECTION_SIZE_MAX`](super::COLLECTION_SIZE_MAX) events.
    #[track_caller]
    pub fn add(&mut self, event: E) {
        ensure(self.buf.push(event));
    }

    /// Number of collected events.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing was collected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// Currently reserved room, in events.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}

impl<E: Clone> Collection<E> {
    /// Returns a **copy** of the collected events, in insertion order.
    pub fn all(&self) -> Vec<E> {
        self.buf.snapshot()
    }
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> EventSource<E> for Collection<E> {
    fn len(&self) -> usize {
        Collection::len(self)
    }

    fn all(&self) -> Vec<E> {
        Collection::all(self)
    }
}

impl<E> Extend<E> for Collection<E> {
    /// Adds each event in turn; the size bound applies to every one of them.
    #[track_caller]
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for event in iter {
            self.add(event);
        }
    }
}

impl<E> FromIterator<E> for Collection<E> {
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut evs = Self::new();
        evs.extend(iter);
        evs
    }
}

impl<E: fmt::Debug> fmt::Debug for Collection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("len", &self.buf.len())
            .field("events", &self.buf)
            .finish()
    }
}
