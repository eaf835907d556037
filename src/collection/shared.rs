//! # Concurrency-safe event collection.
//!
//! [`SharedCollection`] guards its buffer with a reader/writer lock:
//! many concurrent readers, one writer, readers excluded while writing.
//! Critical sections are short, perform no I/O and never call user code.
//!
//! ## Rules
//! - `add` takes the write lock; `len`, `is_empty` and `all` take the read lock.
//! - The size bound is checked under the write lock, and the lock is released
//!   before a violation is escalated, so a usage error never poisons it.
//! - A poisoned lock (a panic elsewhere while it was held) is recovered: the
//!   buffer is only ever mutated by a single `Vec::push`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use domain_events::SharedCollection;
//!
//! let evs = Arc::new(SharedCollection::new());
//! std::thread::scope(|s| {
//!     for worker in 0..4 {
//!         let evs = Arc::clone(&evs);
//!         s.spawn(move || evs.add(worker));
//!     }
//! });
//! assert_eq!(evs.len(), 4);
//! ```

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{CollectionConfig, EventSource, buffer::Buffer};
use crate::error::ensure;

/// Append-only, ordered buffer of events that may be shared across threads.
pub struct SharedCollection<E> {
    buf: RwLock<Buffer<E>>,
}

impl<E> SharedCollection<E> {
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
            buf: RwLock::new(ensure(Buffer::new(cfg))),
        }
    }

    /// Appends one event under the write lock.
    ///
    /// # Panics
    /// If the collection already holds
    /// [`COLLECTION_SIZE_MAX`](super::COLLECTION_SIZE_MAX) events.
    #[track_caller]
    pub fn add(&self, event: E) {
        let res = self.write().push(event);
        ensure(res);
    }

    /// Number of collected events.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.read().len() == 0
    }

    /// Currently reserved room, in events.
    pub fn capacity(&self) -> usize {
        self.read().capacity()
    }

    #[inline]
    fn read(&self) -> RwLockReadGuard<'_, Buffer<E>> {
        self.buf.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn write(&self) -> RwLockWriteGuard<'_, Buffer<E>> {
        self.buf.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Clone> SharedCollection<E> {
    /// Returns a **copy** of the collected events, taken under the read lock.
    pub fn all(&self) -> Vec<E> {
        self.read().snapshot()
    }
}

impl<E> Default for SharedCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> EventSource<E> for SharedCollection<E> {
    fn len(&self) -> usize {
        SharedCollection::len(self)
    }

    fn all(&self) -> Vec<E> {
        SharedCollection::all(self)
    }
}

impl<E> FromIterator<E> for SharedCollection<E> {
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let evs = Self::new();
        for event in iter {
            evs.add(event);
        }
        evs
    }
}

impl<E: fmt::Debug> fmt::Debug for SharedCollection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.read();
        f.debug_struct("SharedCollection")
            .field("len", &buf.len())
            .field("events", &*buf)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{COLLECTION_SIZE_DEFAULT, COLLECTION_SIZE_MAX};
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn new_is_empty_with_default_capacity() {
        let evs: SharedCollection<u32> = SharedCollection::new();
        assert!(evs.is_empty());
        assert_eq!(evs.len(), 0);
        assert!(evs.capacity() >= COLLECTION_SIZE_DEFAULT);
    }

    #[test]
    #[should_panic(expected = "collection initial capacity must be in range")]
    fn capacity_above_max_panics() {
        let _ = SharedCollection::<u32>::with_capacity(COLLECTION_SIZE_MAX + 1);
    }

    #[test]
    fn keeps_insertion_order() {
        let evs = SharedCollection::with_capacity(8);
        for i in 0..20u32 {
            evs.add(i);
        }
        assert_eq!(evs.len(), 20);
        assert_eq!(evs.all(), (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn all_returns_independent_copy() {
        let evs: SharedCollection<u8> = [1, 2].into_iter().collect();
        let mut snapshot = evs.all();
        snapshot.push(3);
        assert_eq!(evs.all(), vec![1, 2]);
        assert_eq!(evs.len(), 2);
    }

    #[test]
    fn concurrent_writers_lose_nothing() {
        const WORKERS: usize = 8;
        const PER_WORKER: usize = 1_000;

        let evs = Arc::new(SharedCollection::new());
        std::thread::scope(|s| {
            for worker in 0..WORKERS {
                let evs = Arc::clone(&evs);
                s.spawn(move || {
                    for seq in 0..PER_WORKER {
                        evs.add((worker, seq));
                        // concurrent readers must never observe a torn state
                        assert!(evs.len() <= WORKERS * PER_WORKER);
                    }
                });
            }
        });

        let all = evs.all();
        assert_eq!(evs.len(), WORKERS * PER_WORKER);
        assert_eq!(all.len(), WORKERS * PER_WORKER);

        let unique: HashSet<_> = all.iter().copied().collect();
        assert_eq!(unique.len(), WORKERS * PER_WORKER);
        for worker in 0..WORKERS {
            for seq in 0..PER_WORKER {
                assert!(unique.contains(&(worker, seq)));
            }
        }

        // per-writer order survives interleaving
        for worker in 0..WORKERS {
            let seqs: Vec<_> = all.iter().filter(|(w, _)| *w == worker).map(|(_, s)| *s).collect();
            assert_eq!(seqs, (0..PER_WORKER).collect::<Vec<_>>());
        }
    }

    #[test]
    fn stays_usable_after_capacity_violation() {
        let evs = SharedCollection::with_capacity(COLLECTION_SIZE_MAX);
        for _ in 0..COLLECTION_SIZE_MAX {
            evs.add(());
        }

        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| evs.add(())));
        assert!(res.is_err());

        assert!(!evs.buf.is_poisoned());
        assert_eq!(evs.len(), COLLECTION_SIZE_MAX);
        assert_eq!(evs.all().len(), COLLECTION_SIZE_MAX);
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<SharedCollection<String>>();
    }
}
