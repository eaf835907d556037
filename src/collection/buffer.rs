//! Storage shared by both collection flavours.
//!
//! The logical count is the `Vec` length, so growth never exposes unfilled
//! slots through a snapshot.

use super::{COLLECTION_SIZE_MAX, CollectionConfig};
use crate::error::UsageError;

#[derive(Clone, Debug)]
pub(crate) struct Buffer<E> {
    items: Vec<E>,
}

impl<E> Buffer<E> {
    pub(crate) fn new(cfg: &CollectionConfig) -> Result<Self, UsageError> {
        let cap = cfg.capacity()?;
        Ok(Self {
            items: Vec::with_capacity(cap),
        })
    }

    /// Appends one event, refusing to grow past [`COLLECTION_SIZE_MAX`].
    pub(crate) fn push(&mut self, event: E) -> Result<(), UsageError> {
        if self.items.len() >= COLLECTION_SIZE_MAX {
            return Err(UsageError::CollectionFull {
                max: COLLECTION_SIZE_MAX,
            });
        }
        self.items.push(event);
        Ok(())
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl<E: Clone> Buffer<E> {
    /// Fresh copy of the stored events, in insertion order.
    pub(crate) fn snapshot(&self) -> Vec<E> {
        self.items.to_vec()
    }
}
