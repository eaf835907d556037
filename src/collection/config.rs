//! # Collection construction settings.
//!
//! ## Sentinel values
//! - `initial_capacity = 0` → [`COLLECTION_SIZE_DEFAULT`]

use super::{COLLECTION_SIZE_DEFAULT, COLLECTION_SIZE_MAX};
use crate::error::UsageError;

/// Settings applied once, when a collection is created.
///
/// Concurrency safety is not a field: it is chosen by constructing either a
/// [`Collection`](super::Collection) or a [`SharedCollection`](super::SharedCollection).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Number of events to reserve room for up front.
    ///
    /// - `0` = use [`COLLECTION_SIZE_DEFAULT`]
    /// - must not exceed [`COLLECTION_SIZE_MAX`]
    pub initial_capacity: usize,
}

impl CollectionConfig {
    /// Config reserving room for `initial_capacity` events.
    #[inline]
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Resolves the sentinel and validates the range.
    pub fn capacity(&self) -> Result<usize, UsageError> {
        match self.initial_capacity {
            0 => Ok(COLLECTION_SIZE_DEFAULT),
            n if n <= COLLECTION_SIZE_MAX => Ok(n),
            n => Err(UsageError::CapacityOutOfRange {
                requested: n,
                max: COLLECTION_SIZE_MAX,
            }),
        }
    }
}
