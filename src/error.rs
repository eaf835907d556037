//! Usage errors raised by the collection and dispatchers.
//!
//! Every failure the core can detect is a **contract violation** by the caller
//! (or by a misbehaving resolver). These are not meant to be handled in normal
//! control flow, so they never travel through a `Result`: the public operations
//! run their checks internally and hand any [`UsageError`] to [`fatal`], which
//! logs it and panics.
//!
//! The enum still exists as a typed value so that checks can be unit-tested and
//! so the panic message and the log label stay stable.

use thiserror::Error;

/// # Contract violations detected by the core.
///
/// Raised as a panic by the offending operation; see [`fatal`].
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Requested initial capacity is outside `[0, max]`.
    #[error("collection initial capacity must be in range [0, {max}], but {requested} given")]
    CapacityOutOfRange {
        /// Capacity passed by the caller.
        requested: usize,
        /// Upper bound (`COLLECTION_SIZE_MAX`).
        max: usize,
    },

    /// The collection already holds the maximum number of events.
    #[error("collection has too many events ({max})")]
    CollectionFull {
        /// Upper bound (`COLLECTION_SIZE_MAX`).
        max: usize,
    },

    /// A resolver returned no handler list for an event.
    #[error("resolver provided no handler list for event {event}")]
    UnresolvedHandlers {
        /// Debug rendering of the event (or its type name).
        event: String,
    },
}

impl UsageError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use domain_events::UsageError;
    ///
    /// let err = UsageError::CollectionFull { max: 10 };
    /// assert_eq!(err.as_label(), "collection_full");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            UsageError::CapacityOutOfRange { .. } => "capacity_out_of_range",
            UsageError::CollectionFull { .. } => "collection_full",
            UsageError::UnresolvedHandlers { .. } => "unresolved_handlers",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            UsageError::CapacityOutOfRange { requested, max } => {
                format!("capacity {requested} outside [0, {max}]")
            }
            UsageError::CollectionFull { max } => format!("full at {max} events"),
            UsageError::UnresolvedHandlers { event } => format!("no handler list for {event}"),
        }
    }
}

/// Terminates the current operation because of a contract violation.
///
/// Logs the error with its label, then panics with the error's display text.
#[cold]
#[track_caller]
pub(crate) fn fatal(err: UsageError) -> ! {
    tracing::error!(label = err.as_label(), "{}", err.as_message());
    panic!("{err}");
}

/// Unwraps a check result, escalating a violation to [`fatal`].
#[inline]
#[track_caller]
pub(crate) fn ensure<T>(res: Result<T, UsageError>) -> T {
    match res {
        Ok(v) => v,
        Err(err) => fatal(err),
    }
}
