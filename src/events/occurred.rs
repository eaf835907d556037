//! # Occurrence timestamp shared by domain events.
//!
//! Anything that happened, happened at some point in time. [`Occurred`] is a
//! small value meant to be **composed** into concrete event types so each of
//! them does not have to repeat the field and the accessor.
//!
//! ## Example
//! ```rust
//! use std::time::SystemTime;
//! use domain_events::{Occurred, Timestamped};
//!
//! #[derive(Clone, Debug)]
//! struct UserCreated {
//!     occurred: Occurred,
//!     user_id: u64,
//! }
//!
//! impl Timestamped for UserCreated {
//!     fn occurred_at(&self) -> SystemTime {
//!         self.occurred.occurred_at()
//!     }
//! }
//!
//! let at = SystemTime::UNIX_EPOCH;
//! let ev = UserCreated { occurred: Occurred::new(at), user_id: 7 };
//! assert_eq!(ev.occurred_at(), at);
//! assert_eq!(ev.user_id, 7);
//! ```

use std::time::SystemTime;

/// Capability of events that know when they occurred.
pub trait Timestamped {
    /// Wall-clock time at which the event occurred.
    fn occurred_at(&self) -> SystemTime;
}

/// Embeddable "occurred at" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Occurred {
    at: SystemTime,
}

impl Occurred {
    /// Creates an occurrence at the given time.
    #[inline]
    pub fn new(at: SystemTime) -> Self {
        Self { at }
    }

    /// Creates an occurrence stamped with the current wall-clock time.
    #[inline]
    pub fn now() -> Self {
        Self::new(SystemTime::now())
    }

    #[inline]
    pub fn occurred_at(&self) -> SystemTime {
        self.at
    }
}

impl Timestamped for Occurred {
    #[inline]
    fn occurred_at(&self) -> SystemTime {
        self.at
    }
}

impl From<SystemTime> for Occurred {
    fn from(at: SystemTime) -> Self {
        Self::new(at)
    }
}
