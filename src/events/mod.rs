//! Domain event building blocks.
//!
//! The core places no requirement on event types: any `Clone + Send + Sync`
//! value can be collected and dispatched. This module only offers the shared
//! occurrence timestamp.
//!
//! ## Contents
//! - [`Occurred`] embeddable "occurred at" value
//! - [`Timestamped`] accessor trait for events that compose it

mod occurred;

pub use occurred::{Occurred, Timestamped};
