//! Append-only event collections.
//!
//! A unit of work appends "things that happened" to a collection; a dispatcher
//! later reads a snapshot of it and delivers each event to its handlers.
//!
//! ## Contents
//! - [`Collection`] single-owner buffer, mutated through `&mut self`
//! - [`SharedCollection`] concurrency-safe buffer behind a reader/writer lock
//! - [`EventSource`] read side consumed by dispatchers
//! - [`CollectionConfig`] construction settings
//!
//! ## Rules
//! - Insertion order is preserved; `add` is the only mutator.
//! - At most [`COLLECTION_SIZE_MAX`] events; one more is a fatal usage error.
//! - `all()` always returns a fresh copy, never a view of internal storage.
//!
//! ```text
//!   add(e1) add(e2) add(e3)
//!      │       │       │
//!      ▼       ▼       ▼
//!   ┌─────────────────────┐   all()   ┌──────────────┐
//!   │ Buffer [e1, e2, e3] │ ───────►  │ Vec (clone)  │ ──► Dispatcher
//!   └─────────────────────┘           └──────────────┘
//! ```

mod buffer;
mod config;
mod local;
mod shared;
mod source;

pub use config::CollectionConfig;
pub use local::Collection;
pub use shared::SharedCollection;
pub use source::EventSource;

/// Capacity reserved when none is requested.
///
/// A unit of work usually updates one aggregate through one method, so only a
/// handful of events is expected.
pub const COLLECTION_SIZE_DEFAULT: usize = 2;

/// Maximum number of events a collection may hold.
pub const COLLECTION_SIZE_MAX: usize = 999_999;
