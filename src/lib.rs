//! # domain-events
//!
//! **domain-events** collects the events a unit of work produces and later
//! delivers them to handlers, in order, in-process.
//!
//! Application code appends "things that happened" to a collection while it
//! runs business logic. Once the unit of work is done, a dispatcher takes a
//! snapshot of the collection and invokes the handlers resolved for each event,
//! passing along a shared execution [`Scope`].
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   business logic                          after the unit of work
//!  ┌──────────────┐                        ┌────────────────────────────────┐
//!  │ evs.add(e1)  │                        │ dispatcher.dispatch(scope, evs)│
//!  │ evs.add(e2)  │                        └───────────────┬────────────────┘
//!  │ evs.add(e3)  │                                        │ evs.all()
//!  └──────┬───────┘                                        ▼
//!         ▼                                        snapshot [e1, e2, e3]
//!  ┌──────────────────────────┐                            │
//!  │ Collection (&mut self)   │                            ▼ per event
//!  │   or                     │                ┌───────────────────────┐
//!  │ SharedCollection (RwLock)│                │ Resolve::handlers_for │
//!  └──────────────────────────┘                └───────────┬───────────┘
//!                                                          ▼ in order
//!                                              h1(scope, e) ─► h2(scope, e)
//! ```
//!
//! ### Guarantees
//! - Events are delivered in insertion order; handlers of one event run in
//!   resolver order and finish before the next event starts.
//! - No lock is held while user code runs: handlers may add to the very
//!   collection being dispatched (additions are not part of that dispatch).
//! - Nothing is retried, persisted or caught: a panicking handler aborts the
//!   rest of its dispatch.
//!
//! ### Usage errors
//! Contract violations (collection overflow, out-of-range capacity, a resolver
//! with no answer) are programmer errors: they are logged through `tracing`
//! and raised as panics, never as `Result`s. See [`UsageError`].
//!
//! ## Features
//! | Area            | Description                                              | Key types / traits                                   |
//! |-----------------|----------------------------------------------------------|------------------------------------------------------|
//! | **Collections** | Append-only ordered buffers with copy-on-read snapshots. | [`Collection`], [`SharedCollection`], [`EventSource`] |
//! | **Dispatch**    | Deliver snapshots to handlers.                           | [`Dispatcher`], [`GeneralFnDispatcher`], [`AsyncDispatcher`] |
//! | **Routing**     | Map each event to its handlers.                          | [`Resolve`], [`HandlerRegistry`]                     |
//! | **Handlers**    | Sync and async callbacks.                                | [`Handler`], [`HandlerFn`], [`AsyncHandler`]         |
//! | **Scope**       | Cancellation and request-scoped values.                  | [`Scope`]                                            |
//! | **Events**      | Shared "occurred at" timestamp.                          | [`Occurred`], [`Timestamped`]                        |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogHandler`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use domain_events::{
//!     Collection, Dispatch, Dispatcher, HandlerFn, HandlerRef, Occurred, Scope,
//! };
//!
//! #[derive(Clone, Debug)]
//! enum UserEvent {
//!     Created { occurred: Occurred, id: u64 },
//!     Renamed { occurred: Occurred, id: u64, name: String },
//! }
//!
//! // Unit of work: collect what happened.
//! let mut evs = Collection::new();
//! evs.add(UserEvent::Created { occurred: Occurred::now(), id: 1 });
//! evs.add(UserEvent::Renamed { occurred: Occurred::now(), id: 1, name: "ada".into() });
//!
//! // Wiring: route every event to a projection and an audit trail.
//! let audit = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&audit);
//! let projection: HandlerRef<UserEvent> = HandlerFn::arc("projection", |_: &Scope, _: &UserEvent| {});
//! let trail: HandlerRef<UserEvent> = HandlerFn::arc("audit", move |_: &Scope, ev: &UserEvent| {
//!     sink.lock().unwrap().push(format!("{ev:?}"));
//! });
//! let dispatcher = Dispatcher::new(move |_: &UserEvent| {
//!     Some(vec![Arc::clone(&projection), Arc::clone(&trail)])
//! });
//!
//! dispatcher.dispatch(&Scope::new(), &evs);
//! assert_eq!(audit.lock().unwrap().len(), 2);
//! ```

mod collection;
mod dispatch;
mod error;
mod events;
mod handlers;
mod scope;

// ---- Public re-exports ----

pub use collection::{
    COLLECTION_SIZE_DEFAULT, COLLECTION_SIZE_MAX, Collection, CollectionConfig, EventSource,
    SharedCollection,
};
pub use dispatch::{
    AsyncDispatch, AsyncDispatcher, Dispatch, Dispatcher, GeneralFnDispatcher, HandlerRegistry,
    Resolve,
};
pub use error::UsageError;
pub use events::{Occurred, Timestamped};
pub use handlers::{AsyncHandler, AsyncHandlerFn, AsyncHandlerRef, Handler, HandlerFn, HandlerRef};
pub use scope::Scope;

// Optional: expose a simple built-in logging handler (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use handlers::LogHandler;
