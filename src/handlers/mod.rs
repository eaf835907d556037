//! # Event handlers.
//!
//! A handler is a callback invoked with the dispatch [`Scope`](crate::Scope)
//! and one event. Handlers are shared behind `Arc` so the same instance can be
//! routed to from many events and many dispatchers.
//!
//! ## Contents
//! - [`Handler`] / [`HandlerRef`] synchronous handler contract
//! - [`HandlerFn`] closure-backed handler
//! - [`AsyncHandler`] / [`AsyncHandlerRef`] / [`AsyncHandlerFn`] async counterparts
//! - [`LogHandler`] (feature `logging`) writes every event to `tracing`
//!
//! ## Implementing a handler
//! ```rust
//! use domain_events::{Handler, Scope};
//!
//! #[derive(Clone, Debug)]
//! enum Order {
//!     Placed { id: u64 },
//!     Cancelled { id: u64 },
//! }
//!
//! struct Notify;
//!
//! impl Handler<Order> for Notify {
//!     fn handle(&self, scope: &Scope, event: &Order) {
//!         if scope.is_cancelled() {
//!             return;
//!         }
//!         match event {
//!             Order::Placed { id } => { let _ = id; /* send confirmation */ }
//!             Order::Cancelled { .. } => {}
//!         }
//!     }
//!
//!     fn name(&self) -> &str { "notify" }
//! }
//! ```

mod async_handler;
mod handler;
mod handler_fn;
#[cfg(feature = "logging")]
mod log;

pub use async_handler::{AsyncHandler, AsyncHandlerFn, AsyncHandlerRef};
pub use handler::{Handler, HandlerRef};
pub use handler_fn::HandlerFn;
#[cfg(feature = "logging")]
pub use log::LogHandler;
