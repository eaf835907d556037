//! # Delivering collected events to handlers.
//!
//! Every dispatcher follows the same loop:
//!
//! ```text
//! dispatch(scope, events)
//!   ├─► snapshot = events.all()            (no lock held past this point)
//!   └─► for event in snapshot (insertion order)
//!         ├─► handlers = resolve(event)    (None ─► fatal usage error)
//!         └─► for handler in handlers (resolver order)
//!               └─► handler.handle(scope, event)
//! ```
//!
//! ## Rules
//! - Handlers of one event finish before the next event's handlers start.
//! - The same [`Scope`] reaches every handler; cancellation is not checked.
//! - Handler panics are not caught; remaining work of that dispatch is skipped.
//! - Dispatchers hold no mutable state and can be shared across threads.
//!
//! ## Contents
//! - [`Dispatch`] / [`AsyncDispatch`] dispatcher contracts
//! - [`Resolve`] event → handler list mapping; [`HandlerRegistry`] keyed routing
//! - [`Dispatcher`] routing dispatcher, [`GeneralFnDispatcher`] single handler,
//!   [`AsyncDispatcher`] routing dispatcher for async handlers

mod async_dispatcher;
mod dispatcher;
mod general_fn;
mod registry;
mod resolve;

pub use async_dispatcher::AsyncDispatcher;
pub use dispatcher::Dispatcher;
pub use general_fn::GeneralFnDispatcher;
pub use registry::HandlerRegistry;
pub use resolve::Resolve;

use async_trait::async_trait;

use crate::collection::EventSource;
use crate::error::UsageError;
use crate::scope::Scope;

/// Contract shared by synchronous dispatchers.
pub trait Dispatch<E>: Send + Sync {
    /// Delivers a snapshot of `events` to the handlers, in order.
    ///
    /// # Panics
    /// On a contract violation by the resolver, or when a handler panics.
    fn dispatch(&self, scope: &Scope, events: &dyn EventSource<E>);
}

/// Contract shared by asynchronous dispatchers.
#[async_trait]
pub trait AsyncDispatch<E: Send + Sync + 'static>: Send + Sync {
    /// Delivers a snapshot of `events`, awaiting each handler in turn.
    async fn dispatch(&self, scope: &Scope, events: &(dyn EventSource<E> + Sync));
}

/// Violation raised when a resolver yields no handler list.
pub(crate) fn unresolved<E>(seq: usize) -> UsageError {
    UsageError::UnresolvedHandlers {
        event: format!("#{seq} of type {}", std::any::type_name::<E>()),
    }
}
