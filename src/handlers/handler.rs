//! # Synchronous handler contract.

use std::sync::Arc;

use crate::scope::Scope;

/// # Shared handle to a handler object.
pub type HandlerRef<E> = Arc<dyn Handler<E>>;

/// Callback invoked once per routed event.
///
/// Handlers run on the dispatcher's caller thread, strictly one after another.
/// A panic raised here is **not** caught: it aborts the remaining handlers and
/// events of that dispatch and reaches the dispatcher's caller unchanged.
pub trait Handler<E>: Send + Sync + 'static {
    /// Handles a single event.
    ///
    /// # Parameters
    /// - `scope`: the scope passed to `dispatch`, forwarded unchanged
    /// - `event`: reference into the dispatcher's snapshot
    fn handle(&self, scope: &Scope, event: &E);

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
