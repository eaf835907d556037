//! # Event → handler list mapping.
//!
//! A resolver decides, per event, which handlers run and in which order.
//!
//! - `Some(handlers)`: run them in order; an empty list is a valid "nobody cares".
//! - `None`: the resolver has no answer for this event. Dispatchers treat this
//!   as a contract violation and terminate the dispatch.
//!
//! Closures `Fn(&E) -> Option<Vec<Arc<H>>>` are resolvers, and so is a
//! [`HandlerRegistry`](super::HandlerRegistry).

use std::sync::Arc;

/// Maps an event to the ordered handlers that should process it.
///
/// `H` is the handler object type, e.g. `dyn Handler<E>` or `dyn AsyncHandler<E>`.
pub trait Resolve<E, H: ?Sized>: Send + Sync + 'static {
    /// Ordered handlers for `event`, or `None` when the event has no route.
    fn handlers_for(&self, event: &E) -> Option<Vec<Arc<H>>>;
}

impl<E, H, F> Resolve<E, H> for F
where
    H: ?Sized,
    F: Fn(&E) -> Option<Vec<Arc<H>>> + Send + Sync + 'static,
{
    #[inline]
    fn handlers_for(&self, event: &E) -> Option<Vec<Arc<H>>> {
        self(event)
    }
}
