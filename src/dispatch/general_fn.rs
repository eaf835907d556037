//! # Single-handler dispatcher.
//!
//! [`GeneralFnDispatcher`] applies one fixed handler to every event. It is the
//! special case of [`Dispatcher`](super::Dispatcher) whose resolver always
//! answers with that one handler, without building a list per event.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use domain_events::{Dispatch, GeneralFnDispatcher, Scope, SharedCollection};
//!
//! let count = Arc::new(AtomicUsize::new(0));
//! let c = Arc::clone(&count);
//! let dispatcher = GeneralFnDispatcher::from_fn("count", move |_: &Scope, _: &&str| {
//!     c.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! let evs = SharedCollection::new();
//! evs.add("a");
//! evs.add("b");
//! dispatcher.dispatch(&Scope::new(), &evs);
//! assert_eq!(count.load(Ordering::Relaxed), 2);
//! ```

use std::borrow::Cow;
use std::fmt;

use tracing::{debug, trace};

use super::Dispatch;
use crate::collection::EventSource;
use crate::handlers::{HandlerFn, HandlerRef};
use crate::scope::Scope;

/// Dispatcher invoking the same handler for each event.
pub struct GeneralFnDispatcher<E> {
    handler: HandlerRef<E>,
}

impl<E> GeneralFnDispatcher<E> {
    /// Creates a dispatcher around a shared handler.
    pub fn new(handler: HandlerRef<E>) -> Self {
        Self { handler }
    }

    /// Creates a dispatcher around a closure.
    pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        F: Fn(&Scope, &E) + Send + Sync + 'static,
    {
        Self::new(HandlerFn::arc(name, f))
    }

    /// The handler applied to every event.
    pub fn handler(&self) -> &HandlerRef<E> {
        &self.handler
    }
}

impl<E: 'static> Dispatch<E> for GeneralFnDispatcher<E> {
    fn dispatch(&self, scope: &Scope, events: &dyn EventSource<E>) {
        let snapshot = events.all();
        debug!(
            events = snapshot.len(),
            handler = self.handler.name(),
            "dispatching events"
        );

        for (seq, event) in snapshot.iter().enumerate() {
            trace!(seq, handler = self.handler.name(), "invoking handler");
            self.handler.handle(scope, event);
        }

        debug!(events = snapshot.len(), "dispatch finished");
    }
}

impl<E: 'static> fmt::Debug for GeneralFnDispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneralFnDispatcher")
            .field("handler", &self.handler.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    struct Tagged {
        worker: usize,
        seq: usize,
    }

    #[test]
    fn handles_every_event_in_order() {
        let seen: Arc<Mutex<Vec<Tagged>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let dispatcher = GeneralFnDispatcher::from_fn("collect", move |_: &Scope, ev: &Tagged| {
            sink.lock().unwrap().push(ev.clone());
        });

        let input: Vec<Tagged> = (0..5).map(|seq| Tagged { worker: 0, seq }).collect();
        let evs: Collection<Tagged> = input.iter().cloned().collect();
        dispatcher.dispatch(&Scope::new(), &evs);

        assert_eq!(*seen.lock().unwrap(), input);
        assert_eq!(dispatcher.handler().name(), "collect");
    }

    #[test]
    fn same_scope_reaches_every_call() {
        #[derive(Debug, PartialEq)]
        struct Tenant(u32);

        let tenants: Arc<Mutex<Vec<Option<u32>>>> = Arc::default();
        let sink = Arc::clone(&tenants);
        let dispatcher = GeneralFnDispatcher::from_fn("tenant", move |scope: &Scope, _: &u8| {
            sink.lock().unwrap().push(scope.value::<Tenant>().map(|t| t.0));
        });

        let evs: Collection<u8> = [1, 2, 3].into_iter().collect();
        dispatcher.dispatch(&Scope::new().with_value(Tenant(5)), &evs);

        assert_eq!(*tenants.lock().unwrap(), vec![Some(5); 3]);
    }

    #[test]
    fn empty_collection_invokes_nothing() {
        let dispatcher = GeneralFnDispatcher::from_fn("never", |_: &Scope, _: &u8| {
            panic!("must not be called");
        });
        dispatcher.dispatch(&Scope::new(), &Collection::<u8>::new());
    }

    #[test]
    #[should_panic(expected = "stop")]
    fn handler_panic_propagates() {
        let dispatcher = GeneralFnDispatcher::from_fn("stop", |_: &Scope, _: &u8| panic!("stop"));
        let evs: Collection<u8> = [1].into_iter().collect();
        dispatcher.dispatch(&Scope::new(), &evs);
    }
}
