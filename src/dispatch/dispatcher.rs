//! # Routing dispatcher.
//!
//! [`Dispatcher`] asks its resolver for the handlers of each event and invokes
//! them in order. It owns nothing but the resolver, so one instance can serve
//! any number of collections, concurrently.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use domain_events::{Collection, Dispatch, Dispatcher, HandlerFn, HandlerRef, Scope};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let record: HandlerRef<u32> = HandlerFn::arc("record", move |_: &Scope, ev: &u32| {
//!     sink.lock().unwrap().push(*ev);
//! });
//!
//! let dispatcher = Dispatcher::new(move |_: &u32| Some(vec![Arc::clone(&record)]));
//!
//! let evs: Collection<u32> = [1, 2, 3].into_iter().collect();
//! dispatcher.dispatch(&Scope::new(), &evs);
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use super::{Dispatch, Resolve, unresolved};
use crate::collection::EventSource;
use crate::error::fatal;
use crate::handlers::Handler;
use crate::scope::Scope;

/// Dispatcher that routes each event through a [`Resolve`] implementation.
pub struct Dispatcher<E, R> {
    resolver: R,
    _events: PhantomData<fn(&E)>,
}

impl<E, R> Dispatcher<E, R>
where
    E: 'static,
    R: Resolve<E, dyn Handler<E>>,
{
    /// Creates a dispatcher around `resolver`.
    ///
    /// [`dispatch`](Dispatch::dispatch) panics if the resolver returns `None`
    /// for any event.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            _events: PhantomData,
        }
    }

    /// The resolver this dispatcher routes through.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    fn dispatch_event(&self, scope: &Scope, seq: usize, event: &E) {
        let Some(handlers) = self.resolver.handlers_for(event) else {
            fatal(unresolved::<E>(seq));
        };

        for handler in &handlers {
            trace!(seq, handler = handler.name(), "invoking handler");
            handler.handle(scope, event);
        }
    }
}

impl<E, R> Dispatch<E> for Dispatcher<E, R>
where
    E: 'static,
    R: Resolve<E, dyn Handler<E>>,
{
    fn dispatch(&self, scope: &Scope, events: &dyn EventSource<E>) {
        let snapshot = events.all();
        debug!(events = snapshot.len(), "dispatching events");

        for (seq, event) in snapshot.iter().enumerate() {
            self.dispatch_event(scope, seq, event);
        }

        debug!(events = snapshot.len(), "dispatch finished");
    }
}

impl<E, R> fmt::Debug for Dispatcher<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("event", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}
