//! # Routing dispatcher for async handlers.
//!
//! [`AsyncDispatcher`] mirrors [`Dispatcher`](super::Dispatcher): snapshot
//! first, then each event's handlers are awaited one by one. No handler is
//! spawned; the whole dispatch runs inside the caller's future.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use domain_events::{AsyncDispatch, AsyncDispatcher, AsyncHandlerFn, AsyncHandlerRef, Collection, Scope};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let audit: AsyncHandlerRef<u32> = AsyncHandlerFn::arc("audit", |_scope: Scope, ev: u32| async move {
//!     let _ = ev;
//! });
//! let dispatcher = AsyncDispatcher::new(move |_: &u32| Some(vec![Arc::clone(&audit)]));
//!
//! let evs: Collection<u32> = [1, 2].into_iter().collect();
//! dispatcher.dispatch(&Scope::new(), &evs).await;
//! # }
//! ```

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::{debug, trace};

use super::{AsyncDispatch, Resolve, unresolved};
use crate::collection::EventSource;
use crate::error::fatal;
use crate::handlers::AsyncHandler;
use crate::scope::Scope;

/// Dispatcher that routes each event to async handlers through a [`Resolve`].
pub struct AsyncDispatcher<E, R> {
    resolver: R,
    _events: PhantomData<fn(&E)>,
}

impl<E, R> AsyncDispatcher<E, R>
where
    E: Send + Sync + 'static,
    R: Resolve<E, dyn AsyncHandler<E>>,
{
    /// Creates a dispatcher around `resolver`.
    ///
    /// Dispatching panics if the resolver returns `None` for any event.
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
}

#[async_trait]
impl<E, R> AsyncDispatch<E> for AsyncDispatcher<E, R>
where
    E: Send + Sync + 'static,
    R: Resolve<E, dyn AsyncHandler<E>>,
{
    async fn dispatch(&self, scope: &Scope, events: &(dyn EventSource<E> + Sync)) {
        let snapshot = events.all();
        debug!(events = snapshot.len(), "dispatching events");

        for (seq, event) in snapshot.iter().enumerate() {
            let Some(handlers) = self.resolver.handlers_for(event) else {
                fatal(unresolved::<E>(seq));
            };
            for handler in &handlers {
                trace!(seq, handler = handler.name(), "awaiting handler");
                handler.handle(scope, event).await;
            }
        }

        debug!(events = snapshot.len(), "dispatch finished");
    }
}

impl<E, R> fmt::Debug for AsyncDispatcher<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncDispatcher")
            .field("event", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Collection, SharedCollection};
    use crate::dispatch::HandlerRegistry;
    use crate::handlers::{AsyncHandlerFn, AsyncHandlerRef};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    #[allow(dead_code)]
    #[derive(Clone, Debug)]
    enum Ev {
        Slow(u32),
        Fast(u32),
    }

    type Log = Arc<Mutex<Vec<String>>>;

    fn recorder(name: &'static str, log: &Log, delay: Duration) -> AsyncHandlerRef<Ev> {
        let log = Arc::clone(log);
        AsyncHandlerFn::arc(name, move |_scope: Scope, ev: Ev| {
            let log = Arc::clone(&log);
            async move {
                tokio::time::sleep(delay).await;
                log.lock().await.push(format!("{name}:{ev:?}"));
            }
        })
    }

    #[tokio::test]
    async fn awaits_handlers_sequentially() {
        let log: Log = Arc::default();
        let slow = recorder("slow", &log, Duration::from_millis(20));
        let fast = recorder("fast", &log, Duration::ZERO);
        let dispatcher = AsyncDispatcher::new(move |_: &Ev| {
            Some(vec![Arc::clone(&slow), Arc::clone(&fast)])
        });

        let mut evs = Collection::new();
        evs.add(Ev::Slow(1));
        evs.add(Ev::Fast(2));
        dispatcher.dispatch(&Scope::new(), &evs).await;

        assert_eq!(
            *log.lock().await,
            vec!["slow:Slow(1)", "fast:Slow(1)", "slow:Fast(2)", "fast:Fast(2)"]
        );
    }

    #[tokio::test]
    async fn routes_through_registry() {
        let log: Log = Arc::default();
        let registry = HandlerRegistry::new(|ev: &Ev| std::mem::discriminant(ev))
            .with(
                std::mem::discriminant(&Ev::Slow(0)),
                recorder("slow", &log, Duration::from_millis(1)),
            )
            .with(
                std::mem::discriminant(&Ev::Fast(0)),
                recorder("fast", &log, Duration::ZERO),
            );
        let dispatcher = AsyncDispatcher::new(registry);

        let evs = SharedCollection::new();
        evs.add(Ev::Fast(1));
        evs.add(Ev::Slow(2));
        evs.add(Ev::Fast(3));
        dispatcher.dispatch(&Scope::new(), &evs).await;

        assert_eq!(
            *log.lock().await,
            vec!["fast:Fast(1)", "slow:Slow(2)", "fast:Fast(3)"]
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn dispatch_future_is_send() {
        let log: Log = Arc::default();
        let h = recorder("h", &log, Duration::ZERO);
        let dispatcher = Arc::new(AsyncDispatcher::new(move |_: &Ev| Some(vec![Arc::clone(&h)])));

        let mut tasks = Vec::new();
        for i in 0..3 {
            let dispatcher = Arc::clone(&dispatcher);
            tasks.push(tokio::spawn(async move {
                let evs: Collection<Ev> = [Ev::Fast(i)].into_iter().collect();
                dispatcher.dispatch(&Scope::new(), &evs).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(log.lock().await.len(), 3);
    }

    #[tokio::test]
    async fn empty_collection_invokes_nothing() {
        let log: Log = Arc::default();
        let h = recorder("h", &log, Duration::ZERO);
        let dispatcher = AsyncDispatcher::new(move |_: &Ev| Some(vec![Arc::clone(&h)]));

        dispatcher.dispatch(&Scope::new(), &Collection::<Ev>::new()).await;
        assert!(log.lock().await.is_empty());
    }

    #[tokio::test]
    async fn handler_panic_stops_remaining_work() {
        let log: Log = Arc::default();
        let ok = recorder("ok", &log, Duration::ZERO);
        let boom: AsyncHandlerRef<Ev> = AsyncHandlerFn::arc("boom", |_scope: Scope, ev: Ev| async move {
            if let Ev::Slow(n) = ev {
                panic!("handler failed on slow {n}");
            }
        });
        let dispatcher = AsyncDispatcher::new(move |_: &Ev| {
            Some(vec![Arc::clone(&boom), Arc::clone(&ok)])
        });

        let joined = tokio::spawn(async move {
            let evs: Collection<Ev> = [Ev::Fast(1), Ev::Slow(2), Ev::Fast(3)].into_iter().collect();
            dispatcher.dispatch(&Scope::new(), &evs).await;
        })
        .await;

        let err = joined.unwrap_err();
        assert!(err.is_panic());
        let payload = err.into_panic();
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("handler failed on slow 2")
        );
        assert_eq!(*log.lock().await, vec!["ok:Fast(1)"]);
    }

    #[tokio::test]
    #[should_panic(expected = "resolver provided no handler list")]
    async fn missing_handler_list_panics() {
        let dispatcher =
            AsyncDispatcher::new(|_: &Ev| -> Option<Vec<AsyncHandlerRef<Ev>>> { None });
        let evs: Collection<Ev> = [Ev::Fast(1)].into_iter().collect();
        dispatcher.dispatch(&Scope::new(), &evs).await;
    }
}
