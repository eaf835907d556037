//! # Asynchronous handler contract.
//!
//! Same semantics as [`Handler`](super::Handler), but `handle` is awaited.
//! The async dispatcher awaits each handler to completion before starting the
//! next one, so ordering guarantees are unchanged.
//!
//! ## Example
//! ```rust
//! use domain_events::{AsyncHandlerFn, AsyncHandlerRef, Scope};
//!
//! let h: AsyncHandlerRef<String> = AsyncHandlerFn::arc("audit", |scope: Scope, ev: String| async move {
//!     if scope.is_cancelled() {
//!         return;
//!     }
//!     let _ = ev; // write audit record...
//! });
//! assert_eq!(h.name(), "audit");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::scope::Scope;

/// # Shared handle to an async handler object.
pub type AsyncHandlerRef<E> = Arc<dyn AsyncHandler<E>>;

/// Async callback invoked once per routed event.
///
/// Panics propagate out of the dispatch future unchanged.
#[async_trait]
pub trait AsyncHandler<E: Send + Sync + 'static>: Send + Sync + 'static {
    /// Handles a single event.
    async fn handle(&self, scope: &Scope, event: &E);

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Function-backed async handler.
///
/// Wraps a closure that *creates* a new future per event. The closure receives
/// owned clones of the scope and the event, so the future is `'static`.
pub struct AsyncHandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> AsyncHandlerFn<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<E, F, Fut> AsyncHandler<E> for AsyncHandlerFn<F>
where
    E: Clone + Send + Sync + 'static,
    F: Fn(Scope, E) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn handle(&self, scope: &Scope, event: &E) {
        (self.f)(scope.clone(), event.clone()).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for AsyncHandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncHandlerFn").field("name", &self.name).finish()
    }
}
