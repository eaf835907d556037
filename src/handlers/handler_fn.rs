//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(&Scope, &E)`. The closure is shared,
//! not mutated; keep mutable state behind your own `Arc<Mutex<..>>` or atomics.
//!
//! ## Example
//! ```rust
//! use domain_events::{HandlerFn, HandlerRef, Scope};
//!
//! let h: HandlerRef<u32> = HandlerFn::arc("print", |_scope: &Scope, ev: &u32| {
//!     let _ = ev;
//! });
//! assert_eq!(h.name(), "print");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::Handler;
use crate::scope::Scope;

/// Function-backed handler implementation.
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a
    /// [`HandlerRef`](super::HandlerRef).
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

impl<E, F> Handler<E> for HandlerFn<F>
where
    F: Fn(&Scope, &E) + Send + Sync + 'static,
{
    #[inline]
    fn handle(&self, scope: &Scope, event: &E) {
        (self.f)(scope, event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn").field("name", &self.name).finish()
    }
}
