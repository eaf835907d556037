//! # Execution scope forwarded to every handler.
//!
//! A [`Scope`] carries what a unit of work knows about its surroundings:
//! a [`CancellationToken`] and a small set of request-scoped values, keyed by
//! their type. Dispatchers never inspect it; they pass the very same scope to
//! every handler they invoke.
//!
//! ## Rules
//! - Cheap to clone (token and values are reference-counted).
//! - Values are immutable once attached; [`Scope::with_value`] returns a new
//!   scope and leaves the original untouched.
//! - Honoring cancellation is the handler's job: check [`Scope::is_cancelled`].
//!
//! ## Example
//! ```rust
//! use domain_events::Scope;
//!
//! #[derive(Debug, PartialEq)]
//! struct RequestId(&'static str);
//!
//! let scope = Scope::new().with_value(RequestId("req-42"));
//! assert_eq!(scope.value::<RequestId>(), Some(&RequestId("req-42")));
//! assert!(!scope.is_cancelled());
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

type Values = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// Cancellation plus request-scoped values for one dispatch.
#[derive(Clone)]
pub struct Scope {
    token: CancellationToken,
    values: Arc<Values>,
}

impl Scope {
    /// Creates a root scope with a fresh token and no values.
    pub fn new() -> Self {
        Self::from_token(CancellationToken::new())
    }

    /// Creates a scope around an existing token (e.g. a supervisor's runtime token).
    pub fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            values: Arc::default(),
        }
    }

    /// Returns a scope that additionally carries `value`.
    ///
    /// A previous value of the same type is replaced in the returned scope only.
    #[must_use]
    pub fn with_value<T: Send + Sync + 'static>(mut self, value: T) -> Self {
        Arc::make_mut(&mut self.values).insert(TypeId::of::<T>(), Arc::new(value));
        self
    }

    /// Looks up the value of type `T`, if attached.
    pub fn value<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|v| (**v).downcast_ref::<T>())
    }

    /// Returns a scope whose token is a child of this one; values are shared.
    ///
    /// Cancelling the child does not cancel the parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            values: Arc::clone(&self.values),
        }
    }

    #[inline]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels this scope and every child derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CancellationToken> for Scope {
    fn from(token: CancellationToken) -> Self {
        Self::from_token(token)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("cancelled", &self.token.is_cancelled())
            .field("values", &self.values.len())
            .finish()
    }
}
