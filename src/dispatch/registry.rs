//! # Keyed handler routing.
//!
//! [`HandlerRegistry`] routes events by a key derived from each event (usually
//! its variant), instead of branching on concrete types inside handlers.
//!
//! ## Rules
//! - Handlers registered under the same key run in registration order.
//! - An event whose key has no registration resolves to `None` (fatal during
//!   dispatch), unless the registry is [`lenient`](HandlerRegistry::lenient),
//!   in which case it resolves to an empty list.
//!
//! ## Example
//! ```rust
//! use domain_events::{Collection, Dispatch, Dispatcher, HandlerFn, HandlerRegistry, Scope};
//!
//! #[derive(Clone, Debug)]
//! enum Account {
//!     Opened(u64),
//!     Closed(u64),
//! }
//!
//! #[derive(Hash, PartialEq, Eq)]
//! enum Kind { Opened, Closed }
//!
//! let registry = HandlerRegistry::<Kind, Account>::new(|ev: &Account| match ev {
//!     Account::Opened(_) => Kind::Opened,
//!     Account::Closed(_) => Kind::Closed,
//! })
//! .with(Kind::Opened, HandlerFn::arc("welcome", |_: &Scope, _: &Account| {}))
//! .with(Kind::Closed, HandlerFn::arc("archive", |_: &Scope, _: &Account| {}));
//!
//! let mut evs = Collection::new();
//! evs.add(Account::Opened(1));
//! evs.add(Account::Closed(1));
//!
//! Dispatcher::new(registry).dispatch(&Scope::new(), &evs);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use super::Resolve;
use crate::handlers::Handler;

type KeyFn<E, K> = Box<dyn Fn(&E) -> K + Send + Sync>;

/// Registry of handlers keyed by an event-type identifier.
pub struct HandlerRegistry<K, E, H: ?Sized = dyn Handler<E>> {
    key_of: KeyFn<E, K>,
    routes: HashMap<K, Vec<Arc<H>>>,
    lenient: bool,
}

impl<K, E, H> HandlerRegistry<K, E, H>
where
    K: Hash + Eq,
    H: ?Sized,
{
    /// Creates an empty registry; `key_of` derives the routing key of an event.
    pub fn new(key_of: impl Fn(&E) -> K + Send + Sync + 'static) -> Self {
        Self {
            key_of: Box::new(key_of),
            routes: HashMap::new(),
            lenient: false,
        }
    }

    /// Resolves unregistered keys to an empty handler list instead of `None`.
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    /// Appends `handler` to the handlers of `key`.
    pub fn register(&mut self, key: K, handler: Arc<H>) -> &mut Self {
        self.routes.entry(key).or_default().push(handler);
        self
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, key: K, handler: Arc<H>) -> Self {
        self.register(key, handler);
        self
    }

    /// Handlers registered under `key`, in registration order.
    pub fn handlers(&self, key: &K) -> &[Arc<H>] {
        self.routes.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of keys with at least one handler.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<K, E, H> Resolve<E, H> for HandlerRegistry<K, E, H>
where
    K: Hash + Eq + Send + Sync + 'static,
    E: 'static,
    H: ?Sized + Send + Sync + 'static,
{
    fn handlers_for(&self, event: &E) -> Option<Vec<Arc<H>>> {
        match self.routes.get(&(self.key_of)(event)) {
            Some(handlers) => Some(handlers.clone()),
            None if self.lenient => Some(Vec::new()),
            None => None,
        }
    }
}

impl<K, E, H: ?Sized> fmt::Debug for HandlerRegistry<K, E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("keys", &self.routes.len())
            .field("lenient", &self.lenient)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{HandlerFn, HandlerRef};
    use crate::scope::Scope;

    #[derive(Clone, Debug)]
    enum Ev {
        A,
        B,
        C,
    }

    fn kind(ev: &Ev) -> &'static str {
        match ev {
            Ev::A => "a",
            Ev::B => "b",
            Ev::C => "c",
        }
    }

    fn named(name: &'static str) -> HandlerRef<Ev> {
        HandlerFn::arc(name, |_: &Scope, _: &Ev| {})
    }

    fn names(handlers: &[HandlerRef<Ev>]) -> Vec<String> {
        handlers.iter().map(|h| h.name().to_string()).collect()
    }

    #[test]
    fn keeps_registration_order_per_key() {
        let mut reg = HandlerRegistry::new(kind);
        reg.register("a", named("a1")).register("a", named("a2"));
        reg.register("b", named("b1"));

        assert_eq!(reg.len(), 2);
        assert_eq!(names(&reg.handlers_for(&Ev::A).unwrap()), ["a1", "a2"]);
        assert_eq!(names(&reg.handlers_for(&Ev::B).unwrap()), ["b1"]);
        assert_eq!(names(reg.handlers(&"a")), ["a1", "a2"]);
        assert!(reg.handlers(&"c").is_empty());
    }

    #[test]
    fn unregistered_key_is_unresolved() {
        let reg: HandlerRegistry<_, Ev> = HandlerRegistry::new(kind).with("a", named("a1"));
        assert!(reg.handlers_for(&Ev::C).is_none());
    }

    #[test]
    fn lenient_registry_resolves_to_empty() {
        let reg: HandlerRegistry<_, Ev> = HandlerRegistry::new(kind).lenient();
        assert!(reg.is_empty());
        assert_eq!(reg.handlers_for(&Ev::C).map(|h| h.len()), Some(0));
    }
}
