//! # Logging handler for debugging and demos.
//!
//! [`LogHandler`] writes every event it receives to `tracing` at `INFO`.
//! Route it from a resolver (or use it as the single handler of a
//! [`GeneralFnDispatcher`](crate::GeneralFnDispatcher)) to trace what a unit
//! of work emitted.
//!
//! ## Output format
//! ```text
//! INFO domain_events: domain event event=Placed { id: 7 } cancelled=false
//! ```

use std::fmt;

use crate::handlers::Handler;
use crate::scope::Scope;

/// `tracing`-backed logging handler.
///
/// Enabled via the `logging` feature. Not intended as a production audit trail.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogHandler;

impl<E> Handler<E> for LogHandler
where
    E: fmt::Debug + Send + Sync + 'static,
{
    fn handle(&self, scope: &Scope, event: &E) {
        tracing::info!(event = ?event, cancelled = scope.is_cancelled(), "domain event");
    }

    fn name(&self) -> &str {
        "log"
    }
}
