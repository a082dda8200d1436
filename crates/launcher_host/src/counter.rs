//! Counter host-service contracts for the Pinokio HTTP API.

use std::{cell::Cell, future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`CounterService`].
pub type CounterFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Mutation accepted by the counter endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    /// `POST /counter/increment`.
    Increment,
    /// `POST /counter/decrement`.
    Decrement,
}

impl CounterAction {
    /// URL path segment for the mutation (`/counter/<segment>`).
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }
}

/// Wire envelope returned by every counter endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    /// Current server-side counter value.
    pub counter: i64,
}

/// Host service reading and mutating the server-owned counter.
///
/// The server owns the value; callers hold at most a stale cached copy and
/// treat every reply as last-write-wins.
pub trait CounterService {
    /// Reads the current counter value from the server on `port`.
    fn fetch<'a>(&'a self, port: u16) -> CounterFuture<'a, Result<i64, String>>;

    /// Applies `action` on the server and returns the new value.
    fn apply<'a>(
        &'a self,
        port: u16,
        action: CounterAction,
    ) -> CounterFuture<'a, Result<i64, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Counter service for hosts without a reachable server.
pub struct NoopCounterService;

fn unreachable_server() -> String {
    "Counter API is unavailable on this host".to_string()
}

impl CounterService for NoopCounterService {
    fn fetch<'a>(&'a self, _port: u16) -> CounterFuture<'a, Result<i64, String>> {
        Box::pin(async { Err(unreachable_server()) })
    }

    fn apply<'a>(
        &'a self,
        _port: u16,
        _action: CounterAction,
    ) -> CounterFuture<'a, Result<i64, String>> {
        Box::pin(async { Err(unreachable_server()) })
    }
}

#[derive(Debug, Default)]
/// In-memory counter used by runtime tests.
pub struct MemoryCounterService {
    value: Cell<i64>,
}

impl MemoryCounterService {
    /// Creates a counter holding `value`.
    pub fn new(value: i64) -> Self {
        Self {
            value: Cell::new(value),
        }
    }

    /// Current in-memory value.
    pub fn value(&self) -> i64 {
        self.value.get()
    }
}

impl CounterService for MemoryCounterService {
    fn fetch<'a>(&'a self, _port: u16) -> CounterFuture<'a, Result<i64, String>> {
        let value = self.value.get();
        Box::pin(async move { Ok(value) })
    }

    fn apply<'a>(
        &'a self,
        _port: u16,
        action: CounterAction,
    ) -> CounterFuture<'a, Result<i64, String>> {
        let next = match action {
            CounterAction::Increment => self.value.get() + 1,
            CounterAction::Decrement => self.value.get() - 1,
        };
        self.value.set(next);
        Box::pin(async move { Ok(next) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn mutations_map_to_stable_path_segments() {
        assert_eq!(CounterAction::Increment.path_segment(), "increment");
        assert_eq!(CounterAction::Decrement.path_segment(), "decrement");
    }

    #[test]
    fn snapshot_decodes_the_counter_field() {
        let snapshot: CounterSnapshot =
            serde_json::from_str(r#"{"counter":7}"#).expect("decode snapshot");
        assert_eq!(snapshot.counter, 7);
    }

    #[test]
    fn memory_counter_applies_mutations_and_serves_reads() {
        let service = MemoryCounterService::new(7);
        assert_eq!(block_on(service.fetch(4173)).expect("fetch"), 7);
        assert_eq!(
            block_on(service.apply(4173, CounterAction::Increment)).expect("increment"),
            8
        );
        assert_eq!(
            block_on(service.apply(4173, CounterAction::Decrement)).expect("decrement"),
            7
        );
        assert_eq!(service.value(), 7);
    }

    #[test]
    fn noop_counter_reports_unreachable_server() {
        let service: &dyn CounterService = &NoopCounterService;
        assert!(block_on(service.fetch(4173)).is_err());
        assert!(block_on(service.apply(4173, CounterAction::Increment)).is_err());
    }
}
