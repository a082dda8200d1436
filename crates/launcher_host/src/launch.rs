//! Process-launch host-service contracts.

use std::{cell::Cell, future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`ProcessLaunchService`].
pub type ProcessLaunchFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Bridge reply for a start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartOutcome {
    /// Whether the host reports the server process as started.
    pub started: bool,
    /// Port the server listens on when started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl StartOutcome {
    /// Returns the port when the host reports a usable running server.
    pub fn running_port(&self) -> Option<u16> {
        if self.started {
            self.port
        } else {
            None
        }
    }
}

/// Host service that starts the local Pinokio server process.
///
/// One bridge call per invocation; double-start protection is the host's
/// responsibility and surfaces as `started: false`.
pub trait ProcessLaunchService {
    /// Asks the host shell to start the server, reporting the outcome.
    fn start_server<'a>(&'a self) -> ProcessLaunchFuture<'a, Result<StartOutcome, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op launch service for hosts without a process-launch capability.
pub struct NoopProcessLaunchService;

impl ProcessLaunchService for NoopProcessLaunchService {
    fn start_server<'a>(&'a self) -> ProcessLaunchFuture<'a, Result<StartOutcome, String>> {
        Box::pin(async {
            Ok(StartOutcome {
                started: false,
                port: None,
            })
        })
    }
}

#[derive(Debug, Default)]
/// In-memory launch service that always reports a started server on a fixed
/// port. Used by runtime tests.
pub struct MemoryProcessLaunchService {
    port: u16,
    calls: Cell<usize>,
}

impl MemoryProcessLaunchService {
    /// Creates a launch service reporting `port` on every start.
    pub fn new(port: u16) -> Self {
        Self {
            port,
            calls: Cell::new(0),
        }
    }

    /// Number of start requests received so far.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl ProcessLaunchService for MemoryProcessLaunchService {
    fn start_server<'a>(&'a self) -> ProcessLaunchFuture<'a, Result<StartOutcome, String>> {
        self.calls.set(self.calls.get() + 1);
        let port = self.port;
        Box::pin(async move {
            Ok(StartOutcome {
                started: true,
                port: Some(port),
            })
        })
    }
}
