//! Session state model for the launcher shell.

use launcher_host::ShellView;
use thiserror::Error;

/// User-visible startup failure retained by the idle state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StartError {
    /// The bridge completed but reported the server as not started.
    #[error("Pinokio failed to start or is already running.")]
    Rejected,
    /// The bridge call itself failed; the payload is the failure's message.
    #[error("{0}")]
    Bridge(String),
}

/// Live session for a started server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningSession {
    /// Port the server listens on.
    pub port: u16,
    /// Pane currently presented by the shell.
    pub view: ShellView,
    /// Cached counter value. Stale between fetches, absent until the first
    /// successful read.
    pub counter: Option<i64>,
}

impl RunningSession {
    /// Fresh session on `port`, presenting the home pane with no counter yet.
    pub fn new(port: u16) -> Self {
        Self {
            port,
            view: ShellView::Home,
            counter: None,
        }
    }
}

/// Launcher session lifecycle.
///
/// The phases make invalid flag combinations unrepresentable: a port exists
/// only while running, a start error only while idle, and the in-flight
/// marker carries no data at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// No server process; the start button is available.
    NotStarted {
        /// Failure from the most recent start attempt, if any.
        last_error: Option<StartError>,
    },
    /// A start request is in flight; the start button is disabled.
    Starting,
    /// The server is up and the shell presents the tabbed session view.
    Running(RunningSession),
}

impl SessionPhase {
    /// Idle phase with no prior failure.
    pub fn idle() -> Self {
        Self::NotStarted { last_error: None }
    }

    /// Returns the running session, if any.
    pub fn running(&self) -> Option<&RunningSession> {
        match self {
            Self::Running(session) => Some(session),
            _ => None,
        }
    }

    /// Returns the server port while running.
    pub fn port(&self) -> Option<u16> {
        self.running().map(|session| session.port)
    }

    /// Whether a start request is currently in flight.
    pub fn is_starting(&self) -> bool {
        matches!(self, Self::Starting)
    }
}

impl Default for SessionPhase {
    fn default() -> Self {
        Self::idle()
    }
}
