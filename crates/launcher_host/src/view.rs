//! Dashboard view-switch host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`DashboardViewService`].
pub type DashboardViewFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Pane the shell treats as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellView {
    /// Embedded home pane rendered by the launcher itself.
    Home,
    /// Dashboard surface overlaid with native content by the host shell.
    Dashboard,
}

impl ShellView {
    /// Returns a stable string token for diagnostics and wire payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dashboard => "dashboard",
        }
    }
}

/// Payload sent to the host when the active view changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewChange {
    /// View the host should present.
    pub view: ShellView,
    /// Server port, carried on dashboard switches so the host can reach the
    /// server. Omitted from the payload when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl ViewChange {
    /// Dashboard switch carrying the running server's port.
    pub fn dashboard(port: u16) -> Self {
        Self {
            view: ShellView::Dashboard,
            port: Some(port),
        }
    }

    /// Home switch; the payload carries no port field.
    pub fn home() -> Self {
        Self {
            view: ShellView::Home,
            port: None,
        }
    }
}

/// Host service presenting native/embedded content for the active view.
///
/// Calls are awaited for completion only; the reply carries no data and the
/// launcher never depends on it.
pub trait DashboardViewService {
    /// Notifies the host shell of the active view.
    fn set_view<'a>(&'a self, change: ViewChange) -> DashboardViewFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op view service for hosts without a dashboard surface.
pub struct NoopDashboardViewService;

impl DashboardViewService for NoopDashboardViewService {
    fn set_view<'a>(&'a self, _change: ViewChange) -> DashboardViewFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Default)]
/// Recording view service used by runtime tests.
pub struct RecordingDashboardViewService {
    changes: RefCell<Vec<ViewChange>>,
}

impl RecordingDashboardViewService {
    /// All view changes received so far, in order.
    pub fn changes(&self) -> Vec<ViewChange> {
        self.changes.borrow().clone()
    }
}

impl DashboardViewService for RecordingDashboardViewService {
    fn set_view<'a>(&'a self, change: ViewChange) -> DashboardViewFuture<'a, Result<(), String>> {
        self.changes.borrow_mut().push(change);
        Box::pin(async { Ok(()) })
    }
}
