//! Shared host-bundle and strategy models for runtime composition.

use std::rc::Rc;

use crate::{CounterService, DashboardViewService, ProcessLaunchService};

/// Stable host strategy selected for the current build composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Desktop shell exposing the preload launcher bridge.
    DesktopShell,
    /// Desktop composition with placeholder/no-op adapters.
    DesktopStub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DesktopShell => "desktop-shell",
            Self::DesktopStub => "desktop-stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the launcher runtime.
///
/// All environment-specific service selection happens before this bundle
/// crosses into `launcher_runtime`, which keeps the runtime crate decoupled
/// from browser/desktop adapter details.
#[derive(Clone)]
pub struct LaunchHostServices {
    /// Server process launcher.
    pub launch: Rc<dyn ProcessLaunchService>,
    /// Dashboard view-switch notifier.
    pub dashboard_view: Rc<dyn DashboardViewService>,
    /// Counter API client.
    pub counter: Rc<dyn CounterService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl LaunchHostServices {
    /// Bundle of no-op services for compositions without a usable host.
    pub fn stubbed() -> Self {
        Self {
            launch: Rc::new(crate::NoopProcessLaunchService),
            dashboard_view: Rc::new(crate::NoopDashboardViewService),
            counter: Rc::new(crate::NoopCounterService),
            host_strategy: HostStrategy::DesktopStub,
        }
    }
}
