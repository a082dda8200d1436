//! Compile-time host-strategy selection and trait-erasing service adapters.

use std::rc::Rc;

use launcher_host::{
    CounterAction, CounterFuture, CounterService, DashboardViewFuture, DashboardViewService,
    HostStrategy, LaunchHostServices, NoopCounterService, NoopDashboardViewService,
    NoopProcessLaunchService, ProcessLaunchFuture, ProcessLaunchService, StartOutcome, ViewChange,
};

use crate::{ShellDashboardViewService, ShellProcessLaunchService, WebCounterService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::DesktopStub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::DesktopShell
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete launch backend behind
/// [`ProcessLaunchService`].
#[derive(Debug, Clone, Copy)]
pub enum ProcessLaunchServiceAdapter {
    /// Preload-bridge launch transport.
    DesktopShell(ShellProcessLaunchService),
    /// No-op fallback used when the host bridge is intentionally stubbed.
    DesktopStub(NoopProcessLaunchService),
}

impl ProcessLaunchService for ProcessLaunchServiceAdapter {
    fn start_server<'a>(&'a self) -> ProcessLaunchFuture<'a, Result<StartOutcome, String>> {
        match self {
            Self::DesktopShell(service) => service.start_server(),
            Self::DesktopStub(service) => service.start_server(),
        }
    }
}

/// Adapter enum that erases the concrete view-switch backend behind
/// [`DashboardViewService`].
#[derive(Debug, Clone, Copy)]
pub enum DashboardViewServiceAdapter {
    /// Preload-bridge view-switch transport.
    DesktopShell(ShellDashboardViewService),
    /// No-op fallback used when the host bridge is intentionally stubbed.
    DesktopStub(NoopDashboardViewService),
}

impl DashboardViewService for DashboardViewServiceAdapter {
    fn set_view<'a>(&'a self, change: ViewChange) -> DashboardViewFuture<'a, Result<(), String>> {
        match self {
            Self::DesktopShell(service) => service.set_view(change),
            Self::DesktopStub(service) => service.set_view(change),
        }
    }
}

/// Adapter enum that erases the concrete counter backend behind
/// [`CounterService`].
#[derive(Debug, Clone, Copy)]
pub enum CounterServiceAdapter {
    /// Localhost HTTP counter client.
    DesktopShell(WebCounterService),
    /// No-op fallback used when no server can be reached.
    DesktopStub(NoopCounterService),
}

impl CounterService for CounterServiceAdapter {
    fn fetch<'a>(&'a self, port: u16) -> CounterFuture<'a, Result<i64, String>> {
        match self {
            Self::DesktopShell(service) => service.fetch(port),
            Self::DesktopStub(service) => service.fetch(port),
        }
    }

    fn apply<'a>(
        &'a self,
        port: u16,
        action: CounterAction,
    ) -> CounterFuture<'a, Result<i64, String>> {
        match self {
            Self::DesktopShell(service) => service.apply(port, action),
            Self::DesktopStub(service) => service.apply(port, action),
        }
    }
}

/// Builds the launch adapter for the compile-time selected host strategy.
pub fn process_launch_service() -> ProcessLaunchServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::DesktopShell => {
            ProcessLaunchServiceAdapter::DesktopShell(ShellProcessLaunchService)
        }
        HostStrategy::DesktopStub => {
            ProcessLaunchServiceAdapter::DesktopStub(NoopProcessLaunchService)
        }
    }
}

/// Builds the view-switch adapter for the compile-time selected host strategy.
pub fn dashboard_view_service() -> DashboardViewServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::DesktopShell => {
            DashboardViewServiceAdapter::DesktopShell(ShellDashboardViewService)
        }
        HostStrategy::DesktopStub => {
            DashboardViewServiceAdapter::DesktopStub(NoopDashboardViewService)
        }
    }
}

/// Builds the counter adapter for the compile-time selected host strategy.
pub fn counter_service() -> CounterServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::DesktopShell => CounterServiceAdapter::DesktopShell(WebCounterService),
        HostStrategy::DesktopStub => CounterServiceAdapter::DesktopStub(NoopCounterService),
    }
}

/// Assembles the host service bundle injected into the launcher runtime.
pub fn host_services() -> LaunchHostServices {
    LaunchHostServices {
        launch: Rc::new(process_launch_service()),
        dashboard_view: Rc::new(dashboard_view_service()),
        counter: Rc::new(counter_service()),
        host_strategy: selected_host_strategy(),
    }
}
