//! Preload-bridge implementations of the launcher host-service traits.
//!
//! These services delegate to the bridge interop layer, which routes calls to
//! the host shell's preload global in desktop webview contexts.

use launcher_host::{
    DashboardViewFuture, DashboardViewService, ProcessLaunchFuture, ProcessLaunchService,
    StartOutcome, ViewChange,
};

#[derive(Debug, Clone, Copy, Default)]
/// Launch service routed through the host shell's preload bridge.
pub struct ShellProcessLaunchService;

impl ProcessLaunchService for ShellProcessLaunchService {
    fn start_server<'a>(&'a self) -> ProcessLaunchFuture<'a, Result<StartOutcome, String>> {
        Box::pin(async { crate::bridge::start_pinokio().await })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// View-switch service routed through the host shell's preload bridge.
pub struct ShellDashboardViewService;

impl DashboardViewService for ShellDashboardViewService {
    fn set_view<'a>(&'a self, change: ViewChange) -> DashboardViewFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::set_dashboard_view(&change).await })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use launcher_host::{DashboardViewService, ProcessLaunchService, ViewChange};

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_shell_services_match_bridge_fallback_behavior() {
        let launch: &dyn ProcessLaunchService = &ShellProcessLaunchService;
        assert!(block_on(launch.start_server()).is_err());

        let view: &dyn DashboardViewService = &ShellDashboardViewService;
        assert!(block_on(view.set_view(ViewChange::dashboard(4173))).is_err());
    }
}
