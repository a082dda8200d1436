//! Browser/WASM host adapters for the Pinokio launcher shell.
//!
//! Concrete preload-bridge and HTTP transports live here behind the typed
//! contracts in `launcher_host`. The runtime crate never imports this crate
//! directly; the entry layer assembles [`launcher_host::LaunchHostServices`]
//! through [`host_services`] and injects it.

mod adapters;
pub mod bridge;
mod counter_api;
mod shell_services;

pub use adapters::{
    counter_service, dashboard_view_service, host_services, host_strategy_name,
    process_launch_service, selected_host_strategy, CounterServiceAdapter,
    DashboardViewServiceAdapter, ProcessLaunchServiceAdapter,
};
pub use counter_api::WebCounterService;
pub use shell_services::{ShellDashboardViewService, ShellProcessLaunchService};
