//! Preload launcher-bridge implementations for host service adapters.
//!
//! This module keeps a stable public async API for callers in
//! `shell_services` while the `interop` layer routes each call to a
//! target-specific implementation.

mod interop;

use launcher_host::{StartOutcome, ViewChange};

/// Asks the host shell to start the Pinokio server process.
pub async fn start_pinokio() -> Result<StartOutcome, String> {
    interop::start_pinokio().await
}

/// Notifies the host shell of the active view.
pub async fn set_dashboard_view(change: &ViewChange) -> Result<(), String> {
    interop::set_dashboard_view(change).await
}
