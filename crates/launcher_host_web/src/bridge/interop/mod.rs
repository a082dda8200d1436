//! Shared transport interop for the preload launcher bridge.
//!
//! Routes calls to target-specific implementations while preserving a uniform
//! API for the public bridge module.

use launcher_host::{StartOutcome, ViewChange};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn start_pinokio() -> Result<StartOutcome, String> {
    imp::start_pinokio().await
}

pub async fn set_dashboard_view(change: &ViewChange) -> Result<(), String> {
    imp::set_dashboard_view(change).await
}
