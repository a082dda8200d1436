//! WASM/JS interop for the duck-typed preload launcher bridge.
//!
//! The host shell's preload script exposes `window.launcherHost` with
//! `startPinokio()` and `setDashboardView(change)`; both return promises.
//! Thrown JS errors are reduced to their `message` string, falling back to
//! the value's string form.

use js_sys::Promise;
use launcher_host::{StartOutcome, ViewChange};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
function hostBridge() {
  const bridge = typeof window !== 'undefined' ? window.launcherHost : undefined;
  if (!bridge) {
    throw new Error('Launcher host bridge is unavailable in this webview');
  }
  return bridge;
}

export async function jsStartPinokio() {
  return await hostBridge().startPinokio();
}

export async function jsSetDashboardView(change) {
  return await hostBridge().setDashboardView(change);
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsStartPinokio)]
    fn js_start_pinokio() -> Promise;
    #[wasm_bindgen(js_name = jsSetDashboardView)]
    fn js_set_dashboard_view(change: JsValue) -> Promise;
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub async fn start_pinokio() -> Result<StartOutcome, String> {
    let value = await_promise(js_start_pinokio()).await?;
    // A null/undefined reply means the host could not produce an outcome;
    // treat it as a not-started report rather than a decode failure.
    if value.is_null() || value.is_undefined() {
        return Ok(StartOutcome {
            started: false,
            port: None,
        });
    }
    from_value(value).map_err(|e| e.to_string())
}

pub async fn set_dashboard_view(change: &ViewChange) -> Result<(), String> {
    let payload = change
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())?;
    let _ = await_promise(js_set_dashboard_view(payload)).await?;
    Ok(())
}
