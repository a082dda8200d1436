//! HTTP client for the Pinokio counter API.
//!
//! The counter lives on `http://localhost:<port>` behind three endpoints:
//! `GET /counter`, `POST /counter/increment`, `POST /counter/decrement`,
//! each replying with a `{ "counter": n }` envelope.

use launcher_host::{CounterAction, CounterFuture, CounterService};

#[cfg(target_arch = "wasm32")]
mod imp {
    use gloo_net::http::{Request, Response};
    use launcher_host::{CounterAction, CounterSnapshot};

    fn counter_url(port: u16) -> String {
        format!("http://localhost:{port}/counter")
    }

    async fn decode(response: Response) -> Result<i64, String> {
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<CounterSnapshot>()
            .await
            .map(|snapshot| snapshot.counter)
            .map_err(|e| format!("Parse error: {e}"))
    }

    pub async fn fetch_counter(port: u16) -> Result<i64, String> {
        let response = Request::get(&counter_url(port))
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;
        decode(response).await
    }

    pub async fn apply_counter(port: u16, action: CounterAction) -> Result<i64, String> {
        let url = format!("{}/{}", counter_url(port), action.path_segment());
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;
        decode(response).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use launcher_host::CounterAction;

    fn unsupported() -> String {
        "The counter API client is only available when compiled for wasm32".to_string()
    }

    pub async fn fetch_counter(_port: u16) -> Result<i64, String> {
        Err(unsupported())
    }

    pub async fn apply_counter(_port: u16, _action: CounterAction) -> Result<i64, String> {
        Err(unsupported())
    }
}

/// Reads the current counter value from the server on `port`.
pub async fn fetch_counter(port: u16) -> Result<i64, String> {
    imp::fetch_counter(port).await
}

/// Applies a counter mutation on the server and returns the new value.
pub async fn apply_counter(port: u16, action: CounterAction) -> Result<i64, String> {
    imp::apply_counter(port, action).await
}

#[derive(Debug, Clone, Copy, Default)]
/// Counter service backed by the localhost HTTP API.
pub struct WebCounterService;

impl CounterService for WebCounterService {
    fn fetch<'a>(&'a self, port: u16) -> CounterFuture<'a, Result<i64, String>> {
        Box::pin(async move { fetch_counter(port).await })
    }

    fn apply<'a>(
        &'a self,
        port: u16,
        action: CounterAction,
    ) -> CounterFuture<'a, Result<i64, String>> {
        Box::pin(async move { apply_counter(port, action).await })
    }
}
