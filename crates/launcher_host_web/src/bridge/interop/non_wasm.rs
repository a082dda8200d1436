use launcher_host::{StartOutcome, ViewChange};

fn unsupported() -> String {
    "The launcher host bridge is only available when compiled for wasm32".to_string()
}

pub async fn start_pinokio() -> Result<StartOutcome, String> {
    Err(unsupported())
}

pub async fn set_dashboard_view(_change: &ViewChange) -> Result<(), String> {
    Err(unsupported())
}
