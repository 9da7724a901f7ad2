use dioxus::prelude::*;

/// Resolve after `ms` milliseconds using the webview's own timer.
pub async fn sleep_ms(ms: u64) {
    let script = format!("await new Promise(resolve => setTimeout(resolve, {ms})); return true;");
    if let Err(e) = document::eval(&script).join::<bool>().await {
        tracing::warn!(error = ?e, "timer script failed");
    }
}
