//! Utility helpers shared by the search and playlist flows.

#[cfg(not(target_arch = "wasm32"))]
pub async fn delay_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn delay_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

/// Leave the page for `path` (a full navigation, not a client-side route).
#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(path) {
        tracing::warn!(?err, path, "redirect failed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(path: &str) {
    tracing::info!(path, "redirect requested");
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
