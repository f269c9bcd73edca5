//! Portfolio site entry point.
//!
//! The web build runs in the browser; `--features desktop` opens the same
//! app in a native window.

use portfolio_site::app::App;

#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Portfolio site initialized".into());
    // Routes `tracing` events to the browser console
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    portfolio_site::shared::logging::init();
    tracing::info!("Starting portfolio site");
    dioxus::launch(App);
}
