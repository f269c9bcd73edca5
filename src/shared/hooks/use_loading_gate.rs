use dioxus::prelude::*;

use crate::domain::models::LoadState;
use crate::domain::services::LoadingGate;
use crate::shared::logging;
use crate::shared::services::AppServices;

/// Splash visibility. True on first render; flips to false once the
/// repository load settles (or the ceiling passes) and the minimum display
/// time is over.
pub fn use_loading_gate(repositories: Signal<LoadState>) -> Signal<bool> {
    let services = use_context::<AppServices>();
    let mut show_splash = use_signal(|| true);

    let task = use_hook(move || {
        spawn(async move {
            let gate = LoadingGate::from(&services.config.timing);
            let held = gate
                .hold(&services.clock, || repositories.peek().is_loading())
                .await;
            logging::log_loading_gate_released(held);
            show_splash.set(false);
        })
    });
    use_drop(move || task.cancel());

    show_splash
}
