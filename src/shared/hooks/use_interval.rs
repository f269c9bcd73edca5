use std::time::Duration;

use dioxus::prelude::*;

use crate::shared::services::{AppServices, Clock};

/// Runs `on_tick` every `period` while the calling component is mounted.
/// The timer task starts on first render and is cancelled on unmount.
pub fn use_interval(period: Duration, on_tick: impl FnMut() + 'static) {
    let services = use_context::<AppServices>();
    let task = use_hook(move || {
        let mut on_tick = on_tick;
        spawn(async move {
            loop {
                services.clock.sleep(period).await;
                on_tick();
            }
        })
    });
    use_drop(move || task.cancel());
}
