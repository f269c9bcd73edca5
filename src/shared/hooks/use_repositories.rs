use dioxus::prelude::*;

use crate::domain::models::LoadState;
use crate::shared::lifecycle::Liveness;
use crate::shared::services::github::refresh_repositories;
use crate::shared::services::AppServices;

/// Repository listing for the projects grid.
///
/// Loads on mount and, when a refresh interval is configured, again on every
/// tick. Each load replaces the whole state; a completion that arrives after
/// unmount is dropped.
pub fn use_repositories() -> Signal<LoadState> {
    let services = use_context::<AppServices>();
    let mut state = use_signal(LoadState::default);
    let liveness = use_hook(Liveness::default);

    let guard = liveness.clone();
    let task = use_hook(move || {
        spawn(async move {
            let loader = services.repository_loader();
            refresh_repositories(
                &loader,
                &services.clock,
                services.config.github.refresh_interval,
                &guard,
                |next| {
                    if *state.peek() != next {
                        state.set(next);
                    }
                },
            )
            .await;
        })
    });

    use_drop(move || {
        liveness.invalidate();
        task.cancel();
    });

    state
}
