use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::models::{ProjectOverlay, RepositoryEntry};
use crate::shared::hooks::use_scroll_progress::scroll_to_top;
use crate::shared::lifecycle::{GenerationToken, Liveness};
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::{AppServices, Clock};

#[derive(Clone, Copy, PartialEq)]
pub struct UseProjectOverlay {
    pub state: Signal<ProjectOverlay>,
    close_delay: Duration,
    liveness: CopyValue<Liveness>,
}

impl UseProjectOverlay {
    pub fn open(&mut self, entry: RepositoryEntry) {
        logging::log_overlay_opened(&entry.name);
        self.state.write().open(entry);
        scroll_to_top();
    }

    /// Hides now, drops the selection after the exit transition.
    pub fn close(&mut self) {
        let close_token = self.state.write().close();
        let guard = self.liveness.read().begin();
        let delay = self.close_delay;
        let services = consume_context::<AppServices>();
        let mut state = self.state;
        spawn(async move {
            finish_after(&services.clock, delay, guard, || {
                state.write().finish_close(close_token);
            })
            .await;
        });
    }
}

/// Sleeps `delay`, then runs `apply` unless `guard` went stale meanwhile.
pub(crate) async fn finish_after<C: Clock + ?Sized>(
    clock: &C,
    delay: Duration,
    guard: GenerationToken,
    apply: impl FnOnce(),
) -> bool {
    clock.sleep(delay).await;
    if !guard.is_current() {
        logging::log_stale_completion(LogOperation::Overlay);
        return false;
    }
    apply();
    true
}

pub fn use_project_overlay() -> UseProjectOverlay {
    let services = use_context::<AppServices>();
    let state = use_signal(ProjectOverlay::default);
    let liveness = use_hook(|| CopyValue::new(Liveness::default()));

    let teardown = liveness.read().clone();
    use_drop(move || teardown.invalidate());

    UseProjectOverlay {
        state,
        close_delay: services.config.timing.overlay_close_delay,
        liveness,
    }
}
