use dioxus::prelude::*;

use crate::domain::models::VisitorCount;
use crate::shared::lifecycle::Liveness;
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::AppServices;

/// Records this visit once per mount.
pub fn use_visitor_counter() -> Signal<VisitorCount> {
    let services = use_context::<AppServices>();
    let mut count = use_signal(VisitorCount::default);
    let liveness = use_hook(Liveness::default);

    let guard = liveness.clone();
    use_hook(move || {
        let token = guard.begin();
        spawn(async move {
            let resolved = services.visitor_counter().record_visit().await;
            if token.is_current() {
                count.set(resolved);
            } else {
                logging::log_stale_completion(LogOperation::VisitorCounter);
            }
        })
    });
    use_drop(move || liveness.invalidate());

    count
}
