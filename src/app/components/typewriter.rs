use dioxus::prelude::*;

use crate::shared::hooks::use_interval;
use crate::shared::services::AppServices;

/// Cycles through `roles`, one at a time.
#[component]
pub fn RoleRotator(roles: &'static [&'static str]) -> Element {
    let services = use_context::<AppServices>();
    let mut index = use_signal(|| 0usize);

    use_interval(services.config.timing.role_rotation, move || {
        let next = (index() + 1) % roles.len().max(1);
        index.set(next);
    });

    let role = roles.get(index()).copied().unwrap_or_default();

    rsx! {
        span { key: "{role}", class: "c-role animate-fade-in", "{role}" }
    }
}
