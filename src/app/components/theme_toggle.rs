use dioxus::prelude::*;
use crate::shared::hooks::Theme;

/// Header button switching between dark and light.
/// Persistence and the document class are handled by `use_theme`.
#[component]
pub fn ThemeToggle(theme: Signal<Theme>) -> Element {
    let mut theme = theme;
    let current = theme();

    // Tooltip shows target state (what will happen on click)
    let tooltip = format!("Switch to {} theme", current.toggled().as_str());

    let toggle_class = if current.is_dark() {
        "c-theme-toggle"
    } else {
        "c-theme-toggle c-theme-toggle--light"
    };

    rsx! {
        button {
            class: "{toggle_class}",
            r#type: "button",
            title: "{tooltip}",
            aria_label: "Toggle dark mode",
            onclick: move |_| theme.set(current.toggled()),
            "{current.icon()}"
        }
    }
}
