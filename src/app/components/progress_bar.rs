use dioxus::prelude::*;

/// Thin bar pinned to the top of the viewport showing scroll progress.
#[component]
pub fn ScrollProgressBar(percent: u8) -> Element {
    rsx! {
        div { class: "c-progress",
            div {
                class: "c-progress__bar",
                style: "width: {percent}%;",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{percent}",
            }
        }
    }
}
