use dioxus::prelude::*;

use crate::app::components::LoadingSpinner;
use crate::domain::models::profile::PROFILE;

/// Full-screen loader shown until the loading gate releases.
#[component]
pub fn Splash() -> Element {
    rsx! {
        div { class: "c-splash",
            div { class: "c-splash__content",
                img {
                    class: "c-splash__photo",
                    src: PROFILE.photo,
                    alt: PROFILE.name,
                }
                div { class: "c-splash__name", "{PROFILE.name}" }
                LoadingSpinner {}
            }
        }
    }
}
