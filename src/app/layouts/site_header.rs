use dioxus::prelude::*;

use crate::app::components::ThemeToggle;
use crate::domain::models::profile::PROFILE;
use crate::shared::hooks::Theme;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#experience", "Experience"),
    ("#blogs", "Blog"),
    ("#contact", "Contact"),
];

/// Sticky top bar: name, section anchors, theme toggle and resume link.
#[component]
pub fn SiteHeader(theme: Signal<Theme>) -> Element {
    rsx! {
        header { class: "c-header",
            div { class: "c-header__inner",
                div { class: "c-header__brand",
                    span { class: "c-header__name", "{PROFILE.name}" }
                    span { class: "c-header__tagline", "{PROFILE.tagline}" }
                }

                nav { class: "c-header__nav",
                    for (href, label) in NAV_LINKS.iter() {
                        a { key: "{href}", class: "c-header__link", href: *href, "{label}" }
                    }
                    ThemeToggle { theme }
                    a { class: "c-button c-button--primary", href: PROFILE.resume, "Resume" }
                }
            }
        }
    }
}
