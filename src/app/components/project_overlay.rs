use dioxus::prelude::*;

use crate::app::components::project_card::ProjectImage;
use crate::app::components::{Button, ButtonVariant};
use crate::shared::hooks::UseProjectOverlay;

/// Full-screen preview of the selected repository.
#[component]
pub fn ProjectPreview(mut overlay: UseProjectOverlay) -> Element {
    let Some(repo) = overlay.state.read().renderable().cloned() else {
        return rsx! {};
    };
    let fork_label = if repo.fork { "Yes" } else { "No" };
    let updated = repo.updated_label();

    rsx! {
        div {
            class: "c-overlay animate-fade-in",
            onclick: move |_| overlay.close(),

            div {
                class: "c-overlay__panel",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "c-overlay__header",
                    h3 { class: "c-overlay__title", "{repo.name}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        aria_label: "Close preview".to_string(),
                        onclick: move |_| overlay.close(),
                        "✕"
                    }
                }

                ProjectImage { repo: repo.clone(), class: "c-overlay__image".to_string() }

                p { class: "c-overlay__description",
                    {repo.description.clone().unwrap_or_else(|| "No description provided.".to_string())}
                }

                div { class: "c-overlay__links",
                    a {
                        class: "c-button c-button--primary",
                        href: "{repo.html_url}",
                        target: "_blank",
                        rel: "noreferrer",
                        "GitHub"
                    }
                    if let Some(homepage) = &repo.homepage {
                        a {
                            class: "c-button c-button--secondary",
                            href: "{homepage}",
                            target: "_blank",
                            rel: "noreferrer",
                            "Live"
                        }
                    }
                }

                div { class: "c-overlay__meta",
                    span { "Updated: {updated}" }
                    span { "Fork: {fork_label}" }
                }
            }
        }
    }
}
