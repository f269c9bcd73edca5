use dioxus::prelude::*;

use crate::app::components::Button;
use crate::domain::models::{RepositoryEntry, PROJECT_IMAGE_PLACEHOLDER};

/// Repository preview image, falling back to the placeholder when the
/// per-project image is missing.
#[component]
pub fn ProjectImage(repo: RepositoryEntry, class: String) -> Element {
    let mut failed = use_signal(|| false);
    let src = if failed() {
        PROJECT_IMAGE_PLACEHOLDER.to_string()
    } else {
        repo.preview_image()
    };

    rsx! {
        img {
            class: "{class}",
            src: "{src}",
            alt: "{repo.name}",
            loading: "lazy",
            onerror: move |_| failed.set(true),
        }
    }
}

#[component]
pub fn ProjectCard(repo: RepositoryEntry, on_open: EventHandler<RepositoryEntry>) -> Element {
    let repo_for_image = repo.clone();
    let repo_for_button = repo.clone();

    rsx! {
        div { class: "c-project-card",
            div {
                class: "c-project-card__media",
                onclick: move |_| on_open.call(repo_for_image.clone()),
                ProjectImage { repo: repo.clone(), class: "c-project-card__image".to_string() }
            }

            div { class: "c-project-card__name", "{repo.name}" }
            if let Some(language) = &repo.language {
                span { class: "c-project-card__language", "{language}" }
            }
            if let Some(description) = &repo.description {
                p { class: "c-project-card__description u-line-clamp-3", "{description}" }
            }

            div { class: "c-project-card__actions",
                Button {
                    onclick: move |_| on_open.call(repo_for_button.clone()),
                    "Preview"
                }
                a {
                    class: "c-button c-button--secondary",
                    href: "{repo.html_url}",
                    target: "_blank",
                    rel: "noreferrer",
                    "Code"
                }
            }
        }
    }
}
