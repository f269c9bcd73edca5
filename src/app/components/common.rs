use dioxus::prelude::*;

// Reusable Loading Spinner (BEM: c-loading)
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "c-loading__ring",
            div {}
            div {}
            div {}
            div {}
        }
    }
}

// Placeholder card shown in the projects grid while repos load
#[component]
pub fn SkeletonCard() -> Element {
    rsx! {
        div { class: "c-skeleton", "aria-hidden": "true" }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "Error: {message}" }
        }
    }
}

// Reusable Empty State Component
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "c-empty-state", "{message}" }
    }
}

#[component]
pub fn SectionHeading(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        h2 { class: "c-section__title", "{title}" }
        if let Some(subtitle) = subtitle {
            p { class: "c-section__subtitle", "{subtitle}" }
        }
    }
}
