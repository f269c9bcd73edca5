use dioxus::prelude::*;

#[component]
pub fn Card(
    title: Option<String>,
    /// Right-aligned note in the header, e.g. a date range
    meta: Option<String>,
    href: Option<String>,
    children: Element,
) -> Element {
    let header = rsx! {
        if title.is_some() || meta.is_some() {
            div {
                class: "c-card__header",
                if let Some(title) = title {
                    h3 { class: "c-card__title", "{title}" }
                }
                if let Some(meta) = meta {
                    span { class: "c-card__meta", "{meta}" }
                }
            }
        }
        div {
            class: "c-card__body",
            {children}
        }
    };

    match href {
        Some(href) => rsx! {
            a {
                class: "c-card c-card--link",
                href: "{href}",
                target: "_blank",
                rel: "noreferrer",
                {header}
            }
        },
        None => rsx! {
            div { class: "c-card", {header} }
        },
    }
}
