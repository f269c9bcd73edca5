use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    /// Gradient call to action
    Primary,
    /// Outlined
    Secondary,
    /// Icon-only, used for close controls
    Ghost,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    /// `"submit"` inside forms, `"button"` otherwise
    kind: Option<&'static str>,
    aria_label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);
    let disabled = disabled.unwrap_or(false);
    let kind = kind.unwrap_or("button");

    let variant_class = match variant {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Secondary => "c-button--secondary",
        ButtonVariant::Ghost => "c-button--ghost",
    };

    rsx! {
        button {
            class: "c-button {variant_class}",
            r#type: kind,
            disabled: disabled,
            aria_label: aria_label,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
