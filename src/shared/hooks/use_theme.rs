use dioxus::prelude::*;
use std::str::FromStr;

use crate::shared::services::AppServices;

/// Site colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Ok(Theme::Dark), // Default to dark
        }
    }
}

/// Theme hook: reads the stored preference synchronously on first render,
/// then applies and persists every change.
pub fn use_theme() -> Signal<Theme> {
    let services = use_context::<AppServices>();
    let preferences = use_hook(|| std::rc::Rc::new(services.preferences()));

    let initial = preferences.clone();
    let current_theme = use_signal(move || initial.load_theme());

    use_effect(move || {
        let theme = current_theme();
        apply_theme_class(theme);
        preferences.save_theme(theme);
    });

    current_theme
}

/// Toggle the `dark` class on the document element
#[cfg(target_arch = "wasm32")]
fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    let _ = root.class_list().toggle_with_force("light", !theme.is_dark());
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_class(_theme: Theme) {
    // Desktop renders the class on the root element instead
}
