use dioxus::prelude::*;

use crate::app::components::{
    About, Blog, Certificates, Contact, Experience, Footer, Hero, ProjectPreview, Projects,
    ScrollProgressBar, Skills, Splash, TechTimeline,
};
use crate::app::layouts::SiteHeader;
use crate::config::SiteConfig;
use crate::shared::hooks::{
    use_loading_gate, use_project_overlay, use_repositories, use_scroll_progress, use_theme,
    use_visitor_counter,
};
use crate::shared::logging;
use crate::shared::services::AppServices;

const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

fn load_config() -> SiteConfig {
    #[cfg(target_arch = "wasm32")]
    let loaded = SiteConfig::from_build_env();
    #[cfg(not(target_arch = "wasm32"))]
    let loaded = SiteConfig::from_env();

    loaded.unwrap_or_else(|err| {
        logging::log_config_fallback(&err.to_string());
        SiteConfig::default()
    })
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| AppServices::new(load_config()));

    let theme = use_theme();
    let repositories = use_repositories();
    let visitors = use_visitor_counter();
    let show_splash = use_loading_gate(repositories);
    let scroll = use_scroll_progress();
    let overlay = use_project_overlay();

    use_effect(|| {
        tracing::info!("Portfolio app mounted");
    });

    let theme_class = theme().as_str();

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }

        div { class: "c-app c-app--{theme_class}",
            ScrollProgressBar { percent: scroll() }
            div { class: "c-backdrop", "aria-hidden": "true",
                div { class: "c-backdrop__blob c-backdrop__blob--a" }
                div { class: "c-backdrop__blob c-backdrop__blob--b" }
            }

            if show_splash() {
                Splash {}
            }

            SiteHeader { theme }

            main { class: "c-main",
                Hero {}
                About { visitors: visitors() }
                Projects { repositories, overlay }
                Experience {}
                Skills {}
                TechTimeline {}
                Certificates {}
                Blog {}
                Contact {}
            }

            Footer {}
            ProjectPreview { overlay }
        }
    }
}
