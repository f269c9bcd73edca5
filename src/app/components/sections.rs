use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::components::markdown::Markdown;
use crate::app::components::project_card::ProjectCard;
use crate::app::components::typewriter::RoleRotator;
use crate::app::components::{
    Card, ContactForm, EmptyState, ErrorMessage, SectionHeading, SkeletonCard,
};
use crate::domain::models::profile::{
    BLOG_POSTS, CERTIFICATES, EXPERIENCE, PROFILE, SKILLS, TECH_TIMELINE,
};
use crate::domain::models::{LoadState, VisitorCount};
use crate::shared::hooks::UseProjectOverlay;
use crate::shared::services::AppServices;

#[component]
pub fn Hero() -> Element {
    let services = use_context::<AppServices>();
    let github = services.config.github.profile_url();

    rsx! {
        section { id: "hero", class: "c-hero",
            img { class: "c-hero__photo", src: PROFILE.photo, alt: PROFILE.name }
            h1 { class: "c-hero__name", "{PROFILE.name}" }
            div { class: "c-hero__role", RoleRotator { roles: PROFILE.roles } }

            div { class: "c-hero__links",
                a { class: "c-button c-button--secondary", href: "{github}", target: "_blank", rel: "noreferrer", "GitHub" }
                a { class: "c-button c-button--secondary", href: PROFILE.linkedin, target: "_blank", rel: "noreferrer", "LinkedIn" }
                a { class: "c-button c-button--primary", href: "#projects", "View Projects" }
            }
        }
    }
}

#[component]
pub fn About(visitors: VisitorCount) -> Element {
    let label = visitors.label();

    rsx! {
        section { id: "about", class: "c-section",
            SectionHeading { title: "About Me" }
            p { class: "c-section__lead", "{PROFILE.about}" }
            div { class: "c-about__visitors", "Visitors: {label}" }
        }
    }
}

#[component]
pub fn Projects(repositories: Signal<LoadState>, overlay: UseProjectOverlay) -> Element {
    let services = use_context::<AppServices>();
    let grid_limit = services.config.github.grid_limit;
    let state = repositories.read();
    let summary = state.summary();

    let grid = match &*state {
        LoadState::Loading => rsx! {
            for i in 0..3 {
                SkeletonCard { key: "{i}" }
            }
        },
        LoadState::Error(message) => rsx! {
            ErrorMessage { message: message.clone() }
        },
        LoadState::Ready(repos) if repos.is_empty() => rsx! {
            EmptyState { message: "No public repos found." }
        },
        LoadState::Ready(repos) => rsx! {
            for repo in repos.iter().take(grid_limit).cloned() {
                ProjectCard {
                    key: "{repo.id}",
                    repo: repo.clone(),
                    on_open: move |entry| {
                        let mut overlay = overlay;
                        overlay.open(entry);
                    },
                }
            }
        },
    };

    rsx! {
        section { id: "projects", class: "c-section",
            div { class: "c-section__header",
                SectionHeading { title: "Projects" }
                span { class: "c-section__meta", "{summary}" }
            }
            div { class: "c-project-grid", {grid} }
        }
    }
}

#[component]
pub fn Experience() -> Element {
    rsx! {
        section { id: "experience", class: "c-section",
            SectionHeading { title: "Experience" }
            div { class: "c-stack",
                for item in EXPERIENCE.iter() {
                    Card {
                        key: "{item.title}",
                        title: item.title.to_string(),
                        meta: item.period.to_string(),
                        Markdown { source: item.details }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "c-section",
            SectionHeading { title: "Skills" }
            div { class: "c-chips",
                for skill in SKILLS.iter() {
                    span { key: "{skill}", class: "c-chip", "{skill}" }
                }
            }
        }
    }
}

#[component]
pub fn TechTimeline() -> Element {
    rsx! {
        section { class: "c-section",
            SectionHeading { title: "Tech Stack Timeline" }
            ol { class: "c-timeline",
                for (delay, tech) in TECH_TIMELINE.iter().enumerate().map(|(i, tech)| (i * 80, tech)) {
                    li {
                        key: "{tech}",
                        class: "c-timeline__item animate-fade-in",
                        style: "animation-delay: {delay}ms;",
                        span { class: "c-timeline__dot" }
                        span { "{tech}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Certificates() -> Element {
    rsx! {
        section { class: "c-section",
            SectionHeading { title: "Certificates & Achievements" }
            div { class: "c-grid c-grid--three",
                for cert in CERTIFICATES.iter() {
                    Card {
                        key: "{cert.file}",
                        title: cert.title.to_string(),
                        href: cert.file.to_string(),
                        div { class: "c-card__subtitle", "{cert.subtitle}" }
                        div { class: "c-card__cta", "View certificate" }
                    }
                }
            }
        }
    }
}

/// Blog teasers. Clicking a post toggles its full body in place.
#[component]
pub fn Blog() -> Element {
    let mut expanded = use_signal(|| None::<&'static str>);

    rsx! {
        section { id: "blogs", class: "c-section",
            SectionHeading {
                title: "Blog",
                subtitle: "Short engineering notes, click to read.".to_string(),
            }
            div { class: "c-grid c-grid--two",
                for post in BLOG_POSTS.iter() {
                    article {
                        key: "{post.slug}",
                        class: "c-card c-card--interactive",
                        onclick: move |_| {
                            let next = if expanded() == Some(post.slug) { None } else { Some(post.slug) };
                            expanded.set(next);
                        },
                        div { class: "c-card__title", "{post.title}" }
                        div { class: "c-card__meta", "{post.date}" }
                        if expanded() == Some(post.slug) {
                            Markdown { source: post.body }
                        } else {
                            p { class: "c-card__body u-line-clamp-3", "{post.excerpt}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "c-section c-section--last",
            SectionHeading { title: "Contact Me" }
            p { class: "c-section__lead",
                "Prefer email? Write to "
                a { href: "mailto:{PROFILE.email}", "{PROFILE.email}" }
            }
            ContactForm {}
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "c-footer",
            "© {year} {PROFILE.name}. Built with Rust & Dioxus"
        }
    }
}
