// Custom Dioxus hooks
pub mod use_theme;
pub mod use_interval;
pub mod use_repositories;
pub mod use_loading_gate;
pub mod use_visitor_counter;
pub mod use_scroll_progress;
pub mod use_project_overlay;
pub mod use_contact_form;

pub use use_theme::{use_theme, Theme};
pub use use_interval::use_interval;
pub use use_repositories::use_repositories;
pub use use_loading_gate::use_loading_gate;
pub use use_visitor_counter::use_visitor_counter;
pub use use_scroll_progress::{scroll_to_top, use_scroll_progress};
pub use use_project_overlay::{use_project_overlay, UseProjectOverlay};
pub use use_contact_form::{use_contact_form, UseContactForm};
