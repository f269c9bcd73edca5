pub mod button;
pub mod card;
pub mod common;
pub mod contact_form;
pub mod markdown;
pub mod progress_bar;
pub mod project_card;
pub mod project_overlay;
pub mod sections;
pub mod splash;
pub mod theme_toggle;
pub mod typewriter;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use common::{EmptyState, ErrorMessage, LoadingSpinner, SectionHeading, SkeletonCard};
pub use contact_form::ContactForm;
pub use markdown::{render_markdown, Markdown};
pub use progress_bar::ScrollProgressBar;
pub use project_card::{ProjectCard, ProjectImage};
pub use project_overlay::ProjectPreview;
pub use sections::{About, Blog, Certificates, Contact, Experience, Footer, Hero, Projects, Skills, TechTimeline};
pub use splash::Splash;
pub use theme_toggle::ThemeToggle;
pub use typewriter::RoleRotator;
