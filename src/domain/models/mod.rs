// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod repository;
pub mod load_state;
pub mod contact;
pub mod overlay;
pub mod visitor;
pub mod profile;

pub use repository::{
    project_repositories, RawRepository, RepositoryEntry, PROJECT_IMAGE_PLACEHOLDER,
};
pub use load_state::LoadState;
pub use contact::{ContactDraft, ContactForm, SendStatus};
pub use overlay::ProjectOverlay;
pub use visitor::{CounterHit, VisitorCount};
