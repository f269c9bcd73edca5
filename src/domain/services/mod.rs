// Business logic services
// Framework-agnostic, 100% testable

pub mod loading_gate;
pub mod scroll_progress;

pub use loading_gate::LoadingGate;
pub use scroll_progress::scroll_percentage;
