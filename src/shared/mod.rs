pub mod errors;
pub mod lifecycle;
pub mod logging;
pub mod services;

// Dioxus hooks
pub mod hooks;
