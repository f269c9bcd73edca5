//! Structured logging for the portfolio site
//!
//! Provides consistent, contextual logging across the application.
//! Every event carries an `operation` field so browser console output and
//! native subscriber output can be filtered the same way.

use std::time::Duration;

/// Log operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    RepositoryFetch,
    VisitorCounter,
    ContactRelay,
    ThemePreference,
    LoadingGate,
    Overlay,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::RepositoryFetch => "repository_fetch",
            LogOperation::VisitorCounter => "visitor_counter",
            LogOperation::ContactRelay => "contact_relay",
            LogOperation::ThemePreference => "theme_preference",
            LogOperation::LoadingGate => "loading_gate",
            LogOperation::Overlay => "overlay",
        }
    }
}

/// Install the native subscriber. `RUST_LOG` refines the default `info` level.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

pub fn log_repository_fetch_start(account: &str) {
    tracing::debug!(
        operation = LogOperation::RepositoryFetch.as_str(),
        account = account,
        "Fetching public repositories"
    );
}

pub fn log_repository_fetch_success(account: &str, count: usize) {
    tracing::info!(
        operation = LogOperation::RepositoryFetch.as_str(),
        account = account,
        repo_count = count,
        "Repositories loaded"
    );
}

pub fn log_repository_fetch_error(account: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::RepositoryFetch.as_str(),
        account = account,
        error = error,
        "Failed to load repositories"
    );
}

/// A fetch finished after its component moved on; the result was dropped.
pub fn log_stale_completion(operation: LogOperation) {
    tracing::debug!(
        operation = operation.as_str(),
        "Discarded stale async completion"
    );
}

pub fn log_visitor_count(source: &str, value: u64) {
    tracing::debug!(
        operation = LogOperation::VisitorCounter.as_str(),
        source = source,
        value = value,
        "Visitor count resolved"
    );
}

pub fn log_visitor_remote_failed(error: &str) {
    tracing::debug!(
        operation = LogOperation::VisitorCounter.as_str(),
        error = error,
        "Remote counter unavailable, using local counter"
    );
}

pub fn log_visitor_local_failed(error: &str) {
    tracing::warn!(
        operation = LogOperation::VisitorCounter.as_str(),
        error = error,
        "Local counter unavailable"
    );
}

pub fn log_contact_relay_sent() {
    tracing::info!(
        operation = LogOperation::ContactRelay.as_str(),
        "Contact message relayed"
    );
}

pub fn log_contact_relay_rejected(status: u16, body: &str) {
    tracing::warn!(
        operation = LogOperation::ContactRelay.as_str(),
        status = status,
        body = body,
        "Relay rejected contact message"
    );
}

pub fn log_contact_relay_error(error: &str) {
    tracing::error!(
        operation = LogOperation::ContactRelay.as_str(),
        error = error,
        "Failed to send contact message"
    );
}

pub fn log_theme_saved(theme: &str) {
    tracing::debug!(
        operation = LogOperation::ThemePreference.as_str(),
        theme = theme,
        "Theme saved"
    );
}

pub fn log_theme_storage_error(action: &str, error: &str) {
    tracing::debug!(
        operation = LogOperation::ThemePreference.as_str(),
        action = action,
        error = error,
        "Theme storage unavailable, using in-memory value"
    );
}

pub fn log_loading_gate_released(held: Duration) {
    tracing::debug!(
        operation = LogOperation::LoadingGate.as_str(),
        held_ms = held.as_millis() as u64,
        "Splash released"
    );
}

pub fn log_overlay_opened(repository: &str) {
    tracing::debug!(
        operation = LogOperation::Overlay.as_str(),
        repository = repository,
        "Project overlay opened"
    );
}

/// The native client lost its User-Agent; GitHub will answer 403.
pub fn log_http_client_fallback(error: &str) {
    tracing::warn!(
        operation = LogOperation::RepositoryFetch.as_str(),
        error = error,
        "HTTP client builder failed, falling back to a client without User-Agent"
    );
}

pub fn log_config_fallback(error: &str) {
    tracing::warn!(error = error, "Invalid site configuration, using defaults");
}
