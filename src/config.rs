//! Site configuration
//!
//! Every identifier the site talks to upstream lives here and is injected once
//! at start-up through the Dioxus context. Defaults describe the owner's site;
//! recognized `PORTFOLIO_*` keys override them.

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

const GITHUB_USER_ENV: &str = "PORTFOLIO_GITHUB_USER";
const GITHUB_TOKEN_ENV: &str = "PORTFOLIO_GITHUB_TOKEN";
const GITHUB_API_ENV: &str = "PORTFOLIO_GITHUB_API";
const REPO_REFRESH_ENV: &str = "PORTFOLIO_REPO_REFRESH_SECS";
const GRID_LIMIT_ENV: &str = "PORTFOLIO_PROJECT_GRID_LIMIT";
const COUNTER_BASE_ENV: &str = "PORTFOLIO_COUNTER_BASE";
const COUNTER_NAMESPACE_ENV: &str = "PORTFOLIO_COUNTER_NAMESPACE";
const EMAILJS_SERVICE_ENV: &str = "PORTFOLIO_EMAILJS_SERVICE";
const EMAILJS_TEMPLATE_ENV: &str = "PORTFOLIO_EMAILJS_TEMPLATE";
const EMAILJS_PUBLIC_KEY_ENV: &str = "PORTFOLIO_EMAILJS_PUBLIC_KEY";

pub const DEFAULT_GITHUB_USER: &str = "GokulReddy28";
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const REPOSITORY_PAGE_SIZE: u32 = 100;
pub const DEFAULT_GRID_LIMIT: usize = 12;

pub const DEFAULT_COUNTER_BASE: &str = "https://api.countapi.xyz";
pub const DEFAULT_COUNTER_NAMESPACE: &str = "gokul-portfolio.example.com";
pub const DEFAULT_COUNTER_KEY: &str = "visits";

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_EMAILJS_SERVICE: &str = "service_1b70yuk";
pub const DEFAULT_EMAILJS_TEMPLATE: &str = "template_v3cf3m9";
pub const DEFAULT_EMAILJS_PUBLIC_KEY: &str = "nz5aMvVJAtpFm3p-n";

const GRID_LIMIT_MIN: usize = 1;
const GRID_LIMIT_MAX: usize = REPOSITORY_PAGE_SIZE as usize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid number for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Repository listing settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubConfig {
    pub api_base: String,
    pub account: String,
    pub page_size: u32,
    pub token: Option<String>,
    /// `None` loads once per mount.
    pub refresh_interval: Option<Duration>,
    /// Cards rendered in the projects grid.
    pub grid_limit: usize,
}

impl GithubConfig {
    pub fn listing_url(&self) -> String {
        format!(
            "{}/users/{}/repos?per_page={}&sort=updated&direction=desc",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(&self.account),
            self.page_size
        )
    }

    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.account)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    pub base_url: String,
    pub namespace: String,
    pub key: String,
}

impl CounterConfig {
    pub fn hit_url(&self) -> String {
        format!(
            "{}/hit/{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.namespace),
            urlencoding::encode(&self.key)
        )
    }
}

/// EmailJS identifiers. All three are public by design of the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    pub splash_poll_interval: Duration,
    pub splash_ceiling: Duration,
    pub splash_min_visible: Duration,
    pub overlay_close_delay: Duration,
    pub role_rotation: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_poll_interval: Duration::from_millis(120),
            splash_ceiling: Duration::from_millis(3500),
            splash_min_visible: Duration::from_millis(700),
            overlay_close_delay: Duration::from_millis(220),
            role_rotation: Duration::from_millis(2200),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub theme: String,
    pub local_visits: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "theme".to_string(),
            local_visits: "gokul_portfolio_visits".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub github: GithubConfig,
    pub counter: CounterConfig,
    pub relay: RelayConfig,
    pub timing: TimingConfig,
    pub storage_keys: StorageKeys,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            github: GithubConfig {
                api_base: DEFAULT_GITHUB_API.to_string(),
                account: DEFAULT_GITHUB_USER.to_string(),
                page_size: REPOSITORY_PAGE_SIZE,
                token: None,
                refresh_interval: None,
                grid_limit: DEFAULT_GRID_LIMIT,
            },
            counter: CounterConfig {
                base_url: DEFAULT_COUNTER_BASE.to_string(),
                namespace: DEFAULT_COUNTER_NAMESPACE.to_string(),
                key: DEFAULT_COUNTER_KEY.to_string(),
            },
            relay: RelayConfig {
                endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
                service_id: DEFAULT_EMAILJS_SERVICE.to_string(),
                template_id: DEFAULT_EMAILJS_TEMPLATE.to_string(),
                public_key: DEFAULT_EMAILJS_PUBLIC_KEY.to_string(),
            },
            timing: TimingConfig::default(),
            storage_keys: StorageKeys::default(),
        }
    }
}

impl SiteConfig {
    /// Overrides baked in at compile time. The browser has no process
    /// environment, so this is what the wasm build uses.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let baked: [(&str, Option<&str>); 10] = [
            (GITHUB_USER_ENV, option_env!("PORTFOLIO_GITHUB_USER")),
            (GITHUB_TOKEN_ENV, option_env!("PORTFOLIO_GITHUB_TOKEN")),
            (GITHUB_API_ENV, option_env!("PORTFOLIO_GITHUB_API")),
            (REPO_REFRESH_ENV, option_env!("PORTFOLIO_REPO_REFRESH_SECS")),
            (GRID_LIMIT_ENV, option_env!("PORTFOLIO_PROJECT_GRID_LIMIT")),
            (COUNTER_BASE_ENV, option_env!("PORTFOLIO_COUNTER_BASE")),
            (COUNTER_NAMESPACE_ENV, option_env!("PORTFOLIO_COUNTER_NAMESPACE")),
            (EMAILJS_SERVICE_ENV, option_env!("PORTFOLIO_EMAILJS_SERVICE")),
            (EMAILJS_TEMPLATE_ENV, option_env!("PORTFOLIO_EMAILJS_TEMPLATE")),
            (EMAILJS_PUBLIC_KEY_ENV, option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY")),
        ];

        Self::from_pairs(
            baked
                .into_iter()
                .filter_map(|(key, value)| value.map(|value| (key, value))),
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_pairs(std::env::vars())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env_map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        let lookup = |key: &str| {
            env_map
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(account) = lookup(GITHUB_USER_ENV) {
            config.github.account = account.to_string();
        }
        config.github.token = lookup(GITHUB_TOKEN_ENV).map(str::to_string);
        if let Some(api) = lookup(GITHUB_API_ENV) {
            config.github.api_base = api.to_string();
        }
        if let Some(raw) = lookup(REPO_REFRESH_ENV) {
            let secs = parse_number::<u64>(raw, REPO_REFRESH_ENV)?;
            config.github.refresh_interval = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(raw) = lookup(GRID_LIMIT_ENV) {
            let limit = parse_number::<usize>(raw, GRID_LIMIT_ENV)?;
            config.github.grid_limit = limit.clamp(GRID_LIMIT_MIN, GRID_LIMIT_MAX);
        }

        if let Some(base) = lookup(COUNTER_BASE_ENV) {
            config.counter.base_url = base.to_string();
        }
        if let Some(namespace) = lookup(COUNTER_NAMESPACE_ENV) {
            config.counter.namespace = namespace.to_string();
        }

        if let Some(service) = lookup(EMAILJS_SERVICE_ENV) {
            config.relay.service_id = service.to_string();
        }
        if let Some(template) = lookup(EMAILJS_TEMPLATE_ENV) {
            config.relay.template_id = template.to_string();
        }
        if let Some(key) = lookup(EMAILJS_PUBLIC_KEY_ENV) {
            config.relay.public_key = key.to_string();
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, field: &'static str) -> Result<T, ConfigError> {
    raw.parse::<T>().map_err(|_| ConfigError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}
