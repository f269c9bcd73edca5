//! Concrete service bundle handed to the component tree through context.

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::shared::services::email_relay::EmailRelay;
use crate::shared::services::github::RepositoryLoader;
use crate::shared::services::preferences::PreferenceStore;
use crate::shared::services::visitor_counter::VisitorCounter;

#[cfg(target_arch = "wasm32")]
pub type PlatformHttp = crate::shared::services::http::FetchTransport;
#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = crate::shared::services::storage::BrowserStorage;
#[cfg(target_arch = "wasm32")]
pub type PlatformClock = crate::shared::services::clock::BrowserClock;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformHttp = crate::shared::services::http::ReqwestTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = crate::shared::services::storage::FileStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformClock = crate::shared::services::clock::TokioClock;

#[derive(Clone)]
pub struct AppServices {
    pub config: Rc<SiteConfig>,
    pub http: PlatformHttp,
    pub storage: PlatformStorage,
    pub clock: PlatformClock,
}

impl AppServices {
    pub fn new(config: SiteConfig) -> Self {
        Self::with_storage(config, PlatformStorage::default())
    }

    pub fn with_storage(config: SiteConfig, storage: PlatformStorage) -> Self {
        Self {
            config: Rc::new(config),
            #[cfg(target_arch = "wasm32")]
            http: PlatformHttp::default(),
            #[cfg(not(target_arch = "wasm32"))]
            http: PlatformHttp::new(),
            storage,
            clock: PlatformClock::default(),
        }
    }

    pub fn repository_loader(&self) -> RepositoryLoader<PlatformHttp> {
        RepositoryLoader::new(self.http.clone(), self.config.github.clone())
    }

    pub fn visitor_counter(&self) -> VisitorCounter<PlatformHttp, PlatformStorage> {
        VisitorCounter::new(
            self.http.clone(),
            self.storage.clone(),
            self.config.counter.clone(),
            self.config.storage_keys.local_visits.clone(),
        )
    }

    pub fn email_relay(&self) -> EmailRelay<PlatformHttp> {
        EmailRelay::new(self.http.clone(), self.config.relay.clone())
    }

    pub fn preferences(&self) -> PreferenceStore<PlatformStorage> {
        PreferenceStore::new(self.storage.clone(), self.config.storage_keys.theme.clone())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::shared::hooks::Theme;
    use crate::shared::services::storage::FileStorage;

    #[test]
    fn test_theme_survives_relaunch() {
        let dir = std::env::temp_dir().join(format!("portfolio-site-relaunch-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("storage.json");

        let first = AppServices::with_storage(SiteConfig::default(), FileStorage::at(&path));
        first.preferences().save_theme(Theme::Light);

        let relaunched = AppServices::with_storage(SiteConfig::default(), FileStorage::at(&path));
        assert_eq!(relaunched.preferences().load_theme(), Theme::Light);
    }
}
