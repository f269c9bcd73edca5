use crate::shared::hooks::Theme;
use crate::shared::logging;
use crate::shared::services::storage::KeyValueStore;

/// Theme preference persisted in durable storage.
/// Storage failures are logged and otherwise ignored; the default is dark.
pub struct PreferenceStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn load_theme(&self) -> Theme {
        match self.storage.get(&self.key) {
            Ok(Some(saved)) => saved.parse().unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(err) => {
                logging::log_theme_storage_error("load", &err.to_string());
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) {
        match self.storage.set(&self.key, theme.as_str()) {
            Ok(()) => logging::log_theme_saved(theme.as_str()),
            Err(err) => logging::log_theme_storage_error("save", &err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::services::storage::MemoryStorage;

    #[test]
    fn test_defaults_to_dark() {
        let store = PreferenceStore::new(MemoryStorage::default(), "theme");
        assert_eq!(store.load_theme(), Theme::Dark);
    }

    #[test]
    fn test_light_survives_reload() {
        let storage = MemoryStorage::default();
        PreferenceStore::new(storage.clone(), "theme").save_theme(Theme::Light);

        let reloaded = PreferenceStore::new(storage, "theme");
        assert_eq!(reloaded.load_theme(), Theme::Light);
    }

    #[test]
    fn test_unrecognized_value_is_dark() {
        let storage = MemoryStorage::default();
        storage.set("theme", "sepia").unwrap();
        assert_eq!(PreferenceStore::new(storage, "theme").load_theme(), Theme::Dark);
    }

    #[test]
    fn test_unavailable_storage_is_swallowed() {
        let store = PreferenceStore::new(MemoryStorage::unavailable(), "theme");
        store.save_theme(Theme::Light);
        assert_eq!(store.load_theme(), Theme::Dark);
    }
}
