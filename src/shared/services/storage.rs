//! Durable key-value storage: browser `localStorage` on wasm, a JSON file
//! on native.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::shared::errors::{AppError, Result};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| AppError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }
}

/// In-process store for tests. Clones share the map, which is how tests
/// simulate a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStorage {
    /// A store whose every call fails, like `localStorage` under a denied
    /// permission or a full quota.
    pub fn unavailable() -> Self {
        Self {
            entries: Rc::default(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(AppError::Storage("storage unavailable".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON file under the user's config directory. Native counterpart of
/// `localStorage`, so preferences survive a relaunch of the desktop app.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for FileStorage {
    fn default() -> Self {
        Self {
            path: dirs::config_dir()
                .map(|dir| dir.join(env!("CARGO_PKG_NAME")).join("storage.json")),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn path(&self) -> Result<&std::path::Path> {
        self.path
            .as_deref()
            .ok_or_else(|| AppError::Storage("no config directory".to_string()))
    }

    fn read_entries(&self) -> Result<HashMap<String, String>> {
        let path = self.path()?;
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(AppError::Storage(format!("{}: {}", path.display(), err))),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());

        let path = self.path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| AppError::Storage(format!("{}: {}", parent.display(), err)))?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&entries)?)
            .map_err(|err| AppError::Storage(format!("{}: {}", path.display(), err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStorage::default();
        store.set("theme", "light").unwrap();

        let reloaded = store.clone();
        assert_eq!(reloaded.get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(reloaded.get("missing").unwrap(), None);
    }

    #[test]
    fn test_unavailable_store_errors() {
        let store = MemoryStorage::unavailable();
        assert!(store.get("theme").is_err());
        assert!(store.set("theme", "dark").is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn scratch_file(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio-site-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("nested").join("storage.json")
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_storage_survives_new_instance() {
        let path = scratch_file("reopen");
        FileStorage::at(&path).set("theme", "light").unwrap();
        FileStorage::at(&path).set("visits", "3").unwrap();

        let reopened = FileStorage::at(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(reopened.get("visits").unwrap().as_deref(), Some("3"));
        assert_eq!(reopened.get("missing").unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_storage_missing_file_reads_empty() {
        let store = FileStorage::at(scratch_file("empty"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_storage_corrupt_file_is_error() {
        let path = scratch_file("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();
        assert!(FileStorage::at(&path).get("theme").is_err());
    }
}
