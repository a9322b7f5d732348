//! Durable key/value storage for the theme preference.
//!
//! The browser build persists to `localStorage` (see the `web` module). Native
//! hosts and tests use [`MemoryStore`] or the JSON-backed [`FileStore`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// A string key/value store that survives page reloads.
///
/// Methods take `&self` because the browser's `Storage` object is shared and
/// the controller calls into it from event callbacks.
pub trait PreferenceStore {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a single pre-populated entry.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use super::PreferenceStore;
    use crate::error::StorageError;

    /// Directory name used under the user's config directory.
    const APP_DIR: &str = "theme-toggle";

    /// Default preference file name.
    const FILE_NAME: &str = "preferences.json";

    /// Preference store backed by a JSON object file.
    ///
    /// Every read loads the file and every write rewrites it, so two stores on
    /// the same path always observe each other's writes.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        /// Create a store that reads and writes `path`.
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Get the default preference file path.
        /// Returns None if neither a config nor a home directory can be found.
        pub fn default_path() -> Option<PathBuf> {
            // Try to use XDG config directory, fall back to home directory
            if let Some(config_dir) = dirs::config_dir() {
                Some(config_dir.join(APP_DIR).join(FILE_NAME))
            } else {
                dirs::home_dir().map(|home_dir| {
                    home_dir.join(".config").join(APP_DIR).join(FILE_NAME)
                })
            }
        }

        /// Open the store at the default path.
        pub fn open_default() -> Result<Self, StorageError> {
            Self::default_path().map(Self::new).ok_or_else(|| {
                StorageError::Unavailable("Could not determine config directory".to_string())
            })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
            if !self.path.exists() {
                log::debug!("No preference file at {:?}", self.path);
                return Ok(BTreeMap::new());
            }
            let json = std::fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&json)?)
        }
    }

    impl PreferenceStore for FileStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.load()?.remove(key))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut items = self.load()?;
            items.insert(key.to_string(), value.to_string());

            // Create parent directories if needed
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let json = serde_json::to_string_pretty(&items)?;
            std::fs::write(&self.path, json)?;
            log::debug!("Saved preference {:?} to {:?}", key, self.path);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get_item("theme").unwrap(), None);
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::with_item("theme", "dark");
        store.set_item("theme", "light").unwrap();
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_by_reference() {
        let store = MemoryStore::new();
        let borrowed: &MemoryStore = &store;
        borrowed.set_item("theme", "light").unwrap();
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("light"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod file_store {
        use super::super::*;

        #[test]
        fn test_default_path_layout() {
            // Headless CI may have no home directory at all.
            if let Some(path) = FileStore::default_path() {
                assert!(path.ends_with("theme-toggle/preferences.json"));
                assert_eq!(FileStore::open_default().unwrap().path(), path.as_path());
            }
        }

        #[test]
        fn test_missing_file_reads_as_empty() {
            let dir = tempfile::tempdir().unwrap();
            let store = FileStore::new(dir.path().join("prefs.json"));
            assert_eq!(store.get_item("theme").unwrap(), None);
        }

        #[test]
        fn test_persists_across_instances() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested").join("prefs.json");

            FileStore::new(&path).set_item("theme", "light").unwrap();

            let reopened = FileStore::new(&path);
            assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("light"));
        }

        #[test]
        fn test_keeps_unrelated_keys() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("prefs.json");
            std::fs::write(&path, r#"{ "font": "serif" }"#).unwrap();

            let store = FileStore::new(&path);
            store.set_item("theme", "dark").unwrap();

            assert_eq!(store.get_item("font").unwrap().as_deref(), Some("serif"));
            assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));
        }

        #[test]
        fn test_corrupt_file_is_an_error() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("prefs.json");
            std::fs::write(&path, "not json").unwrap();

            let err = FileStore::new(&path).get_item("theme").unwrap_err();
            assert!(matches!(err, StorageError::Json(_)));
        }
    }
}
