//! Namespaced, serializing key-value store.
//!
//! Every key lives under the `linksnap_` prefix so the store can share a
//! medium with unrelated data and selectively wipe only its own keys.
//! Values are JSON text. Reads never fail past this boundary: a corrupt or
//! foreign value is logged and treated as absent.

use crate::config::Paths;
use crate::error::{StoreError, StoreResult};
use crate::storage::medium::{FileMedium, StorageMedium};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Namespace prefix shared by every key this store owns.
pub const STORAGE_PREFIX: &str = "linksnap_";

/// Single values larger than this get a warning; most browsers budget the
/// whole origin around 5-10MB and one oversized blob can starve the rest.
const VALUE_WARN_BYTES: usize = 5_000_000;

/// The namespaced keyed store.
pub struct KeyedStore {
    medium: Box<dyn StorageMedium>,
}

impl KeyedStore {
    /// Build a store over an injected medium.
    pub fn new(medium: Box<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// Open the durable store at the platform data directory.
    pub fn open_default() -> StoreResult<Self> {
        let paths = Paths::get();
        let medium = FileMedium::open(paths.store_dir(), Some(crate::config::DEFAULT_CAPACITY))?;
        Ok(Self::new(Box::new(medium)))
    }

    fn prefixed(key: &str) -> String {
        format!("{}{}", STORAGE_PREFIX, key)
    }

    /// Serialize and write a value under the namespaced key.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let serialized = serde_json::to_string(value)?;

        if serialized.len() > VALUE_WARN_BYTES {
            warn!(key, bytes = serialized.len(), "storing an unusually large value");
        }

        self.medium.set(&Self::prefixed(key), &serialized)?;
        debug!(key, bytes = serialized.len(), "stored value");
        Ok(())
    }

    /// Read and deserialize a value.
    ///
    /// Absent keys, medium failures, and corrupt values all come back as
    /// `None`; the latter two are logged. Callers that need to distinguish
    /// "absent" from "unreadable" go through [`KeyedStore::get_raw`].
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.medium.get(&Self::prefixed(key)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "medium read failed, treating key as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "corrupt stored value, treating key as absent");
                None
            }
        }
    }

    /// Read a value, falling back to `default` when absent or unreadable.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Remove a namespaced key. Removing an absent key succeeds.
    pub fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.medium.remove(&Self::prefixed(key))
    }

    /// Remove every key under the namespace prefix, leaving foreign keys in
    /// the same medium untouched.
    pub fn clear(&mut self) -> StoreResult<()> {
        for key in self.keys()? {
            self.medium.remove(&key)?;
        }
        Ok(())
    }

    /// Enumerate the (fully prefixed) keys this store owns.
    pub fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .medium
            .keys()?
            .into_iter()
            .filter(|k| k.starts_with(STORAGE_PREFIX))
            .collect())
    }

    /// Read the raw serialized text under an already-prefixed key.
    pub fn get_raw(&self, full_key: &str) -> StoreResult<Option<String>> {
        self.medium.get(full_key)
    }

    /// Write raw serialized text under an already-prefixed key.
    ///
    /// Restore path only: the value must already be valid serialized data.
    pub fn set_raw(&mut self, full_key: &str, raw: &str) -> StoreResult<()> {
        self.medium.set(full_key, raw)
    }

    /// Total bytes used by namespaced keys.
    pub fn used_bytes(&self) -> StoreResult<u64> {
        let mut total = 0;
        for key in self.keys()? {
            if let Some(raw) = self.medium.get(&key)? {
                total += raw.len() as u64;
            }
        }
        Ok(total)
    }

    /// The medium's byte budget, if one is enforced.
    pub fn capacity(&self) -> Option<u64> {
        self.medium.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::medium::MemoryMedium;

    fn memory_store() -> KeyedStore {
        KeyedStore::new(Box::new(MemoryMedium::new()))
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut store = memory_store();
        store.set("onboarded", &true).unwrap();
        assert_eq!(store.get::<bool>("onboarded"), Some(true));
    }

    #[test]
    fn test_absent_key_returns_default() {
        let store = memory_store();
        assert_eq!(store.get::<bool>("missing"), None);
        assert_eq!(store.get_or("missing", 7_u32), 7);
    }

    #[test]
    fn test_corrupt_value_returns_default() {
        let mut medium = MemoryMedium::new();
        medium.plant_raw("linksnap_onboarded", "not json{{");
        let store = KeyedStore::new(Box::new(medium));
        assert_eq!(store.get::<bool>("onboarded"), None);
        assert!(!store.get_or("onboarded", false));
    }

    #[test]
    fn test_foreign_typed_value_returns_default() {
        let mut medium = MemoryMedium::new();
        // valid JSON but the wrong shape for the requested type
        medium.plant_raw("linksnap_onboarded", "{\"nested\": []}");
        let store = KeyedStore::new(Box::new(medium));
        assert_eq!(store.get::<bool>("onboarded"), None);
    }

    #[test]
    fn test_clear_wipes_only_namespaced_keys() {
        let mut medium = MemoryMedium::new();
        medium.plant_raw("other_app_data", "\"keep me\"");
        let mut store = KeyedStore::new(Box::new(medium));
        store.set("onboarded", &true).unwrap();
        store.set("history", &Vec::<u8>::new()).unwrap();

        store.clear().unwrap();

        assert_eq!(store.get::<bool>("onboarded"), None);
        assert_eq!(
            store.get_raw("other_app_data").unwrap().as_deref(),
            Some("\"keep me\"")
        );
    }

    #[test]
    fn test_keys_are_prefixed() {
        let mut store = memory_store();
        store.set("history", &Vec::<u8>::new()).unwrap();
        assert_eq!(store.keys().unwrap(), vec!["linksnap_history".to_string()]);
    }

    #[test]
    fn test_remove_absent_key_ok() {
        let mut store = memory_store();
        store.remove("never_written").unwrap();
    }
}
