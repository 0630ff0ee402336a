//! Storage medium abstraction.
//!
//! The keyed store is written against [`StorageMedium`] so the backing
//! medium can be swapped: `FileMedium` persists each key as a file under the
//! data directory, `MemoryMedium` is the in-memory fake used in tests (with
//! a configurable byte budget for exercising quota behavior).
//!
//! Both media enforce an optional capacity: a write that would push total
//! usage past the budget fails with [`StoreError::QuotaExceeded`] and leaves
//! the previous value intact.

use crate::error::{StoreError, StoreResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A synchronous key-value medium with byte-budget accounting.
///
/// Keys are raw (already prefixed) strings; values are serialized text.
pub trait StorageMedium {
    /// Read the raw value for a key, `None` if absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a raw value, replacing any existing value atomically.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;

    /// Enumerate every key currently present.
    fn keys(&self) -> StoreResult<Vec<String>>;

    /// Total value bytes currently stored.
    fn used_bytes(&self) -> StoreResult<u64>;

    /// The byte budget, if one is enforced.
    fn capacity(&self) -> Option<u64>;
}

/// Check a prospective write against the budget.
///
/// `replaced` is the size of the value currently stored under the key, so
/// overwrites are charged only for their growth.
fn check_budget(
    key: &str,
    new_len: u64,
    used: u64,
    replaced: u64,
    capacity: Option<u64>,
) -> StoreResult<()> {
    if let Some(cap) = capacity {
        let prospective = used - replaced + new_len;
        if prospective > cap {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                attempted: new_len,
                capacity: cap,
            });
        }
    }
    Ok(())
}

/// In-memory medium for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: BTreeMap<String, String>,
    capacity: Option<u64>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a medium with a byte budget.
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: BTreeMap::new(),
            capacity: Some(capacity),
        }
    }

    /// Write a raw value bypassing the budget check.
    ///
    /// Test hook for planting corrupt or oversized values.
    pub fn plant_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl StorageMedium for MemoryMedium {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let replaced = self.entries.get(key).map_or(0, |v| v.len() as u64);
        check_budget(
            key,
            value.len() as u64,
            self.used_bytes()?,
            replaced,
            self.capacity,
        )?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn used_bytes(&self) -> StoreResult<u64> {
        Ok(self.entries.values().map(|v| v.len() as u64).sum())
    }

    fn capacity(&self) -> Option<u64> {
        self.capacity
    }
}

/// Durable medium storing one file per key under a directory.
///
/// Writes are synchronous: a value read after process restart is the last
/// value a successful `set` reported written.
#[derive(Debug)]
pub struct FileMedium {
    dir: PathBuf,
    capacity: Option<u64>,
}

impl FileMedium {
    /// Open (creating if needed) a medium rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>, capacity: Option<u64>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Medium(e.to_string()))?;
        Ok(Self { dir, capacity })
    }

    fn key_file(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageMedium for FileMedium {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.key_file(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Medium(e.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let file = self.key_file(key);
        let replaced = fs::metadata(&file).map(|m| m.len()).unwrap_or(0);
        check_budget(
            key,
            value.len() as u64,
            self.used_bytes()?,
            replaced,
            self.capacity,
        )?;

        // Write to a sibling temp file and rename so a crash mid-write never
        // leaves a half-serialized value under the live key.
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp, value).map_err(|e| StoreError::Medium(e.to_string()))?;
        fs::rename(&tmp, &file).map_err(|e| StoreError::Medium(e.to_string()))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.key_file(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Medium(e.to_string())),
        }
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let mut keys = Vec::new();
        let entries = fs::read_dir(&self.dir).map_err(|e| StoreError::Medium(e.to_string()))?;

        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Medium(e.to_string()))?;
            let path = entry.path();

            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(stem) = path.file_stem() {
                    keys.push(stem.to_string_lossy().into_owned());
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    fn used_bytes(&self) -> StoreResult<u64> {
        let mut total = 0;
        for key in self.keys()? {
            total += fs::metadata(self.key_file(&key)).map(|m| m.len()).unwrap_or(0);
        }
        Ok(total)
    }

    fn capacity(&self) -> Option<u64> {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_set_get_remove() {
        let mut m = MemoryMedium::new();
        m.set("a", "1").unwrap();
        assert_eq!(m.get("a").unwrap().as_deref(), Some("1"));
        m.remove("a").unwrap();
        assert_eq!(m.get("a").unwrap(), None);
        // removing again is fine
        m.remove("a").unwrap();
    }

    #[test]
    fn test_memory_quota_rejects_oversized_write() {
        let mut m = MemoryMedium::with_capacity(10);
        m.set("a", "12345").unwrap();
        let err = m.set("b", "123456789").unwrap_err();
        assert!(err.is_quota());
        // previous values untouched
        assert_eq!(m.get("a").unwrap().as_deref(), Some("12345"));
        assert_eq!(m.get("b").unwrap(), None);
    }

    #[test]
    fn test_memory_overwrite_charged_for_growth_only() {
        let mut m = MemoryMedium::with_capacity(10);
        m.set("a", "1234567890").unwrap();
        // same key, same size: replacement is free
        m.set("a", "0987654321").unwrap();
        assert!(m.set("a", "12345678901").unwrap_err().is_quota());
    }

    #[test]
    fn test_file_medium_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut m = FileMedium::open(dir.path(), None).unwrap();
        m.set("linksnap_history", "[]").unwrap();
        assert_eq!(m.get("linksnap_history").unwrap().as_deref(), Some("[]"));
        assert_eq!(m.keys().unwrap(), vec!["linksnap_history".to_string()]);

        // a second handle over the same directory sees the write
        let m2 = FileMedium::open(dir.path(), None).unwrap();
        assert_eq!(m2.get("linksnap_history").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_medium_quota() {
        let dir = tempfile::tempdir().unwrap();
        let mut m = FileMedium::open(dir.path(), Some(8)).unwrap();
        m.set("a", "1234").unwrap();
        assert!(m.set("b", "123456").unwrap_err().is_quota());
        assert_eq!(m.get("b").unwrap(), None);
    }
}
