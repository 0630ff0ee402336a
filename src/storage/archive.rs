//! The versioned archive of scan results.
//!
//! Owns the `history` key: an insertion-ordered (newest first) list of
//! [`ScanResult`] records. Every mutation rewrites the whole collection as a
//! single guarded write, which bounds write granularity at the cost of
//! O(archive size) serialization per mutation; fine at the expected scale of
//! a few thousand records.

use crate::error::StoreResult;
use crate::storage::keyed_store::KeyedStore;
use crate::storage::quota_guard::QuotaGuard;
use crate::storage::{CONFIG_KEY, HISTORY_KEY, ONBOARDED_KEY};
use crate::types::{EntryId, ScanResult};
use std::collections::HashSet;
use tracing::debug;

/// Repository over the archived scan results.
pub struct ArchiveRepository {
    store: KeyedStore,
}

/// Usage statistics for the namespaced key space.
#[derive(Debug, Clone)]
pub struct ArchiveStats {
    /// Number of archived entries.
    pub entries: usize,
    /// Bytes used across all namespaced keys.
    pub used_bytes: u64,
    /// Byte budget, if the medium enforces one.
    pub capacity: Option<u64>,
}

impl ArchiveStats {
    /// Used share of the budget, when one exists.
    pub fn percentage(&self) -> Option<f64> {
        self.capacity
            .map(|cap| (self.used_bytes as f64 / cap as f64) * 100.0)
    }
}

impl ArchiveRepository {
    /// Build a repository over an existing store.
    pub fn new(store: KeyedStore) -> Self {
        Self { store }
    }

    /// Open the repository over the default durable store.
    pub fn open_default() -> StoreResult<Self> {
        Ok(Self::new(KeyedStore::open_default()?))
    }

    /// Access the underlying store (backup, settings keys).
    pub fn store(&self) -> &KeyedStore {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut KeyedStore {
        &mut self.store
    }

    /// The full archive, newest first. Absent or corrupt → empty.
    pub fn list(&self) -> Vec<ScanResult> {
        self.store.get_or(HISTORY_KEY, Vec::new())
    }

    /// Prepend a record and persist the whole updated list.
    pub fn insert(&mut self, record: ScanResult) -> StoreResult<()> {
        let mut entries = self.list();
        debug!(id = %record.id, url = %record.url, "archiving entry");
        entries.insert(0, record);
        self.persist(&entries)
    }

    /// Remove the record with the given ID. No-op if absent.
    pub fn delete(&mut self, id: &EntryId) -> StoreResult<()> {
        let mut entries = self.list();
        let before = entries.len();
        entries.retain(|e| e.id != *id);

        if entries.len() == before {
            return Ok(());
        }
        self.persist(&entries)
    }

    /// Remove every record whose ID is in the set, as one persisted write.
    ///
    /// Returns the number of records removed.
    pub fn bulk_delete(&mut self, ids: &HashSet<EntryId>) -> StoreResult<usize> {
        let mut entries = self.list();
        let before = entries.len();
        entries.retain(|e| !ids.contains(&e.id));
        let removed = before - entries.len();

        if removed == 0 {
            return Ok(0);
        }
        self.persist(&entries)?;
        Ok(removed)
    }

    /// Replace only the category of the matching record.
    ///
    /// Preserves every other field and the record's position in the list.
    /// Returns whether a record was found.
    pub fn update_category(&mut self, id: &EntryId, category: &str) -> StoreResult<bool> {
        let mut entries = self.list();
        let Some(entry) = entries.iter_mut().find(|e| e.id == *id) else {
            return Ok(false);
        };
        entry.category = category.to_string();

        self.persist(&entries)?;
        Ok(true)
    }

    /// Empty the archive and drop the first-run markers.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.store.remove(HISTORY_KEY)?;
        self.store.remove(ONBOARDED_KEY)?;
        self.store.remove(CONFIG_KEY)?;
        Ok(())
    }

    /// Sorted distinct category labels across the archive.
    pub fn categories(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .list()
            .into_iter()
            .map(|e| e.category)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        labels.sort();
        labels
    }

    /// Read-only filtered projection of the archive.
    ///
    /// `query` matches case-insensitively against url, description, and
    /// category; `category` is an exact label filter. Order is preserved.
    pub fn search(&self, query: Option<&str>, category: Option<&str>) -> Vec<ScanResult> {
        self.list()
            .into_iter()
            .filter(|e| query.map_or(true, |q| e.matches_query(q)))
            .filter(|e| category.map_or(true, |c| e.category == c))
            .collect()
    }

    /// Look up a single record by full ID or unique short-ID prefix.
    pub fn find(&self, id_or_prefix: &str) -> Option<ScanResult> {
        let entries = self.list();

        if let Ok(id) = id_or_prefix.parse::<EntryId>() {
            return entries.into_iter().find(|e| e.id == id);
        }

        let mut matches = entries
            .into_iter()
            .filter(|e| e.id.to_string().starts_with(id_or_prefix));
        let first = matches.next()?;
        // ambiguous prefixes match nothing
        if matches.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Storage usage statistics.
    pub fn stats(&self) -> StoreResult<ArchiveStats> {
        Ok(ArchiveStats {
            entries: self.list().len(),
            used_bytes: self.store.used_bytes()?,
            capacity: self.store.capacity(),
        })
    }

    fn persist(&mut self, entries: &[ScanResult]) -> StoreResult<()> {
        QuotaGuard::new(&mut self.store).set_archive(entries)
    }
}
