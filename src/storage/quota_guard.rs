//! Eviction-and-retry wrapper around store writes.
//!
//! The archive list is the only growable key, so quota exhaustion is handled
//! with one policy: drop the oldest archive entries past a fixed cap and
//! retry the failed write exactly once. "Oldest" follows the existing
//! newest-first ordering, not a timestamp re-sort. A second quota failure,
//! or any non-quota failure, is returned to the caller untouched; there is
//! no retry loop.
//!
//! Archive writes truncate the list being written; writes to any other key
//! truncate the stored archive to free space, then retry the original value.

use crate::error::{StoreError, StoreResult};
use crate::storage::keyed_store::KeyedStore;
use crate::storage::HISTORY_KEY;
use crate::types::ScanResult;
use serde::Serialize;
use tracing::warn;

/// Entries retained when quota pressure forces an eviction.
pub const EVICTION_KEEP: usize = 50;

/// Write guard applying the eviction policy.
pub struct QuotaGuard<'a> {
    store: &'a mut KeyedStore,
}

impl<'a> QuotaGuard<'a> {
    pub fn new(store: &'a mut KeyedStore) -> Self {
        Self { store }
    }

    /// Write a non-archive value, evicting stored archive entries and
    /// retrying once on quota exhaustion.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        match self.store.set(key, value) {
            Ok(()) => Ok(()),
            Err(e) if e.is_quota() => {
                warn!(key, "quota exceeded, evicting oldest archive entries and retrying");
                self.evict_stored();
                self.store.set(key, value)
            }
            Err(e) => Err(e),
        }
    }

    /// Persist the archive list, truncating it to [`EVICTION_KEEP`] entries
    /// and retrying once if the full list does not fit.
    pub fn set_archive(&mut self, entries: &[ScanResult]) -> StoreResult<()> {
        match self.store.set(HISTORY_KEY, &entries) {
            Ok(()) => Ok(()),
            Err(e) if e.is_quota() => {
                if entries.len() <= EVICTION_KEEP {
                    return Err(e);
                }
                let dropped = entries.len() - EVICTION_KEEP;
                warn!(dropped, kept = EVICTION_KEEP, "quota exceeded, truncating archive and retrying");
                self.store.set(HISTORY_KEY, &&entries[..EVICTION_KEEP])
            }
            Err(e) => Err(e),
        }
    }

    /// Truncate the stored archive to its newest entries.
    ///
    /// Best effort: a truncation write that itself fails is logged and
    /// swallowed, since the retry of the original write reports the final
    /// outcome either way.
    fn evict_stored(&mut self) {
        let mut history: Vec<ScanResult> = self.store.get_or(HISTORY_KEY, Vec::new());

        if history.len() <= EVICTION_KEEP {
            return;
        }

        let dropped = history.len() - EVICTION_KEEP;
        history.truncate(EVICTION_KEEP);

        match self.store.set(HISTORY_KEY, &history) {
            Ok(()) => warn!(dropped, kept = EVICTION_KEEP, "evicted oldest archive entries"),
            Err(StoreError::QuotaExceeded { .. }) => {
                warn!("eviction write still over quota");
            }
            Err(e) => warn!(error = %e, "eviction write failed"),
        }
    }
}
