//! Local persistence layer.
//!
//! Layered as: archive repository → quota guard → keyed store → medium.
//! The backup codec reads and writes the same namespaced key space directly,
//! bypassing the repository's per-record API.
//!
//! Persisted key layout (all under the `linksnap_` prefix):
//! - `history`       ordered scan results, newest first
//! - `onboarded`     first-run marker
//! - `model_config`  selected analysis model
//! - `user_api_key`  optional user-supplied credential
//! - `config`        storage version marker

pub mod archive;
pub mod backup;
pub mod keyed_store;
pub mod medium;
pub mod quota_guard;

pub use archive::{ArchiveRepository, ArchiveStats};
pub use keyed_store::{KeyedStore, STORAGE_PREFIX};
pub use medium::{FileMedium, MemoryMedium, StorageMedium};
pub use quota_guard::{QuotaGuard, EVICTION_KEEP};

use crate::error::StoreResult;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Logical key for the archive list.
pub const HISTORY_KEY: &str = "history";
/// Logical key for the onboarding marker.
pub const ONBOARDED_KEY: &str = "onboarded";
/// Logical key for the model selection.
pub const MODEL_CONFIG_KEY: &str = "model_config";
/// Logical key for the stored user credential.
pub const USER_API_KEY: &str = "user_api_key";
/// Logical key for the storage version marker.
pub const CONFIG_KEY: &str = "config";

/// Current schema generation.
pub const STORAGE_VERSION: u32 = 1;

/// Process-wide storage marker written at initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    pub version: u32,
    pub last_updated: i64,
}

/// The selected analysis model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: String,
}

/// A user-supplied analysis credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredApiKey {
    pub key: String,
    pub timestamp: i64,
}

/// Write the storage version marker, logging a schema-generation change.
///
/// No migration logic branches on the version today; records evolve by
/// appending optional fields, so older documents parse as-is. The marker
/// exists to make a future breaking generation detectable.
pub fn initialize(store: &mut KeyedStore) -> StoreResult<()> {
    if let Some(existing) = store.get::<StorageConfig>(CONFIG_KEY) {
        if existing.version != STORAGE_VERSION {
            info!(
                from = existing.version,
                to = STORAGE_VERSION,
                "storage schema generation changed"
            );
        }
    }

    let config = StorageConfig {
        version: STORAGE_VERSION,
        last_updated: Utc::now().timestamp_millis(),
    };
    store.set(CONFIG_KEY, &config)?;
    debug!(version = STORAGE_VERSION, "storage initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_writes_version_marker() {
        let mut store = KeyedStore::new(Box::new(MemoryMedium::new()));
        initialize(&mut store).unwrap();

        let config: StorageConfig = store.get(CONFIG_KEY).unwrap();
        assert_eq!(config.version, STORAGE_VERSION);
        assert!(config.last_updated > 0);
    }

    #[test]
    fn test_initialize_tolerates_corrupt_marker() {
        let mut medium = MemoryMedium::new();
        medium.plant_raw("linksnap_config", "]]]");
        let mut store = KeyedStore::new(Box::new(medium));

        initialize(&mut store).unwrap();
        let config: StorageConfig = store.get(CONFIG_KEY).unwrap();
        assert_eq!(config.version, STORAGE_VERSION);
    }

    #[test]
    fn test_config_marker_camel_case() {
        let config = StorageConfig {
            version: 1,
            last_updated: 5,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"lastUpdated\""));
    }
}
