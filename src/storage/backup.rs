//! Full-namespace backup and restore.
//!
//! A snapshot is one JSON object mapping each prefixed key to its decoded
//! value, portable across installations that use the same prefix and key
//! names. Restore is additive and overwriting: entries in the snapshot
//! replace same-named keys unconditionally, keys missing from the snapshot
//! are left alone, and unknown keys are written as-is for forward
//! compatibility. A snapshot that fails to parse mutates nothing.

use crate::error::{RestoreError, StoreResult};
use crate::storage::keyed_store::KeyedStore;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Serialize the whole namespaced key space to a snapshot document.
///
/// Raw values that are not valid serialized data are embedded as JSON
/// strings rather than dropped, so even a partially corrupt store backs up
/// without loss.
pub fn backup(store: &KeyedStore) -> StoreResult<String> {
    let mut snapshot = Map::new();

    for key in store.keys()? {
        let Some(raw) = store.get_raw(&key)? else {
            continue;
        };

        let value = match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "unparseable value embedded verbatim in snapshot");
                Value::String(raw)
            }
        };
        snapshot.insert(key, value);
    }

    debug!(keys = snapshot.len(), "built snapshot");
    Ok(serde_json::to_string_pretty(&Value::Object(snapshot))?)
}

/// Restore a snapshot into the store.
///
/// Returns the number of keys written. String values that already parse as
/// serialized JSON are written raw; anything else is re-encoded, so both
/// shapes round-trip without double-encoding.
pub fn restore(store: &mut KeyedStore, snapshot: &str) -> Result<usize, RestoreError> {
    let parsed: Value = serde_json::from_str(snapshot)
        .map_err(|e| RestoreError::InvalidFormat(e.to_string()))?;

    let Value::Object(entries) = parsed else {
        return Err(RestoreError::InvalidFormat(
            "snapshot root must be a JSON object".to_string(),
        ));
    };

    let mut written = 0;
    for (key, value) in entries {
        let raw = match &value {
            Value::String(s) if serde_json::from_str::<Value>(s).is_ok() => s.clone(),
            other => serde_json::to_string(other)
                .map_err(|e| RestoreError::InvalidFormat(e.to_string()))?,
        };

        store
            .set_raw(&key, &raw)
            .map_err(|source| RestoreError::Write {
                key: key.clone(),
                source,
            })?;
        written += 1;
    }

    debug!(written, "restored snapshot");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::medium::MemoryMedium;
    use crate::storage::{HISTORY_KEY, MODEL_CONFIG_KEY, ONBOARDED_KEY};
    use crate::types::{EntryId, ScanResult};

    fn store() -> KeyedStore {
        KeyedStore::new(Box::new(MemoryMedium::new()))
    }

    fn entry(url: &str) -> ScanResult {
        ScanResult {
            id: EntryId::new(),
            url: url.to_string(),
            category: "Dev".to_string(),
            sub_category: "CLI".to_string(),
            suggested_categories: None,
            description: "a tool".to_string(),
            pricing: None,
            platform: None,
            timestamp: 1,
            image_data: None,
            sources: None,
        }
    }

    #[test]
    fn test_backup_restore_equivalence() {
        let mut store = store();
        store
            .set(HISTORY_KEY, &vec![entry("a.com"), entry("b.com")])
            .unwrap();
        store.set(ONBOARDED_KEY, &true).unwrap();
        store
            .set(MODEL_CONFIG_KEY, &serde_json::json!({"model": "gemini-2.5-flash"}))
            .unwrap();

        let snapshot = backup(&store).unwrap();

        let mut fresh = KeyedStore::new(Box::new(MemoryMedium::new()));
        let written = restore(&mut fresh, &snapshot).unwrap();
        assert_eq!(written, 3);

        let original: Vec<ScanResult> = store.get(HISTORY_KEY).unwrap();
        let restored: Vec<ScanResult> = fresh.get(HISTORY_KEY).unwrap();
        assert_eq!(restored, original);
        assert_eq!(fresh.get::<bool>(ONBOARDED_KEY), Some(true));
        assert_eq!(
            fresh.get::<serde_json::Value>(MODEL_CONFIG_KEY),
            store.get::<serde_json::Value>(MODEL_CONFIG_KEY)
        );
    }

    #[test]
    fn test_restore_is_additive_not_a_wipe() {
        let mut store = store();
        store
            .set(MODEL_CONFIG_KEY, &serde_json::json!({"model": "keep-me"}))
            .unwrap();

        // snapshot lacks model_config entirely
        let snapshot = r#"{"linksnap_onboarded": true}"#;
        restore(&mut store, snapshot).unwrap();

        assert_eq!(store.get::<bool>(ONBOARDED_KEY), Some(true));
        let config: serde_json::Value = store.get(MODEL_CONFIG_KEY).unwrap();
        assert_eq!(config["model"], "keep-me");
    }

    #[test]
    fn test_restore_overwrites_same_keys() {
        let mut store = store();
        store.set(ONBOARDED_KEY, &false).unwrap();
        restore(&mut store, r#"{"linksnap_onboarded": true}"#).unwrap();
        assert_eq!(store.get::<bool>(ONBOARDED_KEY), Some(true));
    }

    #[test]
    fn test_malformed_snapshot_mutates_nothing() {
        let mut store = store();
        store.set(ONBOARDED_KEY, &true).unwrap();

        assert!(restore(&mut store, "{truncated").is_err());
        assert!(restore(&mut store, "[1, 2, 3]").is_err());

        assert_eq!(store.get::<bool>(ONBOARDED_KEY), Some(true));
        assert_eq!(store.keys().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_keys_written_as_is() {
        let mut store = store();
        restore(
            &mut store,
            r#"{"linksnap_future_feature": {"enabled": true}}"#,
        )
        .unwrap();

        let raw = store.get_raw("linksnap_future_feature").unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["enabled"], true);
    }

    #[test]
    fn test_plain_string_values_not_double_encoded() {
        // a snapshot value that is a human string, not serialized JSON
        let mut store = store();
        restore(&mut store, r#"{"linksnap_note": "just a note"}"#).unwrap();
        assert_eq!(store.get::<String>("note").as_deref(), Some("just a note"));

        // and one that is itself serialized JSON gets written raw
        let mut store2 = KeyedStore::new(Box::new(MemoryMedium::new()));
        restore(&mut store2, r#"{"linksnap_flag": "true"}"#).unwrap();
        assert_eq!(store2.get_raw("linksnap_flag").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_corrupt_value_survives_backup() {
        let mut medium = MemoryMedium::new();
        medium.plant_raw("linksnap_history", "not valid json");
        let store = KeyedStore::new(Box::new(medium));

        let snapshot = backup(&store).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(parsed["linksnap_history"], "not valid json");
    }

    #[test]
    fn test_double_roundtrip_is_stable() {
        let mut store = store();
        store.set(HISTORY_KEY, &vec![entry("a.com")]).unwrap();
        store.set(ONBOARDED_KEY, &true).unwrap();

        let first = backup(&store).unwrap();
        let mut other = KeyedStore::new(Box::new(MemoryMedium::new()));
        restore(&mut other, &first).unwrap();
        let second = backup(&other).unwrap();

        let a: serde_json::Value = serde_json::from_str(&first).unwrap();
        let b: serde_json::Value = serde_json::from_str(&second).unwrap();
        assert_eq!(a, b);
    }
}
