//! JSON output formatting.

use crate::types::ScanResult;

/// Serialize entries as pretty-printed JSON.
pub fn to_json(entries: &[ScanResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
