//! The archived record type.
//!
//! `ScanResult` is the unit the archive stores: one analyzed resource with
//! its model-assigned taxonomy and optional screenshot blob. Field names
//! serialize in camelCase so persisted documents keep the layout the web
//! client wrote; optional fields are skipped when absent so records written
//! by older schema generations round-trip byte-for-byte.

use crate::analysis::AnalysisResponse;
use crate::types::EntryId;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A provenance citation attached by the analysis step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// One archived, analyzed resource entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Unique identifier, assigned at creation, immutable.
    pub id: EntryId,
    /// Identified resource address. May be a bare domain.
    pub url: String,
    /// Primary taxonomy label. The only field mutated post-creation.
    pub category: String,
    /// Finer-grained label.
    pub sub_category: String,
    /// Alternative labels offered to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_categories: Option<Vec<String>>,
    /// Short human-readable summary.
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
    /// Embedded screenshot as a data-URL blob, image-sourced entries only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    /// Provenance citations from the analysis step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GroundingSource>>,
}

impl ScanResult {
    /// Build a record from a successful analysis response.
    ///
    /// Assigns the storage-owned fields: a fresh ID and the creation
    /// timestamp. The screenshot blob is attached when the entry was
    /// image-sourced.
    pub fn from_analysis(response: AnalysisResponse, image_data: Option<String>) -> Self {
        Self {
            id: EntryId::new(),
            url: response.url,
            category: response.category,
            sub_category: response.sub_category,
            suggested_categories: response.suggested_categories,
            description: response.description,
            pricing: response.pricing,
            platform: response.platform,
            timestamp: Utc::now().timestamp_millis(),
            image_data: image_data.or(response.image_data),
            sources: response.sources,
        }
    }

    /// Creation time as a UTC datetime, for display and export.
    pub fn created_at(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.timestamp)
            .single()
            .unwrap_or_else(Utc::now)
    }

    /// Case-insensitive match against url, description, and category.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.url.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.category.to_lowercase().contains(&q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScanResult {
        ScanResult {
            id: EntryId::new(),
            url: "figma.com".to_string(),
            category: "Design".to_string(),
            sub_category: "UI Tools".to_string(),
            suggested_categories: Some(vec!["Prototyping".to_string()]),
            description: "Collaborative interface design tool".to_string(),
            pricing: Some("Freemium".to_string()),
            platform: None,
            timestamp: 1_700_000_000_000,
            image_data: None,
            sources: None,
        }
    }

    #[test]
    fn test_camel_case_layout() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"subCategory\""));
        assert!(json.contains("\"suggestedCategories\""));
        // absent optionals are omitted entirely
        assert!(!json.contains("\"imageData\""));
        assert!(!json.contains("\"platform\""));
    }

    #[test]
    fn test_older_generation_record_parses() {
        // A record written before pricing/platform/sources existed.
        let json = r#"{
            "id": "7f2c9b6e-3f1a-4d0a-9a7e-1d2f3a4b5c6d",
            "url": "example.com",
            "category": "Dev",
            "subCategory": "CLI",
            "description": "a tool",
            "timestamp": 1700000000000
        }"#;
        let parsed: ScanResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.url, "example.com");
        assert!(parsed.pricing.is_none());
        assert!(parsed.sources.is_none());
    }

    #[test]
    fn test_matches_query() {
        let r = sample();
        assert!(r.matches_query("FIGMA"));
        assert!(r.matches_query("interface"));
        assert!(r.matches_query("design"));
        assert!(!r.matches_query("spreadsheet"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let r = sample();
        let json = serde_json::to_string(&r).unwrap();
        let parsed: ScanResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);
    }
}
