//! Remote analysis collaborator interface.
//!
//! The vision/language analysis step is an external black box: given an
//! image or URL it returns structured metadata or a structured error, and it
//! never touches the store. [`Analyzer`] is the seam; [`FileAnalyzer`] feeds
//! a completed backend response document into the pipeline, which is how the
//! CLI ingests analyses produced out of process.

pub mod models;

pub use models::{find_model, Model, ModelTier, AVAILABLE_MODELS, DEFAULT_MODEL};

use crate::error::AnalysisError;
use crate::types::GroundingSource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Input to an analysis call: an image blob or a URL, plus model selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Metadata returned by a successful analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub url: String,
    pub category: String,
    pub sub_category: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GroundingSource>>,
}

/// The analysis collaborator.
pub trait Analyzer {
    /// Analyze a resource. Failure never results in a partial archive entry.
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError>;
}

/// Reads a completed backend response document from disk.
///
/// The document is either a successful [`AnalysisResponse`] or the backend's
/// structured failure shape `{"error": "..."}`.
pub struct FileAnalyzer {
    path: PathBuf,
}

impl FileAnalyzer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Analyzer for FileAnalyzer {
    fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        let raw = fs::read_to_string(&self.path)?;
        parse_backend_response(&raw)
    }
}

/// Decode a backend response document, surfacing structured errors verbatim.
pub fn parse_backend_response(raw: &str) -> Result<AnalysisResponse, AnalysisError> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| AnalysisError::InvalidResponse(e.to_string()))?;

    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        return Err(AnalysisError::Backend(message.to_string()));
    }

    serde_json::from_value(value).map_err(|e| AnalysisError::InvalidResponse(e.to_string()))
}

/// Whether the identified URL is a generic host platform rather than the
/// featured content itself. Used to recommend a closer crop after capture.
pub fn is_generic_platform(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.contains("youtube.com") || lower.contains("instagram.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_successful_response() {
        let raw = r#"{
            "url": "replit.com",
            "category": "Development",
            "subCategory": "Cloud IDE",
            "description": "Browser-based collaborative IDE",
            "suggestedCategories": ["AI Coding"],
            "pricing": "Freemium"
        }"#;
        let response = parse_backend_response(raw).unwrap();
        assert_eq!(response.url, "replit.com");
        assert_eq!(response.sub_category, "Cloud IDE");
        assert_eq!(response.pricing.as_deref(), Some("Freemium"));
        assert!(response.sources.is_none());
    }

    #[test]
    fn test_backend_error_surfaced_verbatim() {
        let err = parse_backend_response(r#"{"error": "rate limited"}"#).unwrap_err();
        match err {
            AnalysisError::Backend(msg) => assert_eq!(msg, "rate limited"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_response_rejected() {
        assert!(matches!(
            parse_backend_response("{nope"),
            Err(AnalysisError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_backend_response(r#"{"url": "x.com"}"#),
            Err(AnalysisError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_generic_platform_detection() {
        assert!(is_generic_platform("https://YouTube.com/watch?v=abc"));
        assert!(is_generic_platform("instagram.com/someone"));
        assert!(!is_generic_platform("figma.com"));
    }
}
