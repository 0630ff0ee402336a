//! Error types for LinkSnap.
//!
//! Uses `thiserror` for ergonomic error definitions. Each subsystem gets its
//! own error family; the CLI layer folds them into [`CliError`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the keyed store and its backing medium.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The medium refused a write because it would exceed the byte budget.
    #[error("storage quota exceeded writing '{key}' ({attempted} bytes against a {capacity} byte budget)")]
    QuotaExceeded {
        key: String,
        attempted: u64,
        capacity: u64,
    },

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage medium error: {0}")]
    Medium(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether this failure is specifically quota exhaustion.
    ///
    /// Only quota failures are eligible for eviction-and-retry; everything
    /// else propagates as a plain failure.
    pub fn is_quota(&self) -> bool {
        matches!(self, StoreError::QuotaExceeded { .. })
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while restoring a snapshot.
#[derive(Error, Debug)]
pub enum RestoreError {
    /// The snapshot is not a JSON object; nothing was written.
    #[error("invalid snapshot: {0}")]
    InvalidFormat(String),

    #[error("failed to restore key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: StoreError,
    },
}

/// Errors surfaced by the remote analysis collaborator.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The backend returned a structured `{error: ...}` document.
    #[error("analysis backend error: {0}")]
    Backend(String),

    #[error("malformed analysis response: {0}")]
    InvalidResponse(String),

    #[error("no API credential configured")]
    MissingCredential,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from configuration and path resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine platform data directories")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error type for CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Restore(#[from] RestoreError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
