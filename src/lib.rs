//! # LinkSnap - A Local-First Visual Bookmark Registry
//!
//! LinkSnap archives analyzed resources (tool name, category, pricing,
//! description, optional screenshot) in a namespaced, versioned, quota-aware
//! local store, with search, full-store backup/restore, and tabular export.
//!
//! ## Features
//!
//! - **Quota-Bounded Storage**: writes are guarded by an eviction-and-retry
//!   policy that drops the oldest archive entries under quota pressure
//! - **Corruption Tolerance**: corrupt or foreign stored values read as
//!   absent instead of failing
//! - **Backup/Restore**: the whole namespaced key space round-trips through
//!   a single portable JSON snapshot
//! - **Search and Categories**: case-insensitive search with category
//!   filters over the archive
//! - **Export**: plain text, CSV, and JSON projections of the registry
//!
//! ## Example Usage
//!
//! ```rust
//! use linksnap::storage::{ArchiveRepository, KeyedStore, MemoryMedium};
//! use linksnap::types::{EntryId, ScanResult};
//!
//! let store = KeyedStore::new(Box::new(MemoryMedium::new()));
//! let mut repo = ArchiveRepository::new(store);
//!
//! repo.insert(ScanResult {
//!     id: EntryId::new(),
//!     url: "figma.com".into(),
//!     category: "Design".into(),
//!     sub_category: "UI Tools".into(),
//!     suggested_categories: None,
//!     description: "Collaborative interface design".into(),
//!     pricing: None,
//!     platform: None,
//!     timestamp: 1_700_000_000_000,
//!     image_data: None,
//!     sources: None,
//! }).unwrap();
//!
//! assert_eq!(repo.list().len(), 1);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Core type definitions with newtype patterns for type safety
//! - [`storage`] - The persistence layer: keyed store, quota guard, archive
//!   repository, and backup codec
//! - [`analysis`] - The remote analysis collaborator interface
//! - [`config`] - Paths and storage budget
//! - [`error`] - Comprehensive error types
//! - [`output`] - Output formatting utilities
//! - [`cli`] - Subcommand definitions

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, RestoreError, StoreError};
pub use storage::{ArchiveRepository, KeyedStore, QuotaGuard};
pub use types::{EntryId, GroundingSource, ScanResult};
