//! Core type definitions.

mod entry_id;
mod scan_result;

pub use entry_id::{EntryId, EntryIdError};
pub use scan_result::{GroundingSource, ScanResult};
