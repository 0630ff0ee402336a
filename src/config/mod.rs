//! Application paths and storage budget.
//!
//! Manages XDG-compliant paths for configuration and data.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Default byte budget for the durable store, mirroring the ~5MB origin
/// quota typical of browser local storage.
pub const DEFAULT_CAPACITY: u64 = 5_242_880;

/// Global paths singleton.
static PATHS: OnceLock<Paths> = OnceLock::new();

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/linksnap)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/linksnap)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Get the global paths instance.
    pub fn get() -> &'static Paths {
        PATHS.get_or_init(|| Self::new().expect("Failed to initialize paths"))
    }

    /// Initialize paths using XDG directories.
    fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "linksnap", "linksnap")
            .ok_or(ConfigError::DirectoryNotFound)?;

        let paths = Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        };

        // Ensure directories exist
        fs::create_dir_all(&paths.config_dir)?;
        fs::create_dir_all(&paths.data_dir)?;

        Ok(paths)
    }

    /// Directory holding the keyed store's files.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }
}
