//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `linksnap add` - Archive an analyzed resource
//! - `linksnap list` - Browse and search the registry
//! - `linksnap delete <id>...` - Remove entries
//! - `linksnap recategorize <id> <category>` - Reassign a category
//! - `linksnap export` - Export the registry as a table
//! - `linksnap backup|restore` - Snapshot the whole store
//! - `linksnap purge` - Wipe everything and reset
//! - `linksnap model|key` - Analysis settings

mod add;
mod export;
mod registry;
mod settings;
mod snapshot;

pub use add::AddCommand;
pub use export::ExportCommand;
pub use registry::{DeleteCommand, ListCommand, RecategorizeCommand, StatsCommand};
pub use settings::{KeyCommand, ModelCommand};
pub use snapshot::{BackupCommand, PurgeCommand, RestoreCommand};

use crate::config::DEFAULT_CAPACITY;
use crate::error::CliResult;
use crate::storage::{
    self, ArchiveRepository, FileMedium, KeyedStore, StorageConfig, CONFIG_KEY,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// LinkSnap - a local-first visual bookmark registry.
///
/// Analyzed resources are archived in a quota-bounded local store with
/// search, category management, full-store backup/restore, and tabular
/// export.
#[derive(Parser, Debug)]
#[command(name = "linksnap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A local-first visual bookmark registry", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory for the keyed store (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Archive an analyzed resource
    #[command(alias = "a")]
    Add(AddCommand),

    /// Browse and search the registry
    #[command(alias = "ls")]
    List(ListCommand),

    /// Remove entries by ID
    #[command(alias = "rm")]
    Delete(DeleteCommand),

    /// Reassign an entry's category
    Recategorize(RecategorizeCommand),

    /// Export the registry as plain text, CSV, or JSON
    #[command(alias = "e")]
    Export(ExportCommand),

    /// Write a snapshot of the whole store
    Backup(BackupCommand),

    /// Restore a snapshot into the store
    Restore(RestoreCommand),

    /// Delete all data and reset first-run state
    Purge(PurgeCommand),

    /// Show storage usage
    Stats(StatsCommand),

    /// Select the analysis model
    Model(ModelCommand),

    /// Manage the analysis API credential
    Key(KeyCommand),
}

impl Cli {
    /// Dispatch to the selected subcommand.
    pub fn run(&self) -> CliResult<()> {
        let store_dir = self.store_dir.as_deref();
        match &self.command {
            Commands::Add(cmd) => cmd.execute(store_dir, self.quiet),
            Commands::List(cmd) => cmd.execute(store_dir, self.quiet),
            Commands::Delete(cmd) => cmd.execute(store_dir, self.quiet),
            Commands::Recategorize(cmd) => cmd.execute(store_dir, self.quiet),
            Commands::Export(cmd) => cmd.execute(store_dir, self.quiet),
            Commands::Backup(cmd) => cmd.execute(store_dir, self.quiet),
            Commands::Restore(cmd) => cmd.execute(store_dir, self.quiet),
            Commands::Purge(cmd) => cmd.execute(store_dir, self.quiet),
            Commands::Stats(cmd) => cmd.execute(store_dir, self.quiet),
            Commands::Model(cmd) => cmd.execute(store_dir, self.quiet),
            Commands::Key(cmd) => cmd.execute(store_dir, self.quiet),
        }
    }
}

/// Open the archive repository, honoring a store directory override.
pub(crate) fn open_archive(store_dir: Option<&Path>) -> CliResult<ArchiveRepository> {
    let store = match store_dir {
        Some(dir) => {
            let medium = FileMedium::open(dir, Some(DEFAULT_CAPACITY))?;
            KeyedStore::new(Box::new(medium))
        }
        None => KeyedStore::open_default()?,
    };

    let mut repo = ArchiveRepository::new(store);
    // first use of this store: write the version marker
    if repo.store().get::<StorageConfig>(CONFIG_KEY).is_none() {
        storage::initialize(repo.store_mut())?;
    }
    Ok(repo)
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
