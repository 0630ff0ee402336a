//! Snapshot subcommands: backup, restore, purge.

use crate::error::CliResult;
use crate::output;
use crate::storage::{self, backup};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a snapshot of the whole store.
#[derive(Parser, Debug)]
pub struct BackupCommand {
    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,
}

impl BackupCommand {
    /// Execute the backup command.
    pub fn execute(&self, store_dir: Option<&Path>, quiet: bool) -> CliResult<()> {
        let repo = super::open_archive(store_dir)?;
        let snapshot = backup::backup(repo.store())?;

        if let Some(path) = &self.output_file {
            fs::write(path, &snapshot)?;
            if !quiet {
                output::print_success(&format!("Snapshot written to {}", path.display()));
            }
        } else {
            println!("{}", snapshot);
        }

        Ok(())
    }
}

/// Restore a snapshot into the store.
#[derive(Parser, Debug)]
pub struct RestoreCommand {
    /// Snapshot file to restore
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl RestoreCommand {
    /// Execute the restore command.
    pub fn execute(&self, store_dir: Option<&Path>, quiet: bool) -> CliResult<()> {
        let mut repo = super::open_archive(store_dir)?;
        let snapshot = fs::read_to_string(&self.file)?;

        let written = backup::restore(repo.store_mut(), &snapshot)?;

        if !quiet {
            output::print_success(&format!("Restored {} keys", written));
        }

        Ok(())
    }
}

/// Delete all data and reset first-run state.
#[derive(Parser, Debug)]
pub struct PurgeCommand {
    /// Skip confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl PurgeCommand {
    /// Execute the purge command.
    pub fn execute(&self, store_dir: Option<&Path>, quiet: bool) -> CliResult<()> {
        if !self.yes {
            println!("Permanently delete the whole registry and all settings? [y/N] ");
            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        }

        let mut repo = super::open_archive(store_dir)?;
        repo.store_mut().clear()?;
        storage::initialize(repo.store_mut())?;

        if !quiet {
            output::print_success("Registry purged");
        }

        Ok(())
    }
}
