//! Registry browsing and mutation subcommands.
//!
//! `linksnap list`, `linksnap delete`, `linksnap recategorize`, and
//! `linksnap stats`.

use crate::error::{CliError, CliResult};
use crate::output;
use clap::Parser;
use std::collections::HashSet;
use std::path::Path;

/// Browse and search the registry.
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Case-insensitive search over url, description, and category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter to one category label
    #[arg(short, long)]
    pub category: Option<String>,

    /// Show every field of each entry
    #[arg(short, long)]
    pub detailed: bool,

    /// Limit the number of entries shown
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// List the distinct category labels instead of entries
    #[arg(long)]
    pub categories: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(&self, store_dir: Option<&Path>, quiet: bool) -> CliResult<()> {
        let repo = super::open_archive(store_dir)?;

        if self.categories {
            for label in repo.categories() {
                println!("{}", label);
            }
            return Ok(());
        }

        let mut entries = repo.search(self.search.as_deref(), self.category.as_deref());
        if let Some(limit) = self.limit {
            entries.truncate(limit);
        }

        if self.detailed {
            for entry in &entries {
                println!("{}", output::format_entry_detail(entry));
            }
        } else {
            print!("{}", output::format_table(&entries));
        }

        if !quiet {
            println!("\n  {} registered", entries.len());
        }

        Ok(())
    }
}

/// Remove entries by ID.
#[derive(Parser, Debug)]
pub struct DeleteCommand {
    /// Entry IDs or unique short-ID prefixes
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    /// Skip confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(&self, store_dir: Option<&Path>, quiet: bool) -> CliResult<()> {
        let mut repo = super::open_archive(store_dir)?;

        let mut targets = HashSet::new();
        for raw in &self.ids {
            let entry = repo
                .find(raw)
                .ok_or_else(|| CliError::Other(format!("no entry matching '{}'", raw)))?;
            targets.insert(entry.id);
        }

        if targets.len() > 1 && !self.yes {
            println!("Permanently remove {} entries? [y/N] ", targets.len());
            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        }

        let removed = repo.bulk_delete(&targets)?;

        if !quiet {
            output::print_success(&format!("Removed {} entries", removed));
        }

        Ok(())
    }
}

/// Reassign an entry's category.
#[derive(Parser, Debug)]
pub struct RecategorizeCommand {
    /// Entry ID or unique short-ID prefix
    #[arg(value_name = "ID")]
    pub id: String,

    /// New category label
    #[arg(value_name = "CATEGORY")]
    pub category: String,
}

impl RecategorizeCommand {
    /// Execute the recategorize command.
    pub fn execute(&self, store_dir: Option<&Path>, quiet: bool) -> CliResult<()> {
        let mut repo = super::open_archive(store_dir)?;

        let entry = repo
            .find(&self.id)
            .ok_or_else(|| CliError::Other(format!("no entry matching '{}'", self.id)))?;

        repo.update_category(&entry.id, &self.category)?;

        if !quiet {
            output::print_success(&format!(
                "{} recategorized: {} → {}",
                entry.url, entry.category, self.category
            ));
        }

        Ok(())
    }
}

/// Show storage usage.
#[derive(Parser, Debug)]
pub struct StatsCommand {}

impl StatsCommand {
    /// Execute the stats command.
    pub fn execute(&self, store_dir: Option<&Path>, _quiet: bool) -> CliResult<()> {
        let repo = super::open_archive(store_dir)?;
        let stats = repo.stats()?;

        println!("Entries:   {}", stats.entries);
        println!("Used:      {} bytes", stats.used_bytes);
        match (stats.capacity, stats.percentage()) {
            (Some(cap), Some(pct)) => {
                println!("Budget:    {} bytes ({:.1}% used)", cap, pct);
            }
            _ => println!("Budget:    unlimited"),
        }

        Ok(())
    }
}
