//! Export subcommand implementation.
//!
//! Handles `linksnap export`: a read-only tabular projection of the
//! (optionally filtered) registry, to stdout or a file.

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Export the registry.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,

    /// Case-insensitive search filter
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category filter
    #[arg(short, long)]
    pub category: Option<String>,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(&self, store_dir: Option<&Path>, quiet: bool) -> CliResult<()> {
        let repo = super::open_archive(store_dir)?;
        let entries = repo.search(self.search.as_deref(), self.category.as_deref());

        let content = match self.format {
            OutputFormat::Json => output::to_json(&entries)?,
            OutputFormat::Csv => {
                let mut buf = Vec::new();
                output::write_csv(&mut buf, &entries)?;
                String::from_utf8(buf).map_err(|e| CliError::Other(e.to_string()))?
            }
            OutputFormat::Plain => output::format_table(&entries),
        };

        if let Some(path) = &self.output_file {
            fs::write(path, &content)?;

            if !quiet {
                output::print_success(&format!(
                    "Exported {} entries to {}",
                    entries.len(),
                    path.display()
                ));
            }
        } else {
            print!("{}", content);
        }

        Ok(())
    }
}
