//! Output formatting module.
//!
//! Renders archive entries as a plain table, CSV, or JSON. The export
//! projection carries date, url, category, and description; it is read-only
//! and never part of the persistence contract.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::to_json;
pub use plain::{format_entry_detail, format_table};

use console::style;

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}
