//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{}\"", value_str.replace('"', "\"\""));
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Format a value as a left-aligned table cell.
pub fn format_cell<T: ToString>(value: T, width: usize) -> String {
    format!("{:<width$}", value.to_string())
}

/// Heading line shown above each record's descriptors.
pub fn record_heading(address: &str, hosts_needed: u32, id: u64) -> String {
    format!(
        "{address} {hosts} {id}",
        address = address.bold(),
        hosts = format!("({hosts_needed} hosts)").cyan(),
        id = format!("[id {id}]").dimmed()
    )
}
