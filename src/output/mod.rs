//! Output formatting for subnet data.
//!
//! This module handles formatting and outputting subnet data:
//! - [`render_index`] / [`render_descriptors`] - table, CSV and JSON views
//! - [`export_configuration`] - device configuration snippets
//! - [`format_field`] - terminal field helpers

mod device_config;
mod table;
mod terminal;

pub use device_config::{export_configuration, render_configuration};
pub use table::{csv_row, render_descriptors, render_index, render_records, table_row, OutputFormat};
pub use terminal::{format_cell, format_field, record_heading};
