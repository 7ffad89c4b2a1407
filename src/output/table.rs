//! Table, CSV and JSON rendering of descriptors and records.

use super::terminal::{format_cell, format_field, record_heading};
use crate::models::{Record, RecordView, SubnetDescriptor};
use colored::Colorize;
use itertools::Itertools;
use std::error::Error;

/// How descriptor lists are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

const COLUMNS: [(&str, usize); 7] = [
    ("index", 6),
    ("mask", 5),
    ("network", 16),
    ("broadcast", 16),
    ("first", 16),
    ("last", 16),
    ("hosts", 6),
];

const CSV_HEADER: &str =
    r#""address","index","mask","network","broadcast","first","last","hosts""#;

fn descriptor_values(d: &SubnetDescriptor) -> [String; 7] {
    [
        d.index.to_string(),
        d.mask_label(),
        d.network.to_string(),
        d.broadcast.to_string(),
        d.first.to_string(),
        d.last.to_string(),
        d.hosts.to_string(),
    ]
}

fn table_header() -> String {
    let header = COLUMNS
        .iter()
        .map(|(name, width)| format_cell(name, *width))
        .join(" ");
    header.trim_end().bold().to_string()
}

/// One aligned table row.
pub fn table_row(d: &SubnetDescriptor) -> String {
    descriptor_values(d)
        .iter()
        .zip(COLUMNS)
        .map(|(value, (_, width))| format_cell(value, width))
        .join(" ")
        .trim_end()
        .to_string()
}

/// One CSV row, prefixed with the address the descriptor came from.
pub fn csv_row(address: &str, d: &SubnetDescriptor) -> String {
    std::iter::once(format_field(address, 18))
        .chain(
            descriptor_values(d)
                .iter()
                .zip(COLUMNS)
                .map(|(value, (_, width))| format_field(value, width)),
        )
        .join(",")
}

/// Render the descriptors of a single base network.
pub fn render_descriptors(
    base: &str,
    descriptors: &[SubnetDescriptor],
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    let rendered = match format {
        OutputFormat::Table => std::iter::once(table_header())
            .chain(descriptors.iter().map(table_row))
            .join("\n"),
        OutputFormat::Csv => std::iter::once(CSV_HEADER.to_string())
            .chain(descriptors.iter().map(|d| csv_row(base, d)))
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(descriptors)?,
    };
    Ok(rendered)
}

/// Render the index view: every record followed by its descriptors.
pub fn render_index(views: &[RecordView], format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let rendered = match format {
        OutputFormat::Table => {
            let mut lines = Vec::new();
            for view in views {
                let record = &view.record;
                lines.push(record_heading(&record.address, record.hosts_needed, record.id));
                if view.descriptors.is_empty() {
                    lines.push(format!("  {}", "(no subnets)".dimmed()));
                    continue;
                }
                lines.push(table_header());
                lines.extend(view.descriptors.iter().map(table_row));
            }
            lines.join("\n")
        }
        OutputFormat::Csv => std::iter::once(CSV_HEADER.to_string())
            .chain(views.iter().flat_map(|view| {
                view.descriptors
                    .iter()
                    .map(|d| csv_row(&view.record.address, d))
            }))
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(views)?,
    };
    Ok(rendered)
}

/// Render the raw registry records.
pub fn render_records(records: &[Record]) -> String {
    let header = format!(
        "{} {} {}",
        format_cell("id", 6),
        format_cell("address", 20),
        "hosts"
    );
    std::iter::once(header.bold().to_string())
        .chain(records.iter().map(|r| {
            format!(
                "{} {} {}",
                format_cell(r.id, 6),
                format_cell(&r.address, 20),
                r.hosts_needed
            )
        }))
        .join("\n")
}
