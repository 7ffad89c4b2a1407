//! Register IPv4 networks with a host count and decompose them into subnets.
//!
//! The decomposition itself lives in [`processing`]; [`registry`] stores the
//! records it is fed from and [`output`] renders the results.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod registry;

use models::{Record, RecordView, SubnetDescriptor};
use processing::try_decompose;
use registry::Registry;
use std::error::Error;

/// Build the index view: every record decomposed, in id order.
///
/// Records that cannot be decomposed (malformed address or more units than
/// `max_units`) are logged and shown with no descriptors.
pub fn index_view(
    registry: &Registry,
    max_units: Option<u64>,
) -> Result<Vec<RecordView>, Box<dyn Error>> {
    let records = registry.fetch_all()?;
    log::info!("#Start index_view() records={}", records.len());

    let views: Vec<RecordView> = records
        .into_iter()
        .map(|record| {
            let descriptors = try_decompose(&record.address, record.hosts_needed, max_units)
                .unwrap_or_else(|e| {
                    log::warn!("Skipping {record}: {e}");
                    Vec::new()
                });
            RecordView {
                record,
                descriptors,
            }
        })
        .collect();

    log::info!(
        "# Got descriptor count = {}",
        views.iter().map(|v| v.descriptors.len()).sum::<usize>()
    );
    Ok(views)
}

/// Descriptors of every view, concatenated in order.
pub fn concatenated(views: &[RecordView]) -> Vec<SubnetDescriptor> {
    views
        .iter()
        .flat_map(|v| v.descriptors.iter().copied())
        .collect()
}

/// Write every record to the log and return them.
pub fn dump_registry(registry: &Registry) -> Result<Vec<Record>, Box<dyn Error>> {
    let records = registry.fetch_all()?;
    log::info!("Registry: {}", registry.path().display());
    for record in &records {
        log::info!("{record}");
    }
    Ok(records)
}
