//! Registry record data model.

use super::SubnetDescriptor;
use serde::{Deserialize, Serialize};

/// A registered address and the number of hosts it must hold.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Row id, assigned on insert.
    pub id: u64,
    /// Address as entered, unique within the registry.
    pub address: String,
    /// Number of hosts requested for this address.
    pub hosts_needed: u32,
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(id = {}, address = '{}', hosts = {})",
            self.id, self.address, self.hosts_needed
        )
    }
}

/// A record together with the descriptors derived from it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub record: Record,
    pub descriptors: Vec<SubnetDescriptor>,
}
