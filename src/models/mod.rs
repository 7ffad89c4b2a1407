//! Domain models for the subnet decomposer.
//!
//! This module contains the core data structures used throughout the application:
//! - [`NetworkSpec`] - IPv4 network with CIDR notation support
//! - [`SubnetDescriptor`] - one unit of a decomposed network
//! - [`Record`] / [`RecordView`] - a registered address, its host count and its descriptors

mod descriptor;
mod ipv4;
mod record;

// Re-export public types
pub use descriptor::SubnetDescriptor;
pub use ipv4::{
    addr_to_int, broadcast_addr, cut_addr, get_cidr_mask, int_to_addr, netmask_to_prefix,
    num_addresses, offset_addr, NetworkSpec, MAX_LENGTH,
};
pub use record::{Record, RecordView};
