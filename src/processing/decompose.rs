//! Decomposition of a base network into per-address subnet units.
//!
//! Every /32 inside the base network is treated as its own subnet. Each unit
//! yields the descriptors for its usable host list, truncated to the number
//! of hosts requested plus the network and broadcast addresses.

use super::mask::unit_prefix;
use crate::error::DecomposeError;
use crate::models::{addr_to_int, int_to_addr, offset_addr, NetworkSpec, SubnetDescriptor};
use std::net::Ipv4Addr;

/// Network and broadcast addresses reserved on top of the requested hosts.
const RESERVED_ADDRESSES: usize = 2;

/// Number of /32 units enumerated for a base network.
pub fn unit_count(base: &NetworkSpec) -> u64 {
    base.num_addresses()
}

/// Build the descriptors for a single /32 unit.
///
/// Address arithmetic wraps at `255.255.255.255`, so units at the top of
/// the address space still yield their descriptors.
fn unit_descriptors(unit: Ipv4Addr, hosts_needed: u32) -> Vec<SubnetDescriptor> {
    let unit_net = NetworkSpec::host(unit);
    let prefix = unit_prefix(unit);
    let broadcast_offset = addr_to_int(unit_net.hi()) - addr_to_int(unit_net.lo());
    let required = (hosts_needed as usize).saturating_add(RESERVED_ADDRESSES);

    unit_net
        .usable_hosts()
        .take(required)
        .enumerate()
        .map(|(i, addr)| SubnetDescriptor {
            index: i + 1,
            mask: prefix,
            network: unit_net.lo(),
            broadcast: offset_addr(addr, broadcast_offset),
            first: offset_addr(addr, 1),
            last: offset_addr(addr, hosts_needed),
            hosts: hosts_needed,
        })
        .collect()
}

/// Lazily produce the descriptors of `base`, one unit at a time.
///
/// Units are computed from their offset inside the network, so large
/// networks can be streamed without holding every descriptor in memory.
pub fn descriptors(
    base: &NetworkSpec,
    hosts_needed: u32,
) -> impl Iterator<Item = SubnetDescriptor> {
    let start = addr_to_int(base.lo()) as u64;
    (0..unit_count(base))
        .map(move |k| int_to_addr((start + k) as u32))
        .flat_map(move |unit| unit_descriptors(unit, hosts_needed))
}

/// Decompose `base` into subnet descriptors.
///
/// `limit` caps the number of /32 units enumerated; `None` means no cap.
///
/// # Examples
/// ```
/// use subnet_decomposer::processing::try_decompose;
/// let units = try_decompose("192.168.1.0/30", 1, None).unwrap();
/// assert_eq!(units.len(), 4);
/// assert_eq!(units[3].network.to_string(), "192.168.1.3");
/// ```
pub fn try_decompose(
    base: &str,
    hosts_needed: u32,
    limit: Option<u64>,
) -> Result<Vec<SubnetDescriptor>, DecomposeError> {
    let network = NetworkSpec::new(base).map_err(DecomposeError::InvalidNetwork)?;
    let units = unit_count(&network);
    if let Some(limit) = limit {
        if units > limit {
            return Err(DecomposeError::TooManyUnits { units, limit });
        }
    }
    log::debug!("decompose {network} hosts={hosts_needed} units={units}");

    Ok(descriptors(&network, hosts_needed).collect())
}

/// Decompose `base`, returning an empty list when it cannot be decomposed.
///
/// No cap is applied: a /8 enumerates over 16 million units.
pub fn decompose(base: &str, hosts_needed: u32) -> Vec<SubnetDescriptor> {
    try_decompose(base, hosts_needed, None).unwrap_or_else(|e| {
        log::warn!("Skipping decomposition of '{base}': {e}");
        Vec::new()
    })
}
