//! Prefix length lookup for single addresses.

use crate::error::AddressError;
use crate::models::NetworkSpec;
use std::net::Ipv4Addr;

/// Prefix of the non-strict network built from a single address.
///
/// Always 32 for a lone address; kept as a lookup because both the
/// decomposer and the configuration export resolve the prefix this way.
pub fn unit_prefix(addr: Ipv4Addr) -> u8 {
    NetworkSpec::host(addr).prefix_len()
}

/// Resolve the prefix length of a bare dotted-quad address.
///
/// Anything other than a plain address (including `a.b.c.d/n`) is rejected,
/// which callers treat as "not found".
///
/// # Examples
/// ```
/// use subnet_decomposer::processing::mask_length;
/// assert_eq!(mask_length("10.0.0.1").unwrap(), 32);
/// assert!(mask_length("not-an-ip").is_err());
/// ```
pub fn mask_length(address: &str) -> Result<u8, AddressError> {
    let addr: Ipv4Addr = address
        .parse()
        .map_err(|_| AddressError::InvalidAddress(address.to_string()))?;
    Ok(unit_prefix(addr))
}
