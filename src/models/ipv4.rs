//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`NetworkSpec`] for representing an IPv4 network (address + prefix),
//! along with the integer arithmetic used to derive network, broadcast and
//! host addresses.

use crate::error::AddressError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Integer view of a dotted-quad address.
pub fn addr_to_int(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// Dotted-quad view of a 32-bit integer.
pub fn int_to_addr(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits)
}

/// Add an integer offset to an address, wrapping past `255.255.255.255`.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_decomposer::models::offset_addr;
/// assert_eq!(offset_addr(Ipv4Addr::new(10, 0, 0, 255), 1), Ipv4Addr::new(10, 0, 1, 0));
/// assert_eq!(offset_addr(Ipv4Addr::BROADCAST, 1), Ipv4Addr::UNSPECIFIED);
/// ```
pub fn offset_addr(addr: Ipv4Addr, offset: u32) -> Ipv4Addr {
    int_to_addr(addr_to_int(addr).wrapping_add(offset))
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_decomposer::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, AddressError> {
    if len > MAX_LENGTH {
        Err(AddressError::PrefixTooLong(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, AddressError> {
    let mask = get_cidr_mask(len)?;
    Ok(int_to_addr(addr_to_int(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, AddressError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = addr_to_int(addr) & mask;
    Ok(int_to_addr(network_bits | !mask))
}

/// Number of addresses covered by a prefix (`2^(32-len)`).
pub fn num_addresses(len: u8) -> Result<u64, AddressError> {
    if len > MAX_LENGTH {
        Err(AddressError::PrefixTooLong(len))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Resolve a dotted-quad mask to a prefix length.
///
/// Netmasks (`255.255.255.0`) are tried first, then host masks (`0.0.0.255`).
pub fn netmask_to_prefix(netmask: &str) -> Result<u8, AddressError> {
    let mask: Ipv4Addr = netmask
        .parse()
        .map_err(|_| AddressError::InvalidNetmask(netmask.to_string()))?;
    let bits = addr_to_int(mask);

    let as_netmask = bits.leading_ones() as u8;
    if get_cidr_mask(as_netmask)? == bits {
        return Ok(as_netmask);
    }
    let as_hostmask = (!bits).leading_ones() as u8;
    if get_cidr_mask(as_hostmask)? == !bits {
        return Ok(as_hostmask);
    }
    Err(AddressError::InvalidNetmask(netmask.to_string()))
}

fn parse_prefix(prefix: &str) -> Result<u8, AddressError> {
    if prefix.contains('.') {
        return netmask_to_prefix(prefix);
    }
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::InvalidPrefix(prefix.to_string()));
    }
    let len: u8 = prefix
        .parse()
        .map_err(|_| AddressError::InvalidPrefix(prefix.to_string()))?;
    if len > MAX_LENGTH {
        return Err(AddressError::PrefixTooLong(len));
    }
    Ok(len)
}

/// IPv4 network with CIDR notation support.
///
/// The address is always the network address: host bits are cleared on
/// construction.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub struct NetworkSpec {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl NetworkSpec {
    /// Parse a network, clearing any host bits (non-strict).
    ///
    /// Accepts `a.b.c.d` (host-only, /32), `a.b.c.d/n` and
    /// `a.b.c.d/m.m.m.m`.
    ///
    /// # Examples
    /// ```
    /// use subnet_decomposer::models::NetworkSpec;
    /// let net = NetworkSpec::new("192.168.1.77/24").unwrap();
    /// assert_eq!(net.to_string(), "192.168.1.0/24");
    /// ```
    pub fn new(addr_cidr: &str) -> Result<NetworkSpec, AddressError> {
        let (addr, mask) = match addr_cidr.split_once('/') {
            Some((addr, prefix)) => (addr, parse_prefix(prefix)?),
            None => (addr_cidr, MAX_LENGTH),
        };
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| AddressError::InvalidAddress(addr.to_string()))?;
        Self::from_parts(addr, mask)
    }

    /// Build a network from an address and prefix, clearing host bits.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<NetworkSpec, AddressError> {
        Ok(NetworkSpec {
            addr: cut_addr(addr, mask)?,
            mask,
        })
    }

    /// The single-address network around `addr`.
    pub fn host(addr: Ipv4Addr) -> NetworkSpec {
        NetworkSpec {
            addr,
            mask: MAX_LENGTH,
        }
    }

    /// Prefix length of this network.
    pub fn prefix_len(&self) -> u8 {
        self.mask
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        self.addr
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask).unwrap_or(Ipv4Addr::BROADCAST)
    }

    /// Number of addresses in the network.
    pub fn num_addresses(&self) -> u64 {
        num_addresses(self.mask).unwrap_or(1)
    }

    /// Addresses a host may be numbered with.
    ///
    /// Network and broadcast are excluded, except for /31 (both addresses)
    /// and /32 (the address itself).
    pub fn usable_hosts(&self) -> impl Iterator<Item = Ipv4Addr> {
        let lo = addr_to_int(self.lo());
        let hi = addr_to_int(self.hi());
        let (start, end) = if self.mask >= MAX_LENGTH - 1 {
            (lo, hi)
        } else {
            (lo + 1, hi - 1)
        };
        (start..=end).map(int_to_addr)
    }
}

impl FromStr for NetworkSpec {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkSpec::new(s)
    }
}

impl Serialize for NetworkSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NetworkSpec {
    fn deserialize<D>(deserializer: D) -> Result<NetworkSpec, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkSpec::new(&s).map_err(|e| de::Error::custom(format!("invalid network {s}: {e}")))
    }
}

impl std::fmt::Display for NetworkSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
