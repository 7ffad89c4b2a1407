//! Input validation for registry records.

use crate::error::RegistryError;
use crate::models::Record;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Dotted quad with an optional `/n` prefix.
static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,3}\.){3}\d{1,3}(/\d{1,2})?$").expect("Invalid Regex")
    })
}

/// Check the shape of an address before it is stored.
///
/// Only the format is checked; octet ranges are left to the decomposer,
/// which skips records it cannot parse.
pub fn validate_address(address: &str) -> Result<(), RegistryError> {
    if get_address_regex().is_match(address) {
        Ok(())
    } else {
        Err(RegistryError::InvalidAddress(address.to_string()))
    }
}

/// A registered address must ask for at least one host.
pub fn validate_hosts(hosts_needed: u32) -> Result<(), RegistryError> {
    if hosts_needed == 0 {
        Err(RegistryError::InvalidHostCount(hosts_needed))
    } else {
        Ok(())
    }
}

/// Return an error if two records share an address.
pub fn check_for_duplicates(records: &[Record]) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();

    for record in records {
        if !seen.insert(record.address.as_str()) {
            return Err(RegistryError::Duplicate(record.address.clone()));
        }
    }
    Ok(())
}
