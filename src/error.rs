//! Error types for address parsing, decomposition and the registry.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing or doing arithmetic on IPv4 addresses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    #[error("Invalid prefix length '{0}'")]
    InvalidPrefix(String),

    #[error("Invalid netmask '{0}'")]
    InvalidNetmask(String),

    #[error("Network length is too long: /{0}")]
    PrefixTooLong(u8),
}

/// Errors raised by the subnet decomposer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    #[error("Invalid base network: {0}")]
    InvalidNetwork(#[source] AddressError),

    #[error("Network holds {units} /32 units, more than the limit of {limit}")]
    TooManyUnits { units: u64, limit: u64 },
}

/// Errors raised by the registry store.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error on registry '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to parse registry '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to serialize registry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Address '{0}' is already registered")]
    Duplicate(String),

    #[error("Invalid address '{0}', expected a.b.c.d or a.b.c.d/n")]
    InvalidAddress(String),

    #[error("Invalid host count {0}, must be greater than 0")]
    InvalidHostCount(u32),
}
