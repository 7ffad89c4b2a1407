//! Registry of addresses and their host requirements.
//!
//! This module handles storage of the records the views are built from:
//! - [`Registry`] - JSON file store with commit-or-rollback updates
//! - [`validate_address`] / [`validate_hosts`] - checks applied on insert

mod store;
mod validate;

// Re-export public types and functions
pub use store::Registry;
pub use validate::{check_for_duplicates, validate_address, validate_hosts};
