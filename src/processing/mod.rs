//! Subnet decomposition logic.
//!
//! This module contains the computations behind every view:
//! - [`try_decompose`] / [`decompose`] - splitting a base network into subnet descriptors
//! - [`mask_length`] - prefix length lookup for single addresses

mod decompose;
mod mask;

// Re-export public functions
pub use decompose::{decompose, descriptors, try_decompose, unit_count};
pub use mask::{mask_length, unit_prefix};
