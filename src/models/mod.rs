//! Domain models for VLSM planning.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Network`] - IPv4 address with prefix length, plus the address codec
//! - [`AllocatedSubnet`] and [`AllocationPlan`] - allocation results
//! - [`UsableRange`] - first/last host of a block

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    block_size, broadcast_address, format_mask, lo_mask, network_address, subnet_mask, to_int,
    to_octets, Network, ADDRESS_SPACE, MAX_LENGTH,
};
pub use subnet::{AllocatedSubnet, AllocationPlan, UsableRange};
