//! VLSM planning logic.
//!
//! This module contains the planning pipeline, leaf first:
//! - [`cidr`] - CIDR string parsing
//! - [`hosts`] - host requirement list parsing
//! - [`sizer`] - host count to prefix length
//! - [`allocator`] - largest-first block assignment
//! - [`usable`] - usable host range of a block
//! - [`gap_finder`] - unallocated space after a plan

mod allocator;
mod cidr;
mod gap_finder;
mod hosts;
mod sizer;
mod usable;

// Re-export public functions
pub use allocator::{allocate, plan};
pub use cidr::parse_network;
pub use gap_finder::free_blocks;
pub use hosts::parse_host_list;
pub use sizer::{required_prefix_length, RESERVED_ADDRESSES};
pub use usable::usable_range;
