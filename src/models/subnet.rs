//! Allocation result data model.

use super::{format_mask, Network};
use serde::Serialize;
use std::net::Ipv4Addr;

/// First and last host addresses of a block.
///
/// Both endpoints are `None` when the block has no usable host (a /32).
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct UsableRange {
    pub first: Option<Ipv4Addr>,
    pub last: Option<Ipv4Addr>,
}

impl UsableRange {
    /// A range with no usable host.
    pub fn none() -> UsableRange {
        UsableRange {
            first: None,
            last: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }
}

impl std::fmt::Display for UsableRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.first, self.last) {
            (Some(first), Some(last)) => write!(f, "{first} - {last}"),
            _ => write!(f, "none"),
        }
    }
}

/// One block of an allocation plan.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AllocatedSubnet {
    /// Position of the requirement in the caller's host list.
    pub index: usize,
    /// Number of hosts that were requested.
    pub hosts: u64,
    /// The assigned block, anchored at the allocation cursor.
    pub network: Network,
}

impl AllocatedSubnet {
    /// The assigned block by its network address. Every reported field
    /// derives from this.
    pub fn cidr(&self) -> Network {
        self.network.masked()
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.cidr().broadcast()
    }

    pub fn usable_range(&self) -> UsableRange {
        crate::processing::usable_range(&self.cidr())
    }

    /// Dotted-quad subnet mask.
    pub fn mask(&self) -> String {
        format_mask(self.network.prefix())
    }

    /// Display label, numbered from 1.
    pub fn label(&self) -> String {
        format!("Subnet {} ({} hosts)", self.index + 1, self.hosts)
    }
}

/// All blocks assigned for one base network, in the caller's input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan {
    pub base: Network,
    pub subnets: Vec<AllocatedSubnet>,
}

impl AllocationPlan {
    /// Addresses covered by the base prefix.
    pub fn total_addresses(&self) -> u64 {
        self.base.size()
    }

    /// Addresses consumed by the assigned blocks.
    pub fn allocated_addresses(&self) -> u64 {
        self.subnets.iter().map(|s| s.network.size()).sum()
    }

    pub fn free_addresses(&self) -> u64 {
        self.total_addresses()
            .saturating_sub(self.allocated_addresses())
    }

    pub fn len(&self) -> usize {
        self.subnets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty()
    }
}
