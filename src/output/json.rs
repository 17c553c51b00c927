//! JSON output of an allocation plan.

use crate::error::{Result, VlsmError};
use crate::models::{AllocatedSubnet, AllocationPlan, Network};
use crate::processing::free_blocks;
use serde::Serialize;
use std::net::Ipv4Addr;

#[derive(Serialize, Debug)]
struct SubnetRecord {
    index: usize,
    hosts: u64,
    network: Network,
    broadcast: Ipv4Addr,
    first_usable: Option<Ipv4Addr>,
    last_usable: Option<Ipv4Addr>,
    mask: String,
}

impl From<&AllocatedSubnet> for SubnetRecord {
    fn from(subnet: &AllocatedSubnet) -> Self {
        let usable = subnet.usable_range();
        SubnetRecord {
            index: subnet.index,
            hosts: subnet.hosts,
            network: subnet.cidr(),
            broadcast: subnet.broadcast(),
            first_usable: usable.first,
            last_usable: usable.last,
            mask: subnet.mask(),
        }
    }
}

#[derive(Serialize, Debug)]
struct PlanRecord {
    base: Network,
    total_addresses: u64,
    allocated_addresses: u64,
    free_addresses: u64,
    subnets: Vec<SubnetRecord>,
    free_blocks: Vec<Network>,
}

/// Render the plan as pretty printed JSON.
pub fn render_json(plan: &AllocationPlan) -> Result<String> {
    let record = PlanRecord {
        base: plan.base,
        total_addresses: plan.total_addresses(),
        allocated_addresses: plan.allocated_addresses(),
        free_addresses: plan.free_addresses(),
        subnets: plan.subnets.iter().map(SubnetRecord::from).collect(),
        free_blocks: free_blocks(plan),
    };
    serde_json::to_string_pretty(&record).map_err(|e| VlsmError::Render(e.to_string()))
}
