//! Unused space left in the base network after allocation.
//!
//! Every stretch of the base range not covered by an assigned block is
//! split into the biggest CIDR blocks that are correctly aligned at their
//! start address.

use crate::models::{block_size, lo_mask, to_int, to_octets, AllocationPlan, Network};
use itertools::Itertools;

/// List the free blocks of `plan`, in address order.
///
/// Only addresses between the network and broadcast address of the base are
/// reported. The blocks together cover exactly
/// [`AllocationPlan::free_addresses`] addresses.
pub fn free_blocks(plan: &AllocationPlan) -> Vec<Network> {
    let base_lo = to_int(plan.base.network()) as u64;
    let base_end = base_lo + plan.total_addresses();

    let used = plan
        .subnets
        .iter()
        .map(|s| s.cidr())
        .map(|c| {
            let lo = to_int(c.network()) as u64;
            (lo, lo + c.size())
        })
        .sorted();

    let mut blocks = Vec::new();
    let mut next_ip = base_lo;
    for (lo, end) in used {
        fill_gap(&mut blocks, next_ip, lo.min(base_end));
        next_ip = next_ip.max(end);
    }
    fill_gap(&mut blocks, next_ip, base_end);

    log::debug!("free_blocks({}) -> {} block(s)", plan.base, blocks.len());
    blocks
}

/// Cover `[next_ip, end)` with aligned blocks.
fn fill_gap(blocks: &mut Vec<Network>, mut next_ip: u64, end: u64) {
    while next_ip < end {
        let next_mask = find_biggest_subnet(next_ip, end - next_ip);
        // next_ip < end <= 2^32
        let addr = to_octets(next_ip as u32);
        match Network::new(addr, next_mask) {
            Ok(block) => blocks.push(block),
            Err(e) => {
                log::error!("free_blocks() produced an invalid block at {addr}: {e}");
                return;
            }
        }
        next_ip += block_size(next_mask);
    }
}

/// Find the biggest block starting at `start_ip` that fits in `remaining`
/// addresses.
///
/// The returned mask is constrained by:
/// 1. The IP alignment - `start_ip` must be a valid network address for the mask
/// 2. The block must not hold more than `remaining` addresses
fn find_biggest_subnet(start_ip: u64, remaining: u64) -> u8 {
    assert!(remaining > 0, "remaining[{remaining}] == 0 should never happen.");

    let mut next_mask = lo_mask(to_octets(start_ip as u32));
    while block_size(next_mask) > remaining {
        next_mask += 1;
    }
    next_mask
}
