//! Largest-first VLSM allocation.
//!
//! Requirements are sized, ordered by block size (largest first, ties in
//! input order) and packed back to back from the base address with a
//! single cursor. Results are reported in the caller's input order.

use crate::error::{Result, VlsmError};
use crate::models::{block_size, to_int, AllocatedSubnet, AllocationPlan, Network};
use crate::processing::required_prefix_length;
use itertools::Itertools;
use std::cmp::Reverse;

/// A host requirement after sizing.
#[derive(Debug, Copy, Clone)]
struct SizedRequirement {
    index: usize,
    hosts: u64,
    prefix: u8,
}

impl SizedRequirement {
    fn size(&self) -> u64 {
        block_size(self.prefix)
    }
}

/// Assign every host requirement a block inside `base`.
///
/// Fails without a partial result if any requirement cannot be sized, if
/// the blocks together need more addresses than `base` holds, or if a block
/// taken at its network address would end past the base broadcast address
/// (possible only when the base address is not aligned to its prefix).
///
/// # Examples
/// ```
/// use vlsm_planner::processing::{allocate, parse_network};
/// let base = parse_network("192.168.1.0/24").unwrap();
/// let subnets = allocate(&base, &[50, 20, 10]).unwrap();
/// assert_eq!(subnets[1].network.to_string(), "192.168.1.64/27");
/// ```
pub fn allocate(base: &Network, hosts: &[u64]) -> Result<Vec<AllocatedSubnet>> {
    let sized = hosts
        .iter()
        .enumerate()
        .map(|(index, &hosts)| {
            required_prefix_length(hosts).map(|prefix| SizedRequirement {
                index,
                hosts,
                prefix,
            })
        })
        .collect::<Result<Vec<SizedRequirement>>>()?;

    // sorted_by_key is stable, equal sizes keep their input order
    let ordered = sized
        .into_iter()
        .sorted_by_key(|r| Reverse(r.size()))
        .collect::<Vec<SizedRequirement>>();

    let required = ordered
        .iter()
        .fold(0u64, |total, r| total.saturating_add(r.size()));
    let available = base.size();
    if required > available {
        log::warn!("{base}: {required} addresses required, only {available} available");
        return Err(VlsmError::InsufficientAddressSpace {
            required,
            available,
        });
    }

    // blocks are reported by their masked network address, so each masked
    // block must stay inside the base range even when the cursor is unaligned
    let base_end = to_int(base.network()) as u64 + available;

    let mut next_ip = to_int(base.addr()) as u64;
    let mut subnets = Vec::with_capacity(ordered.len());
    for r in ordered {
        let block_lo = next_ip & !(r.size() - 1);
        if block_lo + r.size() > base_end {
            log::warn!(
                "{base}: block /{} at {next_ip} ends past the base network",
                r.prefix
            );
            return Err(VlsmError::OutOfRange {
                start: base.addr(),
                required,
            });
        }
        // block_lo <= next_ip < block_lo + size <= base_end <= 2^32
        let network = Network::from_int(next_ip as u32, r.prefix)?;
        log::debug!(
            "Subnet {} ({} hosts) -> {network}",
            r.index + 1,
            r.hosts
        );
        subnets.push(AllocatedSubnet {
            index: r.index,
            hosts: r.hosts,
            network,
        });
        next_ip += r.size();
    }

    subnets.sort_by_key(|s| s.index);
    log::info!(
        "Allocated {} subnet(s) in {base}: {required}/{available} addresses used",
        subnets.len()
    );
    Ok(subnets)
}

/// Run [`allocate`] and bundle the result with its base network.
pub fn plan(base: Network, hosts: &[u64]) -> Result<AllocationPlan> {
    let subnets = allocate(&base, hosts)?;
    Ok(AllocationPlan { base, subnets })
}
