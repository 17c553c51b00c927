//! Host count to prefix length sizing.

use crate::error::{Result, VlsmError};
use crate::models::{block_size, MAX_LENGTH};

/// Addresses reserved in every block for the network and broadcast addresses.
pub const RESERVED_ADDRESSES: u64 = 2;

/// Find the longest prefix (smallest block) that holds `hosts` plus the
/// reserved network and broadcast addresses.
///
/// The reservation is applied to every block, so 0 hosts still need a /31.
///
/// # Examples
/// ```
/// use vlsm_planner::processing::required_prefix_length;
/// assert_eq!(required_prefix_length(50).unwrap(), 26);
/// assert_eq!(required_prefix_length(62).unwrap(), 26);
/// assert_eq!(required_prefix_length(63).unwrap(), 25);
/// ```
pub fn required_prefix_length(hosts: u64) -> Result<u8> {
    let needed = hosts.saturating_add(RESERVED_ADDRESSES);

    let prefix = (0..=MAX_LENGTH)
        .rev()
        .find(|&prefix| block_size(prefix) >= needed)
        .ok_or(VlsmError::CapacityExceeded(hosts))?;

    log::debug!(
        "required_prefix_length({hosts}) -> /{prefix} ({} addresses)",
        block_size(prefix)
    );
    Ok(prefix)
}
