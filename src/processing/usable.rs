//! Usable host range of a block.

use crate::models::{to_octets, Network, UsableRange};

/// Compute the first and last host addresses of `network`.
///
/// - below /31 the network and broadcast addresses are excluded
/// - /31 is point-to-point, both addresses are usable
/// - /32 has no usable host
pub fn usable_range(network: &Network) -> UsableRange {
    let lo = u32::from(network.network());
    let hi = u32::from(network.broadcast());

    match network.prefix() {
        32 => UsableRange::none(),
        31 => UsableRange {
            first: Some(to_octets(lo)),
            last: Some(to_octets(hi)),
        },
        _ => UsableRange {
            first: Some(to_octets(lo + 1)),
            last: Some(to_octets(hi - 1)),
        },
    }
}
