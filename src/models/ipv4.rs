//! IPv4 address arithmetic and CIDR network values.
//!
//! Provides the [`Network`] struct (an address paired with a prefix length)
//! along with the bitwise helpers every other module builds on. All address
//! arithmetic is done on `u32` so masking is explicit and never depends on
//! the width of a native integer.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::{Result, VlsmError};

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of addresses in the whole IPv4 space.
pub const ADDRESS_SPACE: u64 = 1 << MAX_LENGTH;

/// Pack the four octets of an address into a `u32`, most significant first.
pub fn to_int(addr: Ipv4Addr) -> u32 {
    u32::from_be_bytes(addr.octets())
}

/// Inverse of [`to_int`].
pub fn to_octets(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits.to_be_bytes())
}

/// Convert a prefix length to a subnet mask as u32.
///
/// Lengths above 32 are treated as 32.
///
/// # Examples
/// ```
/// use vlsm_planner::models::subnet_mask;
/// assert_eq!(subnet_mask(24), 0xFFFFFF00);
/// assert_eq!(subnet_mask(0), 0);
/// ```
pub fn subnet_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Get the network address (all host bits cleared) for an address and prefix length.
pub fn network_address(addr: u32, len: u8) -> u32 {
    addr & subnet_mask(len)
}

/// Get the broadcast address (all host bits set) for an address and prefix length.
pub fn broadcast_address(addr: u32, len: u8) -> u32 {
    addr | !subnet_mask(len)
}

/// Number of addresses in a block with the given prefix length.
pub fn block_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Render the subnet mask for a prefix length in dotted-quad form.
///
/// # Examples
/// ```
/// use vlsm_planner::models::format_mask;
/// assert_eq!(format_mask(26), "255.255.255.192");
/// ```
pub fn format_mask(len: u8) -> String {
    to_octets(subnet_mask(len)).to_string()
}

/// Calculate the longest prefix for which `ip` is still a network address,
/// based on its trailing zero bits.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = to_int(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// An IPv4 address paired with a prefix length in 0..=32.
///
/// The address is kept verbatim; it need not be the network address of its
/// own prefix. Use [`Network::network`] for the aligned start.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Network {
    /// Pair an address with a prefix length, rejecting lengths above 32.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Network> {
        if prefix > MAX_LENGTH {
            return Err(VlsmError::InvalidPrefixLength(prefix.to_string()));
        }
        Ok(Network { addr, prefix })
    }

    /// Build a network from the integer form of its address.
    pub fn from_int(bits: u32, prefix: u8) -> Result<Network> {
        Network::new(to_octets(bits), prefix)
    }

    /// The address as supplied.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The subnet mask.
    pub fn mask(&self) -> Ipv4Addr {
        to_octets(subnet_mask(self.prefix))
    }

    /// The lowest (network) address of the block containing `addr`.
    pub fn network(&self) -> Ipv4Addr {
        to_octets(network_address(to_int(self.addr), self.prefix))
    }

    /// The highest (broadcast) address of the block containing `addr`.
    pub fn broadcast(&self) -> Ipv4Addr {
        to_octets(broadcast_address(to_int(self.addr), self.prefix))
    }

    /// The same prefix anchored at [`Network::network`].
    pub fn masked(&self) -> Network {
        Network {
            addr: self.network(),
            prefix: self.prefix,
        }
    }

    /// Total number of addresses covered by this prefix length.
    pub fn size(&self) -> u64 {
        block_size(self.prefix)
    }

    /// Whether `ip` falls between the network and broadcast addresses.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.network() <= ip && ip <= self.broadcast()
    }

    /// Whether the two blocks share at least one address.
    pub fn overlaps(&self, other: &Network) -> bool {
        self.network() <= other.broadcast() && other.network() <= self.broadcast()
    }
}

impl FromStr for Network {
    type Err = VlsmError;

    fn from_str(s: &str) -> Result<Network> {
        crate::processing::parse_network(s)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_mask() {
        assert_eq!(subnet_mask(0), 0x00000000);
        assert_eq!(subnet_mask(8), 0xFF000000);
        assert_eq!(subnet_mask(16), 0xFFFF0000);
        assert_eq!(subnet_mask(24), 0xFFFFFF00);
        assert_eq!(subnet_mask(31), 0xFFFFFFFE);
        assert_eq!(subnet_mask(32), 0xFFFFFFFF);
    }

    #[test]
    fn test_to_int_and_back() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(to_int(ip), 0xC0A8012A);
        assert_eq!(to_octets(0xC0A8012A), ip);
        assert_eq!(to_octets(0), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(to_octets(u32::MAX), Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_network_address() {
        let ip = to_int(Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(to_octets(network_address(ip, 24)), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(to_octets(network_address(ip, 16)), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(to_octets(network_address(ip, 8)), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(to_octets(network_address(ip, 32)), Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(network_address(ip, 0), 0);
    }

    #[test]
    fn test_broadcast_address() {
        let ip = to_int(Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(to_octets(broadcast_address(ip, 24)), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(to_octets(broadcast_address(ip, 16)), Ipv4Addr::new(192, 168, 255, 255));
        assert_eq!(to_octets(broadcast_address(ip, 8)), Ipv4Addr::new(192, 255, 255, 255));
        assert_eq!(to_octets(broadcast_address(ip, 32)), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(broadcast_address(ip, 0), u32::MAX);
    }

    #[test]
    fn test_block_size_and_format_mask() {
        assert_eq!(block_size(32), 1);
        assert_eq!(block_size(30), 4);
        assert_eq!(block_size(24), 256);
        assert_eq!(block_size(0), ADDRESS_SPACE);
        assert_eq!(format_mask(0), "0.0.0.0");
        assert_eq!(format_mask(27), "255.255.255.224");
        assert_eq!(format_mask(32), "255.255.255.255");
    }

    #[test]
    fn test_lo_mask() {
        assert_eq!(lo_mask(Ipv4Addr::new(192, 168, 1, 1)), 32);
        assert_eq!(lo_mask(Ipv4Addr::new(10, 6, 2, 80)), 28);
        assert_eq!(lo_mask(Ipv4Addr::new(10, 11, 12, 0)), 22);
        assert_eq!(lo_mask(Ipv4Addr::new(0, 0, 0, 0)), 0);
    }

    #[test]
    fn test_network_accessors() {
        let net = Network::new(Ipv4Addr::new(10, 0, 10, 77), 24).unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(10, 0, 10, 77));
        assert_eq!(net.network(), Ipv4Addr::new(10, 0, 10, 0));
        assert_eq!(net.broadcast(), Ipv4Addr::new(10, 0, 10, 255));
        assert_eq!(net.mask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(net.size(), 256);
        assert!(net.contains(Ipv4Addr::new(10, 0, 10, 0)));
        assert!(!net.contains(Ipv4Addr::new(10, 0, 11, 0)));
        assert_eq!(net.to_string(), "10.0.10.77/24");
        assert_eq!(net.masked().to_string(), "10.0.10.0/24");
        assert_eq!(net.masked().broadcast(), net.broadcast());
    }

    #[test]
    fn test_network_rejects_long_prefix() {
        assert_eq!(
            Network::new(Ipv4Addr::new(10, 0, 0, 0), 33),
            Err(VlsmError::InvalidPrefixLength("33".to_string()))
        );
    }

    #[test]
    fn test_network_overlaps() {
        let big: Network = "10.0.0.0/8".parse().unwrap();
        let inner: Network = "10.0.10.64/26".parse().unwrap();
        let next: Network = "10.0.10.128/26".parse().unwrap();
        assert!(big.overlaps(&inner));
        assert!(inner.overlaps(&big));
        assert!(!inner.overlaps(&next));
    }

    #[test]
    fn test_network_cmp() {
        let ip1: Network = "10.0.0.1/24".parse().unwrap();
        let ip2: Network = "10.0.0.2/24".parse().unwrap();
        let ip3: Network = "10.0.0.1/24".parse().unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 >= ip3);
    }

    #[test]
    fn test_network_serde() {
        let net: Network = "192.168.1.64/27".parse().unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"192.168.1.64/27\"");
        let back: Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);
        assert!(serde_json::from_str::<Network>("\"10.0.0/24\"").is_err());
    }
}
