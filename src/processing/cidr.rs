//! CIDR string parsing.
//!
//! Validation runs in three stages and stops at the first failure:
//! segment split, prefix length, then address octets.

use crate::error::{Result, VlsmError};
use crate::models::{Network, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Parse an `"a.b.c.d/p"` string into a [`Network`].
///
/// The address is kept as given, it is not masked down to its network
/// address.
///
/// # Examples
/// ```
/// use vlsm_planner::processing::parse_network;
/// let net = parse_network("192.168.1.0/24").unwrap();
/// assert_eq!(net.prefix(), 24);
/// assert!(parse_network("10.0.0/24").is_err());
/// ```
pub fn parse_network(text: &str) -> Result<Network> {
    let text = text.trim();
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 2 || parts[0].trim().is_empty() || parts[1].trim().is_empty() {
        log::warn!("Rejecting malformed network {text:?}");
        return Err(VlsmError::MalformedInput(text.to_string()));
    }

    let prefix = parse_prefix(parts[1].trim())?;
    let addr = parse_address(parts[0].trim())?;

    Network::new(addr, prefix)
}

fn parse_prefix(part: &str) -> Result<u8> {
    if !is_decimal(part) {
        return Err(VlsmError::InvalidPrefixLength(part.to_string()));
    }
    match part.parse::<u8>() {
        Ok(prefix) if prefix <= MAX_LENGTH => Ok(prefix),
        _ => Err(VlsmError::InvalidPrefixLength(part.to_string())),
    }
}

fn parse_address(part: &str) -> Result<Ipv4Addr> {
    let octets: Vec<&str> = part.split('.').collect();
    if octets.len() != 4 {
        return Err(VlsmError::InvalidAddress(part.to_string()));
    }

    let mut bytes = [0u8; 4];
    for (byte, octet) in bytes.iter_mut().zip(&octets) {
        if !is_decimal(octet) {
            return Err(VlsmError::InvalidAddress(part.to_string()));
        }
        *byte = octet
            .parse::<u8>()
            .map_err(|_| VlsmError::InvalidAddress(part.to_string()))?;
    }

    Ok(Ipv4Addr::from(bytes))
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network() {
        let net = parse_network("192.168.1.0/24").unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(net.prefix(), 24);

        let net = parse_network("  0.0.0.0/0 ").unwrap();
        assert_eq!(net.prefix(), 0);

        let net = parse_network("255.255.255.255/32").unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_parse_network_keeps_host_bits() {
        let net = parse_network("10.2.3.4/16").unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(10, 2, 3, 4));
        assert_eq!(net.network(), Ipv4Addr::new(10, 2, 0, 0));
    }

    #[test]
    fn test_malformed_input() {
        for text in ["10.0.0.0", "10.0.0.0/", "/24", "", "10.0.0.0/24/1"] {
            assert!(
                matches!(parse_network(text), Err(VlsmError::MalformedInput(_))),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_invalid_prefix_length() {
        for text in ["10.0.0.0/33", "10.0.0.0/-1", "10.0.0.0/abc", "10.0.0.0/2 4", "10.0.0.0/300"] {
            assert!(
                matches!(parse_network(text), Err(VlsmError::InvalidPrefixLength(_))),
                "{text:?} should have an invalid prefix"
            );
        }
    }

    #[test]
    fn test_invalid_address() {
        assert_eq!(
            parse_network("10.0.0/24"),
            Err(VlsmError::InvalidAddress("10.0.0".to_string()))
        );
        for text in ["10.0.0.256/24", "10.0.0.0.0/24", "a.b.c.d/24", "10..0.0/24", "10.0.0.-1/8"] {
            assert!(
                matches!(parse_network(text), Err(VlsmError::InvalidAddress(_))),
                "{text:?} should have an invalid address"
            );
        }
    }

    #[test]
    fn test_prefix_checked_before_address() {
        assert!(matches!(
            parse_network("999.0.0/40"),
            Err(VlsmError::InvalidPrefixLength(_))
        ));
    }
}
