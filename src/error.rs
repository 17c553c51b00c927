//! Error types for VLSM planning.
//!
//! Every fallible operation in this crate returns [`Result<T>`]. Each
//! variant carries the offending value so callers can build a message
//! without re-inspecting their input.

use std::net::Ipv4Addr;

/// Errors that abort a planning run. None of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VlsmError {
    /// The CIDR string is missing its address or prefix segment.
    #[error("Malformed network '{0}': expected address/prefix")]
    MalformedInput(String),

    /// The prefix segment is not an integer in 0..=32.
    #[error("Invalid prefix length '{0}': must be an integer between 0 and 32")]
    InvalidPrefixLength(String),

    /// The address segment is not four decimal octets in 0..=255.
    #[error("Invalid address '{0}': expected four octets between 0 and 255")]
    InvalidAddress(String),

    /// An entry of the host list is not a non-negative integer.
    #[error("Invalid host count '{0}' in host list")]
    InvalidHostList(String),

    /// A single requirement does not fit in any IPv4 block.
    #[error("Host requirement {0} exceeds the IPv4 address space")]
    CapacityExceeded(u64),

    /// The requirements together need more addresses than the base network has.
    #[error("Insufficient address space: {required} addresses required, {available} available")]
    InsufficientAddressSpace { required: u64, available: u64 },

    /// A block, taken at its network address, would end past the base network.
    #[error("Allocation of {required} addresses from {start} does not fit inside the base network")]
    OutOfRange { start: Ipv4Addr, required: u64 },

    /// A plan could not be rendered.
    #[error("Render error: {0}")]
    Render(String),

    /// An environment or command line setting has an unusable value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized Result type for VLSM operations.
pub type Result<T> = std::result::Result<T, VlsmError>;
