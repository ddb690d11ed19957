//! Address parsing and family detection.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::Serialize;

/// Error type for address parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddrError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid prefix length: {0}")]
    InvalidPrefix(String),

    #[error("missing prefix length: {0}")]
    MissingPrefix(String),

    #[error("{0} has host bits set")]
    HostBitsSet(String),
}

pub type Result<T> = std::result::Result<T, AddrError>;

/// IP protocol family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// IPv4 (`inet`).
    Inet,
    /// IPv6 (`inet6`).
    Inet6,
}

impl Family {
    /// Family of an address.
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Self::Inet,
            IpAddr::V6(_) => Self::Inet6,
        }
    }

    /// The `ip` protocol selector flag.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Inet => "-4",
            Self::Inet6 => "-6",
        }
    }

    /// Largest valid prefix length.
    pub fn max_prefix(self) -> u8 {
        match self {
            Self::Inet => 32,
            Self::Inet6 => 128,
        }
    }

    /// Name as printed by `ip addr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Inet => "inet",
            Self::Inet6 => "inet6",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse an IP address from string.
pub fn parse_addr(s: &str) -> Result<IpAddr> {
    s.parse()
        .map_err(|_| AddrError::InvalidAddress(s.to_string()))
}

fn parse_prefix_len(addr: &IpAddr, prefix_str: &str) -> Result<u8> {
    if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddrError::InvalidPrefix(prefix_str.to_string()));
    }
    let prefix: u8 = prefix_str
        .parse()
        .map_err(|_| AddrError::InvalidPrefix(prefix_str.to_string()))?;

    let max_prefix = Family::of(addr).max_prefix();
    if prefix > max_prefix {
        return Err(AddrError::InvalidPrefix(format!(
            "{} exceeds maximum {} for address family",
            prefix, max_prefix
        )));
    }

    Ok(prefix)
}

/// Parse an IP address with optional prefix length.
///
/// Without a prefix the host prefix for the family is assumed.
pub fn parse_prefix(s: &str) -> Result<(IpAddr, u8)> {
    if let Some((addr_str, prefix_str)) = s.split_once('/') {
        let addr = parse_addr(addr_str)?;
        let prefix = parse_prefix_len(&addr, prefix_str)?;
        Ok((addr, prefix))
    } else {
        let addr = parse_addr(s)?;
        let prefix = Family::of(&addr).max_prefix();
        Ok((addr, prefix))
    }
}

/// Parse an interface address in CIDR notation; the prefix is mandatory.
pub fn parse_cidr(s: &str) -> Result<(IpAddr, u8)> {
    let Some((addr_str, prefix_str)) = s.split_once('/') else {
        return Err(AddrError::MissingPrefix(s.to_string()));
    };
    let addr = parse_addr(addr_str)?;
    let prefix = parse_prefix_len(&addr, prefix_str)?;
    Ok((addr, prefix))
}

/// Parse a network (`10.0.0.0/8`, `2001:db8::/32`).
///
/// The prefix may be omitted for a host network. Host bits must be zero.
pub fn parse_network(s: &str) -> Result<(IpAddr, u8)> {
    let (addr, prefix) = parse_prefix(s)?;
    if network_address(&addr, prefix) != addr {
        return Err(AddrError::HostBitsSet(s.to_string()));
    }
    Ok((addr, prefix))
}

/// Mask an address down to its network address.
pub fn network_address(addr: &IpAddr, prefix_len: u8) -> IpAddr {
    match addr {
        IpAddr::V4(v4) => {
            let mask = if prefix_len == 0 {
                0
            } else {
                !0u32 << (32 - u32::from(prefix_len.min(32)))
            };
            IpAddr::V4(Ipv4Addr::from(u32::from(*v4) & mask))
        }
        IpAddr::V6(v6) => {
            let mask = if prefix_len == 0 {
                0
            } else {
                !0u128 << (128 - u32::from(prefix_len.min(128)))
            };
            IpAddr::V6(Ipv6Addr::from(u128::from(*v6) & mask))
        }
    }
}

/// Format an IP address with prefix.
pub fn format_prefix(addr: &IpAddr, prefix: u8) -> String {
    format!("{}/{}", addr, prefix)
}
