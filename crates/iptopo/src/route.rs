//! Static route intents and address family selection.
//!
//! The family of a route is picked from its inputs: an IPv6 gateway, or an
//! IPv6 destination network, selects `ip -6`; everything else is `ip -4`.
//! For `default` only the gateway decides.
//!
//! # Example
//!
//! ```
//! use iptopo::route::StaticRoute;
//! use iptopo::util::Family;
//!
//! let route = StaticRoute::parse("default", "2001:db8::1").unwrap();
//! assert_eq!(route.family(), Family::Inet6);
//! assert_eq!(
//!     route.to_command().to_string(),
//!     "ip -6 route add default via 2001:db8::1"
//! );
//! ```

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::command::IpCommand;
use crate::error::{Error, Result};
use crate::util::addr::{self, AddrError, Family};

/// Keyword for the default route.
pub const DEFAULT_ROUTE: &str = "default";

/// Destination of a static route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDest {
    /// The `default` keyword.
    Default,
    /// A network with prefix length.
    Network { addr: IpAddr, prefix_len: u8 },
}

impl RouteDest {
    /// Family implied by the destination alone, if any.
    pub fn family(&self) -> Option<Family> {
        match self {
            Self::Default => None,
            Self::Network { addr, .. } => Some(Family::of(addr)),
        }
    }

    /// Check if this is the default route.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl FromStr for RouteDest {
    type Err = AddrError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == DEFAULT_ROUTE {
            return Ok(Self::Default);
        }
        let (addr, prefix_len) = addr::parse_network(s)?;
        Ok(Self::Network { addr, prefix_len })
    }
}

impl fmt::Display for RouteDest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str(DEFAULT_ROUTE),
            Self::Network { addr, prefix_len } => write!(f, "{}/{}", addr, prefix_len),
        }
    }
}

/// A validated static route: destination plus gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRoute {
    /// Destination exactly as the caller wrote it.
    raw_destination: String,
    destination: RouteDest,
    via: IpAddr,
}

impl StaticRoute {
    /// Parse a destination (`default` or a network) and a bare gateway address.
    pub fn parse(destination: &str, via: &str) -> Result<Self> {
        if destination.is_empty() {
            return Err(Error::invalid("route", "route cannot be empty"));
        }
        let dest: RouteDest = destination.parse()?;
        let via = addr::parse_addr(via)?;
        Ok(Self {
            raw_destination: destination.to_string(),
            destination: dest,
            via,
        })
    }

    /// The parsed destination.
    pub fn destination(&self) -> &RouteDest {
        &self.destination
    }

    /// The gateway.
    pub fn via(&self) -> IpAddr {
        self.via
    }

    /// Family of the command variant to issue.
    pub fn family(&self) -> Family {
        let via_family = Family::of(&self.via);
        if via_family == Family::Inet6 || self.destination.family() == Some(Family::Inet6) {
            Family::Inet6
        } else {
            Family::Inet
        }
    }

    /// Whether destination and gateway disagree on the family.
    pub fn is_mixed_family(&self) -> bool {
        self.destination
            .family()
            .is_some_and(|f| f != Family::of(&self.via))
    }

    /// Build the `ip route add` command.
    ///
    /// The destination is emitted verbatim; the gateway in canonical form.
    pub fn to_command(&self) -> IpCommand {
        IpCommand::RouteAdd {
            family: self.family(),
            destination: self.raw_destination.clone(),
            via: self.via,
        }
    }
}
