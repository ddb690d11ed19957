//! Typed command lines.
//!
//! [`IpCommand`] has one variant per command form this crate issues. The
//! rendered text (via `Display`) is what the executor receives, so the exact
//! spelling of every keyword is pinned down here and nowhere else.
//!
//! # Example
//!
//! ```
//! use iptopo::IpCommand;
//!
//! let cmd = IpCommand::LinkSet { dev: "eth0".into(), up: true };
//! assert_eq!(cmd.to_string(), "ip link set dev eth0 up");
//! assert!(!cmd.is_query());
//! ```

use std::fmt;
use std::net::IpAddr;

use crate::error::{Error, Result};
use crate::util::{Family, parse_addr};
use crate::validation::validate_required;

/// A single command line understood by the executor.
#[derive(Debug, Clone, PartialEq)]
pub enum IpCommand {
    /// `ip addr add <addr> dev <dev>`
    AddrAdd { dev: String, addr: String },

    /// `ip addr del <addr> dev <dev>`
    AddrDel { dev: String, addr: String },

    /// `ip link set dev <dev> up|down`
    LinkSet { dev: String, up: bool },

    /// `ip -4|-6 route add <destination> via <via>`
    RouteAdd {
        family: Family,
        destination: String,
        via: IpAddr,
    },

    /// `ip link add link <parent> name <name> type vlan id <vlan_id>`
    VlanAdd {
        parent: String,
        name: String,
        vlan_id: u16,
    },

    /// `ip link del link dev <name>`
    LinkDel { name: String },

    /// `ip addr list dev <dev>`
    AddrList { dev: String },

    /// `ip -s link list dev <dev>`
    LinkStats { dev: String },

    /// `ping|ping6 [-i <interval>] [-q] -c <count> <destination>`
    Ping {
        count: u32,
        destination: IpAddr,
        interval: Option<f64>,
        quiet: bool,
    },
}

impl IpCommand {
    /// Build an `ip addr list` query, rejecting an empty device name.
    pub fn addr_list(dev: &str) -> Result<Self> {
        validate_required(dev, "dev").into_result()?;
        Ok(Self::AddrList {
            dev: dev.to_string(),
        })
    }

    /// Build a ping command.
    ///
    /// `count` must be at least 1 and `interval` (seconds) a positive finite
    /// number. The destination must be a bare address.
    pub fn ping(count: u32, destination: &str, interval: Option<f64>, quiet: bool) -> Result<Self> {
        if count == 0 {
            return Err(Error::invalid("count", "count must be at least 1"));
        }
        if interval.is_some_and(|i| !(i.is_finite() && i > 0.0)) {
            return Err(Error::invalid("interval", "interval must be a positive number"));
        }
        Ok(Self::Ping {
            count,
            destination: parse_addr(destination)?,
            interval,
            quiet,
        })
    }

    /// Program the command line starts with.
    pub fn program(&self) -> &'static str {
        match self {
            Self::Ping { destination, .. } => match Family::of(destination) {
                Family::Inet => "ping",
                Family::Inet6 => "ping6",
            },
            _ => "ip",
        }
    }

    /// Full argument vector, program name first.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![self.program().to_string()];
        let args: Vec<String> = match self {
            Self::AddrAdd { dev, addr } => words(["addr", "add", addr.as_str(), "dev", dev.as_str()]),
            Self::AddrDel { dev, addr } => words(["addr", "del", addr.as_str(), "dev", dev.as_str()]),
            Self::LinkSet { dev, up } => {
                words(["link", "set", "dev", dev.as_str(), if *up { "up" } else { "down" }])
            }
            Self::RouteAdd {
                family,
                destination,
                via,
            } => {
                let via = via.to_string();
                words([family.flag(), "route", "add", destination.as_str(), "via", via.as_str()])
            }
            Self::VlanAdd {
                parent,
                name,
                vlan_id,
            } => {
                let id = vlan_id.to_string();
                words([
                    "link",
                    "add",
                    "link",
                    parent.as_str(),
                    "name",
                    name.as_str(),
                    "type",
                    "vlan",
                    "id",
                    id.as_str(),
                ])
            }
            Self::LinkDel { name } => words(["link", "del", "link", "dev", name.as_str()]),
            Self::AddrList { dev } => words(["addr", "list", "dev", dev.as_str()]),
            Self::LinkStats { dev } => words(["-s", "link", "list", "dev", dev.as_str()]),
            Self::Ping {
                count,
                destination,
                interval,
                quiet,
            } => {
                let mut args = Vec::new();
                if let Some(interval) = interval {
                    args.push("-i".to_string());
                    args.push(interval.to_string());
                }
                if *quiet {
                    args.push("-q".to_string());
                }
                args.push("-c".to_string());
                args.push(count.to_string());
                args.push(destination.to_string());
                args
            }
        };
        argv.extend(args);
        argv
    }

    /// Whether the command reports data instead of changing state.
    ///
    /// Anything else must produce no output at all.
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Self::AddrList { .. } | Self::LinkStats { .. } | Self::Ping { .. }
        )
    }
}

fn words<const N: usize>(parts: [&str; N]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

impl fmt::Display for IpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}
