//! Drive the Linux `ip` tool from test automation.
//!
//! This crate turns high-level intents ("set this port's address", "bring
//! this link up", "add a route", "report interface statistics") into `ip` and
//! `ping` command lines, runs them through an [`Executor`], and parses the
//! text that comes back into typed records.
//!
//! Port labels used by a test topology are mapped to kernel device names by a
//! caller-owned [`DeviceDirectory`], which can be loaded from a
//! [`TopologyConfig`] file.
//!
//! # Features
//!
//! - `output` - JSON/text output formatting (default)
//!
//! # Example
//!
//! ```
//! use iptopo::{DeviceDirectory, Executor, Node};
//!
//! /// Pretends to be a host with a single configured port.
//! struct Canned;
//!
//! impl Executor for Canned {
//!     fn execute(&mut self, command: &str, _shell: Option<&str>) -> iptopo::Result<String> {
//!         Ok(match command {
//!             "ip addr list dev eth1" => "\
//! 2: eth1: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc mq state UP qlen 1000
//!     link/ether 52:54:00:12:34:56 brd ff:ff:ff:ff:ff:ff
//!     inet 20.1.1.2/24 scope global eth1
//! ".to_string(),
//!             "ip -s link list dev eth1" => "\
//! 2: eth1: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc mq state UP qlen 1000
//!     RX: bytes packets errors dropped overrun mcast
//!     100 50 0 0 0 2
//!     TX: bytes packets errors dropped carrier collsns
//!     200 60 1 0 0 0
//! ".to_string(),
//!             _ => String::new(),
//!         })
//!     }
//! }
//!
//! let ports: DeviceDirectory = [("1", "eth1")].into_iter().collect();
//! let mut node = Node::new(Canned);
//! node.configure_interface(&ports, "1", Some("20.1.1.2/24"), Some(true))?;
//!
//! let status = node.show_interface("eth1")?.expect("eth1 exists");
//! assert_eq!(status.config.inet_mask, Some(24));
//! assert_eq!(status.stats.tx_errors, 1);
//! # Ok::<(), iptopo::Error>(())
//! ```

pub mod command;
pub mod config;
pub mod directory;
pub mod error;
pub mod exec;
pub mod link;
pub mod node;
pub mod parse;
pub mod route;
pub mod util;
pub mod validation;

#[cfg(feature = "output")]
pub mod output;

// Re-export common types at crate root for convenience
pub use command::IpCommand;
pub use config::{ConfigFormat, TopologyConfig};
pub use directory::DeviceDirectory;
pub use error::{Error, Result};
pub use exec::{DryRun, Executor, LocalShell};
pub use node::Node;
pub use parse::{InterfaceConfig, InterfaceStats, InterfaceStatus, PingResult};
pub use util::Family;
