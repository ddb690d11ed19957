//! Shared utilities for iptopo.

pub mod addr;

pub use addr::{Family, format_prefix, parse_addr, parse_cidr, parse_network, parse_prefix};
