//! Common test utilities for integration tests.
//!
//! Provides `Scripted`, an executor that answers commands from a table and
//! records everything it was asked to run, plus canned `ip` and `ping` output.

#![allow(dead_code)]

use std::collections::HashMap;

use iptopo::{DeviceDirectory, Executor, Result};

/// An executor with canned responses.
///
/// Commands without a scripted response print nothing, like a successful
/// `ip` write command.
#[derive(Debug, Default)]
pub struct Scripted {
    responses: HashMap<String, String>,
    calls: Vec<(String, Option<String>)>,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with `output`.
    pub fn respond(mut self, command: &str, output: &str) -> Self {
        self.responses.insert(command.to_string(), output.to_string());
        self
    }

    /// Command lines run so far, in order.
    pub fn commands(&self) -> Vec<&str> {
        self.calls.iter().map(|(c, _)| c.as_str()).collect()
    }

    /// Shell selectors passed so far, in order.
    pub fn shells(&self) -> Vec<Option<&str>> {
        self.calls.iter().map(|(_, s)| s.as_deref()).collect()
    }
}

impl Executor for Scripted {
    fn execute(&mut self, command: &str, shell: Option<&str>) -> Result<String> {
        self.calls
            .push((command.to_string(), shell.map(str::to_string)));
        Ok(self.responses.get(command).cloned().unwrap_or_default())
    }
}

/// Ports `1` and `2` on `eth1` and `eth2`.
pub fn ports() -> DeviceDirectory {
    [("1", "eth1"), ("2", "eth2")].into_iter().collect()
}

pub const ETH1_ADDR: &str = "\
2: eth1: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc pfifo_fast state UP group default qlen 1000
    link/ether 52:54:00:12:34:56 brd ff:ff:ff:ff:ff:ff
    inet 20.1.1.2/24 brd 20.1.1.255 scope global eth1
       valid_lft forever preferred_lft forever
";

pub const ETH1_STATS: &str = "\
2: eth1: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc pfifo_fast state UP mode DEFAULT group default qlen 1000
    link/ether 52:54:00:12:34:56 brd ff:ff:ff:ff:ff:ff
    RX: bytes  packets  errors  dropped overrun mcast
    100        50       0       0       0       2
    TX: bytes  packets  errors  dropped carrier collsns
    200        60       1       0       0       0
";

pub const ETH7_MISSING: &str = "Device \"eth7\" does not exist.\n";

pub const PING_OK: &str = "\
PING 20.1.1.1 (20.1.1.1) 56(84) bytes of data.

--- 20.1.1.1 ping statistics ---
5 packets transmitted, 5 received, 0% packet loss, time 40ms
";

pub const PING_ERRORS: &str = "\
PING 2001:db8::9(2001:db8::9) 56 data bytes

--- 2001:db8::9 ping statistics ---
5 packets transmitted, 0 received, +2 errors, 100% packet loss, time 4004ms
";
