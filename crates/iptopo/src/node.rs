//! Operations on one node.
//!
//! A [`Node`] pairs an [`Executor`] with the shell to run commands through.
//! Every operation checks its inputs first, so a rejected call never reaches
//! the executor. Write operations then insist on an empty response; show and
//! ping parse theirs into records.
//!
//! # Example
//!
//! ```
//! use iptopo::{DeviceDirectory, DryRun, Node};
//!
//! let ports: DeviceDirectory = [("1", "eth1")].into_iter().collect();
//! let mut node = Node::new(DryRun::new());
//!
//! node.configure_interface(&ports, "1", Some("10.0.0.1/24"), Some(true))?;
//! node.add_route("default", "10.0.0.254")?;
//!
//! assert_eq!(
//!     node.executor().commands(),
//!     [
//!         "ip addr add 10.0.0.1/24 dev eth1",
//!         "ip link set dev eth1 up",
//!         "ip -4 route add default via 10.0.0.254",
//!     ]
//! );
//! # Ok::<(), iptopo::Error>(())
//! ```

use crate::command::IpCommand;
use crate::directory::DeviceDirectory;
use crate::error::{Error, Result};
use crate::exec::Executor;
use crate::link::{SubInterface, VlanLink};
use crate::parse::{InterfaceStatus, PingResult, parse_addr_show, parse_link_stats, parse_ping};
use crate::route::StaticRoute;
use crate::util::{parse_cidr, parse_prefix};
use crate::validation::{Validatable, validate_required};

/// A node driven through an executor.
#[derive(Debug, Clone, Default)]
pub struct Node<E> {
    executor: E,
    shell: Option<String>,
}

impl<E: Executor> Node<E> {
    /// Create a node that runs commands through `executor`.
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            shell: None,
        }
    }

    /// Run commands through the named shell.
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    /// Change the shell selector for subsequent operations.
    pub fn set_shell(&mut self, shell: Option<String>) {
        self.shell = shell;
    }

    /// Current shell selector.
    pub fn shell(&self) -> Option<&str> {
        self.shell.as_deref()
    }

    /// Get the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Get the executor mutably.
    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    /// Consume the node, returning the executor.
    pub fn into_executor(self) -> E {
        self.executor
    }

    fn run(&mut self, command: &IpCommand) -> Result<String> {
        let line = command.to_string();
        tracing::debug!(command = %line, shell = ?self.shell, "running");
        let output = self.executor.execute(&line, self.shell.as_deref())?;
        tracing::trace!(command = %line, %output, "response");
        Ok(output)
    }

    /// Run a write command; any output is a failure.
    fn apply(&mut self, command: IpCommand) -> Result<()> {
        let output = self.run(&command)?;
        if output.trim().is_empty() {
            Ok(())
        } else {
            Err(Error::UnexpectedOutput {
                command: command.to_string(),
                output,
            })
        }
    }
}

// ============================================================================
// Addresses and link state
// ============================================================================

impl<E: Executor> Node<E> {
    /// Configure an interface's address and/or administrative state.
    ///
    /// The address, if given, must carry a prefix length (`10.0.0.1/24`,
    /// `2001:db8::1/64`) and is passed to `ip` verbatim. The address is added
    /// before the state changes. Either step is skipped when its argument is
    /// `None`.
    pub fn configure_interface(
        &mut self,
        ports: &DeviceDirectory,
        port: &str,
        addr: Option<&str>,
        up: Option<bool>,
    ) -> Result<()> {
        validate_required(port, "port").into_result()?;
        let dev = ports.resolve(port)?.to_string();
        if let Some(addr) = addr {
            parse_cidr(addr)?;
        }

        if let Some(addr) = addr {
            self.apply(IpCommand::AddrAdd {
                dev: dev.clone(),
                addr: addr.to_string(),
            })?;
        }
        if let Some(up) = up {
            self.apply(IpCommand::LinkSet { dev, up })?;
        }
        Ok(())
    }

    /// Configure a VLAN sub-interface `<dev>.<subint>` of a port.
    ///
    /// Bringing the sub-interface up brings its parent up first. Bringing it
    /// down leaves the parent alone.
    pub fn configure_sub_interface(
        &mut self,
        ports: &DeviceDirectory,
        port: &str,
        subint: &str,
        addr: Option<&str>,
        up: Option<bool>,
    ) -> Result<()> {
        validate_required(port, "port").into_result()?;
        let sub = SubInterface::new(ports.resolve(port)?, subint);
        sub.validate().into_result()?;
        if let Some(addr) = addr {
            parse_cidr(addr)?;
        }

        let dev = sub.name();
        if let Some(addr) = addr {
            self.apply(IpCommand::AddrAdd {
                dev: dev.clone(),
                addr: addr.to_string(),
            })?;
        }
        match up {
            Some(true) => {
                self.configure_interface(ports, port, None, Some(true))?;
                self.apply(IpCommand::LinkSet { dev, up: true })?;
            }
            Some(false) => self.apply(IpCommand::LinkSet { dev, up: false })?,
            None => {}
        }
        Ok(())
    }

    /// Remove an address from a port. The prefix length is optional.
    pub fn remove_address(&mut self, ports: &DeviceDirectory, port: &str, addr: &str) -> Result<()> {
        validate_required(port, "port").into_result()?;
        let dev = ports.resolve(port)?.to_string();
        parse_prefix(addr)?;

        self.apply(IpCommand::AddrDel {
            dev,
            addr: addr.to_string(),
        })
    }
}

// ============================================================================
// Routes
// ============================================================================

impl<E: Executor> Node<E> {
    /// Add a static route.
    ///
    /// `destination` is `default` or a network; `via` is a bare gateway
    /// address. The IPv6 variant is used when either the gateway or a
    /// non-default destination is IPv6.
    pub fn add_route(&mut self, destination: &str, via: &str) -> Result<()> {
        let route = StaticRoute::parse(destination, via)?;
        if route.is_mixed_family() {
            tracing::warn!(
                %destination,
                via = %route.via(),
                family = %route.family(),
                "route destination and gateway families differ"
            );
        }
        self.apply(route.to_command())
    }
}

// ============================================================================
// VLAN links
// ============================================================================

impl<E: Executor> Node<E> {
    /// Create a VLAN link named `name` on top of a port and register it.
    ///
    /// Fails without issuing a command if `name` is already registered.
    pub fn add_vlan_link(
        &mut self,
        ports: &mut DeviceDirectory,
        port: &str,
        name: &str,
        vlan_id: u16,
    ) -> Result<()> {
        validate_required(port, "port").into_result()?;
        if ports.contains(name) {
            return Err(Error::DeviceExists {
                name: name.to_string(),
            });
        }
        let vlan = VlanLink::new(ports.resolve(port)?, name, vlan_id);
        vlan.validate().into_result()?;

        self.apply(vlan.to_command())?;
        ports.insert(name, name);
        tracing::debug!(%name, parent = vlan.parent(), vlan_id, "registered vlan link");
        Ok(())
    }

    /// Delete a registered VLAN link and unregister it.
    ///
    /// Fails without issuing a command if `name` is unknown.
    pub fn remove_vlan_link(&mut self, ports: &mut DeviceDirectory, name: &str) -> Result<()> {
        validate_required(name, "name").into_result()?;
        if !ports.contains(name) {
            return Err(Error::DeviceNotFound {
                name: name.to_string(),
            });
        }

        self.apply(IpCommand::LinkDel {
            name: name.to_string(),
        })?;
        ports.remove(name);
        tracing::debug!(%name, "unregistered vlan link");
        Ok(())
    }
}

// ============================================================================
// Queries
// ============================================================================

impl<E: Executor> Node<E> {
    /// Report configuration and counters of a device.
    ///
    /// Returns `None` if the device does not exist; the statistics query is
    /// issued only for an existing device. Missing counters for an existing
    /// device are a parse error.
    pub fn show_interface(&mut self, dev: &str) -> Result<Option<InterfaceStatus>> {
        let output = self.run(&IpCommand::addr_list(dev)?)?;
        let Some(config) = parse_addr_show(&output)? else {
            return Ok(None);
        };

        let output = self.run(&IpCommand::LinkStats {
            dev: dev.to_string(),
        })?;
        let stats = parse_link_stats(&output)
            .ok_or_else(|| Error::Parse(format!("no RX/TX counters for {}", dev)))?;

        Ok(Some(InterfaceStatus { config, stats }))
    }

    /// Send `count` echo requests to `destination` and report the summary.
    ///
    /// The destination must be a bare address; its family picks `ping` or
    /// `ping6`. `interval` is in seconds.
    pub fn ping(
        &mut self,
        count: u32,
        destination: &str,
        interval: Option<f64>,
        quiet: bool,
    ) -> Result<PingResult> {
        let command = IpCommand::ping(count, destination, interval, quiet)?;
        let output = self.run(&command)?;
        let result = parse_ping(&output)
            .ok_or_else(|| Error::Parse(format!("no ping summary for {}", destination)))?;
        tracing::debug!(?result, "ping finished");
        Ok(result)
    }
}
