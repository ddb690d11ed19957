//! iptopo address command implementation.

use clap::{Args, Subcommand};
use iptopo::{Executor, Node};

use super::Context;

#[derive(Args)]
pub struct AddressCmd {
    #[command(subcommand)]
    action: AddressAction,
}

#[derive(Subcommand)]
enum AddressAction {
    /// Add an address to a port.
    Add {
        /// Port label.
        port: String,

        /// Address with prefix (e.g., 192.168.1.1/24).
        address: String,
    },

    /// Remove an address from a port.
    #[command(visible_alias = "delete")]
    Del {
        /// Port label.
        port: String,

        /// Address, with or without prefix.
        address: String,
    },
}

impl AddressCmd {
    pub fn run<E: Executor>(self, node: &mut Node<E>, ctx: &mut Context) -> anyhow::Result<()> {
        match self.action {
            AddressAction::Add { port, address } => {
                let ports = ctx.ports(&[&port]);
                node.configure_interface(&ports, &port, Some(&address), None)?;
            }
            AddressAction::Del { port, address } => {
                let ports = ctx.ports(&[&port]);
                node.remove_address(&ports, &port, &address)?;
            }
        }
        Ok(())
    }
}
