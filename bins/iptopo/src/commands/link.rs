//! iptopo link command implementation.

use anyhow::bail;
use clap::{Args, Subcommand};
use iptopo::{Executor, Node};

use super::{Context, link_state};

#[derive(Args)]
pub struct LinkCmd {
    #[command(subcommand)]
    action: LinkAction,
}

#[derive(Subcommand)]
enum LinkAction {
    /// Bring a port up or down.
    Set {
        /// Port label.
        port: String,

        /// Bring the link up.
        #[arg(long, conflicts_with = "down")]
        up: bool,

        /// Bring the link down.
        #[arg(long)]
        down: bool,
    },

    /// Configure a VLAN sub-interface `<dev>.<subint>` of a port.
    Sub {
        /// Port label of the parent.
        port: String,

        /// Sub-interface suffix.
        subint: String,

        /// Address with prefix to add.
        #[arg(long)]
        addr: Option<String>,

        /// Bring the sub-interface (and its parent) up.
        #[arg(long, conflicts_with = "down")]
        up: bool,

        /// Bring the sub-interface down.
        #[arg(long)]
        down: bool,
    },

    /// Create a VLAN link on top of a port.
    AddVlan {
        /// Port label of the parent.
        port: String,

        /// Name of the new link.
        name: String,

        /// VLAN ID (1-4094).
        id: u16,
    },

    /// Delete a VLAN link created with add-vlan.
    DelVlan {
        /// Name of the link.
        name: String,
    },
}

impl LinkCmd {
    pub fn run<E: Executor>(self, node: &mut Node<E>, ctx: &mut Context) -> anyhow::Result<()> {
        match self.action {
            LinkAction::Set { port, up, down } => {
                let Some(state) = link_state(up, down) else {
                    bail!("one of --up or --down is required");
                };
                let ports = ctx.ports(&[&port]);
                node.configure_interface(&ports, &port, None, Some(state))?;
            }
            LinkAction::Sub {
                port,
                subint,
                addr,
                up,
                down,
            } => {
                let ports = ctx.ports(&[&port]);
                node.configure_sub_interface(
                    &ports,
                    &port,
                    &subint,
                    addr.as_deref(),
                    link_state(up, down),
                )?;
            }
            LinkAction::AddVlan { port, name, id } => {
                let mut ports = ctx.ports(&[&port]);
                node.add_vlan_link(&mut ports, &port, &name, id)?;
                ctx.commit(ports)?;
            }
            LinkAction::DelVlan { name } => {
                let mut ports = ctx.ports(&[&name]);
                node.remove_vlan_link(&mut ports, &name)?;
                ctx.commit(ports)?;
            }
        }
        Ok(())
    }
}
