//! iptopo show command implementation.

use clap::Args;
use iptopo::{Executor, IpCommand, Node};

use super::Context;

#[derive(Args)]
pub struct ShowCmd {
    /// Device name.
    dev: String,
}

impl ShowCmd {
    pub fn run<E: Executor>(self, node: &mut Node<E>, ctx: &mut Context) -> anyhow::Result<()> {
        if ctx.dry_run {
            // Only the first query is known without real output.
            println!("{}", IpCommand::addr_list(&self.dev)?);
            return Ok(());
        }

        match node.show_interface(&self.dev)? {
            Some(status) => ctx.print(&status),
            None => anyhow::bail!("Device \"{}\" does not exist.", self.dev),
        }
    }
}
