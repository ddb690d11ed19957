//! iptopo ping command implementation.

use clap::Args;
use iptopo::{Executor, IpCommand, Node};

use super::Context;

#[derive(Args)]
pub struct PingCmd {
    /// Destination address.
    destination: String,

    /// Number of echo requests.
    #[arg(short = 'c', long, default_value_t = 5)]
    count: u32,

    /// Seconds between requests.
    #[arg(short = 'i', long)]
    interval: Option<f64>,

    /// Only print the summary.
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl PingCmd {
    pub fn run<E: Executor>(self, node: &mut Node<E>, ctx: &mut Context) -> anyhow::Result<()> {
        if ctx.dry_run {
            let command = IpCommand::ping(self.count, &self.destination, self.interval, self.quiet)?;
            println!("{}", command);
            return Ok(());
        }

        let result = node.ping(self.count, &self.destination, self.interval, self.quiet)?;
        ctx.print(&result)
    }
}
