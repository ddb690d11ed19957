//! iptopo route command implementation.

use clap::{Args, Subcommand};
use iptopo::{Executor, Node};

use super::Context;

#[derive(Args)]
pub struct RouteCmd {
    #[command(subcommand)]
    action: RouteAction,
}

#[derive(Subcommand)]
enum RouteAction {
    /// Add a static route: `route add <dest> via <gateway>`.
    Add {
        /// Destination network or `default`.
        destination: String,

        #[arg(value_parser = ["via"], hide = true)]
        via: String,

        /// Gateway address.
        gateway: String,
    },
}

impl RouteCmd {
    pub fn run<E: Executor>(self, node: &mut Node<E>, _ctx: &mut Context) -> anyhow::Result<()> {
        match self.action {
            RouteAction::Add {
                destination,
                gateway,
                ..
            } => node.add_route(&destination, &gateway)?,
        }
        Ok(())
    }
}
