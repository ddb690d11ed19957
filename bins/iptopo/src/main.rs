//! iptopo command - configure and inspect topology nodes through `ip`.

mod commands;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use iptopo::output::{OutputFormat, OutputOptions};
use iptopo::{DryRun, Executor, LocalShell, Node, TopologyConfig};

use commands::Context;

#[derive(Parser)]
#[command(name = "iptopo", version, about = "Topology node configuration through ip")]
struct Cli {
    /// Topology file (YAML or JSON) mapping port labels to devices.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Shell to run commands through.
    #[arg(long)]
    shell: Option<String>,

    /// Print commands instead of running them.
    #[arg(long)]
    dry_run: bool,

    /// Output JSON.
    #[arg(short = 'j', long)]
    json: bool,

    /// Pretty print JSON.
    #[arg(short = 'p', long)]
    pretty: bool,

    /// Show counter totals.
    #[arg(short = 's', long)]
    stats: bool,

    /// Increase log verbosity (repeatable).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage interface addresses.
    #[command(visible_alias = "a", visible_alias = "addr")]
    Address(commands::address::AddressCmd),

    /// Manage link state, sub-interfaces and VLAN links.
    #[command(visible_alias = "l")]
    Link(commands::link::LinkCmd),

    /// Manage static routes.
    #[command(visible_alias = "r")]
    Route(commands::route::RouteCmd),

    /// Show configuration and counters of a device.
    Show(commands::show::ShowCmd),

    /// Probe reachability of an address.
    Ping(commands::ping::PingCmd),
}

impl Command {
    fn run<E: Executor>(self, node: &mut Node<E>, ctx: &mut Context) -> anyhow::Result<()> {
        match self {
            Command::Address(cmd) => cmd.run(node, ctx),
            Command::Link(cmd) => cmd.run(node, ctx),
            Command::Route(cmd) => cmd.run(node, ctx),
            Command::Show(cmd) => cmd.run(node, ctx),
            Command::Ping(cmd) => cmd.run(node, ctx),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let opts = OutputOptions {
        stats: cli.stats,
        pretty: cli.pretty,
    };

    let topology = match &cli.config {
        Some(path) => Some((path.clone(), TopologyConfig::load(path, None)?)),
        None => None,
    };
    let shell = cli
        .shell
        .clone()
        .or_else(|| topology.as_ref().and_then(|(_, t)| t.shell.clone()));

    let mut ctx = Context {
        topology,
        format,
        opts,
        dry_run: cli.dry_run,
    };

    let result = if cli.dry_run {
        let mut node = Node::new(DryRun::new());
        node.set_shell(shell);
        let result = cli.command.run(&mut node, &mut ctx);
        for command in node.executor().commands() {
            println!("{}", command);
        }
        result
    } else {
        let mut node = Node::new(LocalShell::new());
        node.set_shell(shell);
        cli.command.run(&mut node, &mut ctx)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
