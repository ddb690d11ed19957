//! Command implementations.

pub mod address;
pub mod link;
pub mod ping;
pub mod route;
pub mod show;

use std::io::{self, Write};
use std::path::PathBuf;

use iptopo::output::{OutputFormat, OutputOptions, Printable};
use iptopo::{DeviceDirectory, TopologyConfig};

/// Settings shared by all commands.
pub struct Context {
    /// Loaded topology file and where it came from.
    pub topology: Option<(PathBuf, TopologyConfig)>,
    pub format: OutputFormat,
    pub opts: OutputOptions,
    pub dry_run: bool,
}

impl Context {
    /// Port map for a command.
    ///
    /// Without a topology file every label in `labels` resolves to itself.
    pub fn ports(&self, labels: &[&str]) -> DeviceDirectory {
        match &self.topology {
            Some((_, topology)) => topology.ports.clone(),
            None => labels.iter().map(|l| (*l, *l)).collect(),
        }
    }

    /// Store an updated port map, writing the topology file back.
    ///
    /// Nothing is written in dry-run mode or without a topology file.
    pub fn commit(&mut self, ports: DeviceDirectory) -> anyhow::Result<()> {
        if self.dry_run {
            return Ok(());
        }
        if let Some((path, topology)) = &mut self.topology {
            topology.ports = ports;
            topology.save(path.as_path(), None)?;
        }
        Ok(())
    }

    /// Print a record in the selected format.
    pub fn print<P: Printable>(&self, record: &P) -> anyhow::Result<()> {
        let mut stdout = io::stdout().lock();
        record.print(&mut stdout, self.format, &self.opts)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Map `--up`/`--down` flags to a requested state.
pub fn link_state(up: bool, down: bool) -> Option<bool> {
    match (up, down) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
