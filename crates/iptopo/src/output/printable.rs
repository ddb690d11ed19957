//! Printable implementations for parsed records.

use std::io::Write;

use serde::Serialize;

use super::formatting::format_bytes;
use super::{OutputOptions, Printable};
use crate::parse::{InterfaceConfig, InterfaceStats, InterfaceStatus, PingResult};

fn json_of<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

impl Printable for InterfaceConfig {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        writeln!(
            w,
            "{}: {}: <{}> mtu {} state {}",
            self.os_index, self.dev, self.flags_str, self.mtu, self.state
        )?;
        writeln!(w, "    link/{} {}", self.link_type, self.mac_address)?;
        if let Some((addr, prefix)) = self.ipv4() {
            writeln!(w, "    inet {}/{}", addr, prefix)?;
        }
        if let Some((addr, prefix)) = self.ipv6() {
            writeln!(w, "    inet6 {}/{}", addr, prefix)?;
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        json_of(self)
    }
}

impl Printable for InterfaceStats {
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()> {
        writeln!(w, "    RX: bytes packets errors dropped overrun mcast")?;
        writeln!(
            w,
            "    {} {} {} {} {} {}",
            self.rx_bytes,
            self.rx_packets,
            self.rx_errors,
            self.rx_dropped,
            self.rx_overrun,
            self.rx_mcast
        )?;
        writeln!(w, "    TX: bytes packets errors dropped carrier collsns")?;
        writeln!(
            w,
            "    {} {} {} {} {} {}",
            self.tx_bytes,
            self.tx_packets,
            self.tx_errors,
            self.tx_dropped,
            self.tx_carrier,
            self.tx_collisions
        )?;

        if opts.stats {
            writeln!(
                w,
                "    total: {} ({} packets, {} errors, {} dropped)",
                format_bytes(self.total_bytes()),
                self.total_packets(),
                self.total_errors(),
                self.total_dropped()
            )?;
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        json_of(self)
    }
}

impl Printable for InterfaceStatus {
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()> {
        self.config.print_text(w, opts)?;
        self.stats.print_text(w, opts)
    }

    fn to_json(&self) -> serde_json::Value {
        json_of(self)
    }
}

impl Printable for PingResult {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        write!(
            w,
            "{} packets transmitted, {} received",
            self.transmitted, self.received
        )?;
        if self.duplicates > 0 {
            write!(w, ", +{} duplicates", self.duplicates)?;
        }
        if self.errors > 0 {
            write!(w, ", +{} errors", self.errors)?;
        }
        writeln!(w, ", {}% packet loss, time {}ms", self.loss_pc, self.time_ms)
    }

    fn to_json(&self) -> serde_json::Value {
        json_of(self)
    }
}
