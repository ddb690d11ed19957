//! `ip -s link list dev <dev>` counters.

use serde::Serialize;
use winnow::ascii::{dec_uint, multispace0, multispace1};
use winnow::prelude::*;

use super::{PResult, after_headers};

/// Interface counters from the `RX:`/`TX:` blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceStats {
    pub rx_bytes: u64,
    pub rx_packets: u64,
    pub rx_errors: u64,
    pub rx_dropped: u64,
    pub rx_overrun: u64,
    pub rx_mcast: u64,
    pub tx_bytes: u64,
    pub tx_packets: u64,
    pub tx_errors: u64,
    pub tx_dropped: u64,
    pub tx_carrier: u64,
    pub tx_collisions: u64,
}

impl InterfaceStats {
    fn from_counters(rx: [u64; 6], tx: [u64; 6]) -> Self {
        let [rx_bytes, rx_packets, rx_errors, rx_dropped, rx_overrun, rx_mcast] = rx;
        let [tx_bytes, tx_packets, tx_errors, tx_dropped, tx_carrier, tx_collisions] = tx;
        Self {
            rx_bytes,
            rx_packets,
            rx_errors,
            rx_dropped,
            rx_overrun,
            rx_mcast,
            tx_bytes,
            tx_packets,
            tx_errors,
            tx_dropped,
            tx_carrier,
            tx_collisions,
        }
    }

    /// Get total bytes (rx + tx).
    pub fn total_bytes(&self) -> u64 {
        self.rx_bytes.saturating_add(self.tx_bytes)
    }

    /// Get total packets (rx + tx).
    pub fn total_packets(&self) -> u64 {
        self.rx_packets.saturating_add(self.tx_packets)
    }

    /// Get total errors (rx + tx).
    pub fn total_errors(&self) -> u64 {
        self.rx_errors.saturating_add(self.tx_errors)
    }

    /// Get total dropped (rx + tx).
    pub fn total_dropped(&self) -> u64 {
        self.rx_dropped.saturating_add(self.tx_dropped)
    }
}

/// Six whitespace-separated counters, leading whitespace allowed.
fn counters(input: &mut &str) -> PResult<[u64; 6]> {
    multispace0.parse_next(input)?;
    let mut values = [0u64; 6];
    for (i, slot) in values.iter_mut().enumerate() {
        if i > 0 {
            multispace1.parse_next(input)?;
        }
        *slot = dec_uint.parse_next(input)?;
    }
    Ok(values)
}

/// Parse the counters out of `ip -s link list` output.
///
/// An `RX:` header must be preceded by at least one character and followed,
/// on the next line, by six integers. A `TX:` header and its six integers
/// must follow somewhere after that. Returns `None` if either block is
/// missing or malformed.
pub fn parse_link_stats(text: &str) -> Option<InterfaceStats> {
    for rx_block in after_headers(text, "RX:") {
        let mut rest = rx_block;
        let Ok(rx) = counters(&mut rest) else {
            continue;
        };
        for tx_block in after_headers(rest, "TX:") {
            let mut tail = tx_block;
            if let Ok(tx) = counters(&mut tail) {
                return Some(InterfaceStats::from_counters(rx, tx));
            }
        }
    }
    tracing::trace!("no RX/TX counter blocks found");
    None
}
