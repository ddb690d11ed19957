//! Parsers for `ip` and `ping` text output.
//!
//! The output formats are loosely structured, so there is no grammar for a
//! whole dump. Each parser is a small winnow combinator for one fragment
//! (a link header, an `inet` block, a counters line) tried at every place the
//! fragment could start. Optional fragments are searched independently and
//! yield `Some`/`None`; the results are merged into one record.
//!
//! # Example
//!
//! ```
//! use iptopo::parse::parse_link_stats;
//!
//! let out = "2: eth0: <UP> mtu 1500\n    RX: bytes packets errors dropped overrun mcast\n    100 50 0 0 0 2\n    TX: bytes packets errors dropped carrier collsns\n    200 60 1 0 0 0\n";
//! let stats = parse_link_stats(out).unwrap();
//! assert_eq!(stats.rx_mcast, 2);
//! assert_eq!(stats.tx_errors, 1);
//! ```

mod ping;
mod show;
mod stats;

pub use ping::{PingResult, parse_ping};
pub use show::{InterfaceConfig, parse_addr_show};
pub use stats::{InterfaceStats, parse_link_stats};

use serde::Serialize;
use winnow::error::{ContextError, ErrMode};

/// Result type for winnow parsers.
pub type PResult<T> = core::result::Result<T, ErrMode<ContextError>>;

/// Configuration and counters of one device, as returned by a show query.
///
/// Serializes as a single flat object: the configuration fields with the
/// statistics fields added on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceStatus {
    #[serde(flatten)]
    pub config: InterfaceConfig,
    #[serde(flatten)]
    pub stats: InterfaceStats,
}

impl InterfaceStatus {
    /// Device name.
    pub fn dev(&self) -> &str {
        &self.config.dev
    }
}

/// Every suffix of `text` that begins a line, the first line included.
pub(crate) fn line_starts(text: &str) -> impl Iterator<Item = &str> {
    std::iter::once(text).chain(text.match_indices('\n').map(|(i, _)| &text[i + 1..]))
}

/// Every suffix of `text` that begins with `token` as a whole word start.
///
/// The token must sit at the start of the text or right after whitespace,
/// so `inet6` never matches inside `xinet6`.
pub(crate) fn word_starts<'a>(text: &'a str, token: &'a str) -> impl Iterator<Item = &'a str> {
    text.match_indices(token).filter_map(move |(i, _)| {
        let bounded = text[..i].chars().next_back().is_none_or(char::is_whitespace);
        bounded.then(|| &text[i..])
    })
}

/// The rest of `text` after each `header` that is not at offset 0,
/// starting on the line below the header.
pub(crate) fn after_headers<'a>(text: &'a str, header: &'a str) -> impl Iterator<Item = &'a str> {
    text.match_indices(header)
        .filter(|(i, _)| *i > 0)
        .filter_map(move |(i, _)| {
            let after = &text[i + header.len()..];
            after.find('\n').map(|nl| &after[nl + 1..])
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_starts() {
        let lines: Vec<_> = line_starts("a\nb\n").collect();
        assert_eq!(lines, ["a\nb\n", "b\n", ""]);
    }

    #[test]
    fn test_word_starts() {
        let text = "inet6 ::1/128 xinet6 fe80::1/64\n    inet6 2001:db8::1/64";
        let hits: Vec<_> = word_starts(text, "inet6")
            .map(|s| s.split_whitespace().nth(1).unwrap())
            .collect();
        assert_eq!(hits, ["::1/128", "2001:db8::1/64"]);
    }

    #[test]
    fn test_after_headers_skips_offset_zero() {
        let hits: Vec<_> = after_headers("RX: a\n1\nx RX: b\n2", "RX:").collect();
        assert_eq!(hits, ["2"]);
    }
}
