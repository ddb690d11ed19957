//! `ping` summary line.

use serde::Serialize;
use winnow::ascii::{dec_uint, digit1};
use winnow::combinator::{delimited, opt, preceded};
use winnow::prelude::*;

use super::PResult;

/// Summary of a ping run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PingResult {
    pub transmitted: u64,
    pub received: u64,
    /// Zero when the summary has no `+N duplicates` clause.
    pub duplicates: u64,
    /// Zero when the summary has no `+N errors` clause.
    pub errors: u64,
    /// Packet loss in percent, fraction truncated.
    pub loss_pc: u64,
    /// Total run time in milliseconds.
    pub time_ms: u64,
}

impl PingResult {
    /// Check if every echo request was answered.
    pub fn is_lossless(&self) -> bool {
        self.transmitted > 0 && self.received == self.transmitted
    }
}

/// `5 packets transmitted, 5 received, [+1 duplicates, ][+2 errors, ]0% packet loss, time 4005ms`
///
/// The loss may carry a fraction (`33.3333%`); it is truncated.
fn summary(input: &mut &str) -> PResult<PingResult> {
    let transmitted: u64 = dec_uint.parse_next(input)?;
    " packets transmitted, ".parse_next(input)?;
    let received: u64 = dec_uint.parse_next(input)?;
    " received,".parse_next(input)?;
    let duplicates: Option<u64> =
        opt(delimited(" +", dec_uint, " duplicates,")).parse_next(input)?;
    let errors: Option<u64> = opt(delimited(" +", dec_uint, " errors,")).parse_next(input)?;
    ' '.parse_next(input)?;
    let loss_pc: u64 = dec_uint.parse_next(input)?;
    opt(preceded('.', digit1)).parse_next(input)?;
    "% packet loss, time ".parse_next(input)?;
    let time_ms: u64 = dec_uint.parse_next(input)?;
    "ms".parse_next(input)?;

    Ok(PingResult {
        transmitted,
        received,
        duplicates: duplicates.unwrap_or_default(),
        errors: errors.unwrap_or_default(),
        loss_pc,
        time_ms,
    })
}

/// Find the summary line in `ping` output.
///
/// Each line is matched whole (ignoring trailing whitespace); the first
/// matching line wins.
pub fn parse_ping(text: &str) -> Option<PingResult> {
    text.lines().find_map(|line| summary.parse(line.trim_end()).ok())
}
