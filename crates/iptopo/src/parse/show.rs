//! `ip addr list dev <dev>` output.

use std::net::{Ipv4Addr, Ipv6Addr};

use serde::Serialize;
use winnow::ascii::{dec_uint, multispace0, space1};
use winnow::prelude::*;
use winnow::token::{take_till, take_until, take_while};

use super::{PResult, line_starts, word_starts};
use crate::error::{Error, Result};

/// Interface configuration as reported by `ip addr list`.
///
/// Address blocks are present only when the interface has an address of
/// that family; absent blocks are left out of the serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceConfig {
    /// Kernel interface index.
    pub os_index: u32,
    /// Device name, including any `@parent` suffix.
    pub dev: String,
    /// Raw comma-joined flags from between the angle brackets.
    pub flags_str: String,
    pub mtu: u32,
    /// Operational state (`UP`, `DOWN`, `UNKNOWN`, ...).
    pub state: String,
    /// Link-layer type (`ether`, `loopback`, ...).
    pub link_type: String,
    pub mac_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inet: Option<Ipv4Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inet_mask: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inet6: Option<Ipv6Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inet6_mask: Option<u8>,
}

impl InterfaceConfig {
    /// Individual interface flags.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags_str.split(',').filter(|f| !f.is_empty())
    }

    /// Check if the `UP` flag is set (administratively up).
    pub fn is_up(&self) -> bool {
        self.flags().any(|f| f == "UP")
    }

    /// IPv4 address and prefix length, if configured.
    pub fn ipv4(&self) -> Option<(Ipv4Addr, u8)> {
        self.inet.zip(self.inet_mask)
    }

    /// IPv6 address and prefix length, if configured.
    pub fn ipv6(&self) -> Option<(Ipv6Addr, u8)> {
        self.inet6.zip(self.inet6_mask)
    }
}

/// The mandatory first-lines group of a link dump.
#[derive(Debug)]
struct LinkHeader<'a> {
    os_index: u32,
    dev: &'a str,
    flags_str: &'a str,
    mtu: u32,
    state: &'a str,
    link_type: &'a str,
    mac_address: &'a str,
}

/// `2: eth0: <FLAGS> ... mtu 1500 ... state UP ... link/ether aa:bb:...`
fn link_header<'a>(input: &mut &'a str) -> PResult<LinkHeader<'a>> {
    multispace0.parse_next(input)?;
    let os_index: u32 = dec_uint.parse_next(input)?;
    ':'.parse_next(input)?;
    space1.parse_next(input)?;
    let dev: &str = take_while(2.., |c: char| !c.is_whitespace())
        .verify(|s: &str| s.ends_with(':'))
        .parse_next(input)?;
    space1.parse_next(input)?;
    '<'.parse_next(input)?;
    let flags_str: &str = take_until(0.., ">").parse_next(input)?;
    '>'.parse_next(input)?;

    take_until(0.., "mtu").parse_next(input)?;
    "mtu".parse_next(input)?;
    space1.parse_next(input)?;
    let mtu: u32 = dec_uint.parse_next(input)?;

    take_until(1.., "state").parse_next(input)?;
    "state".parse_next(input)?;
    space1.parse_next(input)?;
    let state: &str = take_while(1.., |c: char| c.is_ascii_uppercase()).parse_next(input)?;

    take_until(0.., "link/").parse_next(input)?;
    "link/".parse_next(input)?;
    let link_type: &str =
        take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)?;
    space1.parse_next(input)?;
    let mac_address: &str = take_while(1.., |c: char| !c.is_whitespace()).parse_next(input)?;

    Ok(LinkHeader {
        os_index,
        dev: dev.strip_suffix(':').unwrap_or(dev),
        flags_str,
        mtu,
        state,
        link_type,
        mac_address,
    })
}

fn addr_token<'a>(input: &mut &'a str) -> PResult<&'a str> {
    take_while(1.., |c: char| c != '/' && !c.is_whitespace()).parse_next(input)
}

/// `inet 10.0.0.1/24`
fn inet_block(input: &mut &str) -> PResult<(Ipv4Addr, u8)> {
    "inet".parse_next(input)?;
    space1.parse_next(input)?;
    let addr: Ipv4Addr = addr_token.parse_to().parse_next(input)?;
    '/'.parse_next(input)?;
    let prefix: u8 = take_while(1..=2, |c: char| c.is_ascii_digit())
        .parse_to()
        .verify(|p: &u8| *p <= 32)
        .parse_next(input)?;
    Ok((addr, prefix))
}

/// `inet6 2001:db8::1/64`
fn inet6_block(input: &mut &str) -> PResult<(Ipv6Addr, u8)> {
    "inet6".parse_next(input)?;
    space1.parse_next(input)?;
    let addr: Ipv6Addr = addr_token.parse_to().parse_next(input)?;
    '/'.parse_next(input)?;
    let prefix: u8 = take_while(1..=3, |c: char| c.is_ascii_digit())
        .parse_to()
        .verify(|p: &u8| *p <= 128)
        .parse_next(input)?;
    Ok((addr, prefix))
}

/// `Device "eth7" does not exist.`
fn missing_device<'a>(input: &mut &'a str) -> PResult<&'a str> {
    "Device \"".parse_next(input)?;
    let dev: &str = take_till(1.., '"').parse_next(input)?;
    "\" does not exist".parse_next(input)?;
    Ok(dev)
}

/// Parse `ip addr list dev <dev>` output.
///
/// Returns `Ok(None)` when the tool reports that the device does not exist.
/// A dump without the mandatory link header is a parse error; the `inet` and
/// `inet6` blocks are optional.
pub fn parse_addr_show(text: &str) -> Result<Option<InterfaceConfig>> {
    if let Some(dev) = word_starts(text, "Device").find_map(|mut s| missing_device(&mut s).ok())
    {
        tracing::debug!(%dev, "device does not exist");
        return Ok(None);
    }

    let header = line_starts(text)
        .find_map(|mut s| link_header(&mut s).ok())
        .ok_or_else(|| Error::Parse(format!("no link header in output: {:?}", text)))?;

    let ipv4 = word_starts(text, "inet").find_map(|mut s| inet_block(&mut s).ok());
    let ipv6 = word_starts(text, "inet6").find_map(|mut s| inet6_block(&mut s).ok());

    tracing::debug!(
        dev = header.dev,
        ipv4 = ipv4.is_some(),
        ipv6 = ipv6.is_some(),
        "parsed interface config"
    );

    Ok(Some(InterfaceConfig {
        os_index: header.os_index,
        dev: header.dev.to_string(),
        flags_str: header.flags_str.to_string(),
        mtu: header.mtu,
        state: header.state.to_string(),
        link_type: header.link_type.to_string(),
        mac_address: header.mac_address.to_string(),
        inet: ipv4.map(|(a, _)| a),
        inet_mask: ipv4.map(|(_, p)| p),
        inet6: ipv6.map(|(a, _)| a),
        inet6_mask: ipv6.map(|(_, p)| p),
    }))
}
