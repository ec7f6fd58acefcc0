//! # Network Prefix
//!
//! An IPv4 address paired with a prefix length, e.g. `192.168.1.0/24`.
//!
//! A bare address (`10.0.0.5`) is shorthand for a single host and parses as a
//! `/32`. The address is stored as written; host bits are only masked off when
//! a comparison or enumeration needs them.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::ScopeError;

pub const MAX_PREFIX_LEN: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkPrefix {
    value: u32,
    len: u8,
}

impl NetworkPrefix {
    /// A single-host prefix.
    pub fn host(addr: Ipv4Addr) -> Self {
        Self {
            value: u32::from(addr),
            len: MAX_PREFIX_LEN,
        }
    }

    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.value)
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    pub fn mask(&self) -> u32 {
        mask_for(self.len)
    }

    /// Address with every host bit cleared.
    pub fn network(&self) -> u32 {
        self.value & self.mask()
    }

    /// Address with every host bit set.
    pub fn broadcast(&self) -> u32 {
        self.network() | !self.mask()
    }
}

/// Netmask with the top `len` bits set. `len` must not exceed 32.
pub fn mask_for(len: u8) -> u32 {
    match len {
        0 => 0,
        _ => u32::MAX << (MAX_PREFIX_LEN - len),
    }
}

impl FromStr for NetworkPrefix {
    type Err = ScopeError;

    /// Parses `a.b.c.d` or `a.b.c.d/len`.
    ///
    /// Octets must be plain decimal numbers in 0-255, the length a plain
    /// decimal number in 0-32. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expr = s.trim();

        let (addr_str, len) = match expr.split_once('/') {
            Some((addr_str, len_str)) => (addr_str, parse_prefix_len(expr, len_str)?),
            None => (expr, MAX_PREFIX_LEN),
        };

        let addr = parse_dotted_quad(expr, addr_str)?;
        Ok(Self {
            value: u32::from(addr),
            len,
        })
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr(), self.len)
    }
}

impl From<Ipv4Addr> for NetworkPrefix {
    fn from(addr: Ipv4Addr) -> Self {
        Self::host(addr)
    }
}

/// Parses a dotted-quad address, reporting errors against `expr`.
pub fn parse_dotted_quad(expr: &str, addr_str: &str) -> Result<Ipv4Addr, ScopeError> {
    let parts: Vec<&str> = addr_str.split('.').collect();
    if parts.len() != 4 {
        return Err(ScopeError::malformed(
            expr,
            format!("expected 4 octets, found {}", parts.len()),
        ));
    }

    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(parts) {
        *slot = parse_decimal(part)
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| ScopeError::malformed(expr, format!("invalid octet '{part}'")))?;
    }

    Ok(Ipv4Addr::from(octets))
}

fn parse_prefix_len(expr: &str, len_str: &str) -> Result<u8, ScopeError> {
    parse_decimal(len_str)
        .filter(|len| *len <= u32::from(MAX_PREFIX_LEN))
        .map(|len| len as u8)
        .ok_or_else(|| ScopeError::malformed(expr, format!("invalid prefix length '{len_str}'")))
}

// `str::parse` accepts a leading '+', which is not valid in an address.
fn parse_decimal(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
