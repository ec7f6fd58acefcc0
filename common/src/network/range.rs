//! # IPv4 Range Model
//!
//! Inclusive ranges of IPv4 addresses, used to describe the span of a
//! [`NetworkPrefix`] and to walk it address by address.

use std::net::Ipv4Addr;

use crate::network::prefix::NetworkPrefix;

/// Represents a continuous range of IPv4 addresses, inclusive.
///
/// A range whose start lies after its end is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// Usable host addresses of the prefix.
    ///
    /// Network and broadcast addresses are dropped for prefixes shorter than
    /// /31; a /31 or /32 has no distinct network or broadcast address.
    pub fn hosts(prefix: &NetworkPrefix) -> Self {
        let network = prefix.network();
        let broadcast = prefix.broadcast();

        if prefix.prefix_len() >= 31 {
            return Self::new(Ipv4Addr::from(network), Ipv4Addr::from(broadcast));
        }
        Self::new(
            Ipv4Addr::from(network + 1),
            Ipv4Addr::from(broadcast - 1),
        )
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone + use<> {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from)
    }

    /// Number of addresses, which for a /0 exceeds `u32::MAX`.
    pub fn len(&self) -> u64 {
        let start = u64::from(u32::from(self.start_addr));
        let end = u64::from(u32::from(self.end_addr));
        if start > end { 0 } else { end - start + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
