//! Address enumeration.
//!
//! Turns prefixes into individual addresses for tools that cannot consume
//! CIDR notation. Network and broadcast addresses are left out for prefixes
//! shorter than /31.

use std::net::Ipv4Addr;

use scopr_common::network::prefix::NetworkPrefix;
use scopr_common::network::range::Ipv4Range;
use scopr_common::network::scope::{ScopeEntry, ScopeList};

use crate::events::{EventSink, ScopeEvent};

/// Expansions above this many addresses are reported as
/// [`ScopeEvent::LargeExpansion`].
pub const LARGE_EXPANSION_THRESHOLD: u64 = 255;

/// The host addresses of one prefix, in ascending order.
///
/// Holds no addresses itself; [`Enumeration::iter`] can be called any number
/// of times and always starts from the lowest address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumeration {
    prefix: NetworkPrefix,
    hosts: Ipv4Range,
}

impl Enumeration {
    pub fn prefix(&self) -> &NetworkPrefix {
        &self.prefix
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone + use<> {
        self.hosts.iter()
    }

    pub fn len(&self) -> u64 {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn is_oversized(&self) -> bool {
        self.len() > LARGE_EXPANSION_THRESHOLD
    }
}

impl IntoIterator for &Enumeration {
    type Item = Ipv4Addr;
    type IntoIter = Box<dyn DoubleEndedIterator<Item = Ipv4Addr>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

pub fn enumerate(prefix: &NetworkPrefix) -> Enumeration {
    Enumeration {
        prefix: *prefix,
        hosts: Ipv4Range::hosts(prefix),
    }
}

/// The enumerations of a whole scope list, in list order.
///
/// Like [`Enumeration`] this holds no addresses. Writers walk
/// [`Expansion::iter`] and never need the full list in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    enumerations: Vec<Enumeration>,
}

impl Expansion {
    pub fn iter(&self) -> impl Iterator<Item = Ipv4Addr> + Clone + '_ {
        self.enumerations.iter().flat_map(Enumeration::iter)
    }

    /// Total number of addresses across all prefixes.
    pub fn len(&self) -> u64 {
        self.enumerations.iter().map(Enumeration::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Plans the expansion of every prefix of `scope`.
///
/// Wildcard entries stand for the whole address space and are skipped.
/// Oversized prefixes are reported but still expanded.
pub fn plan_expansion(scope: &ScopeList, sink: &mut dyn EventSink) -> Expansion {
    let mut enumerations = Vec::new();

    for entry in scope {
        let prefix = match entry {
            ScopeEntry::Any => {
                sink.emit(ScopeEvent::WildcardSkipped);
                continue;
            }
            ScopeEntry::Prefix(prefix) => prefix,
        };

        let enumeration = enumerate(prefix);
        let count = enumeration.len();
        if enumeration.is_oversized() {
            sink.emit(ScopeEvent::LargeExpansion {
                prefix: *enumeration.prefix(),
                count,
            });
        }
        sink.emit(ScopeEvent::Expanded {
            prefix: *enumeration.prefix(),
            count,
        });
        enumerations.push(enumeration);
    }

    Expansion { enumerations }
}

/// Expands every prefix of `scope` into one list, in list order.
pub fn expand_scope(scope: &ScopeList, sink: &mut dyn EventSink) -> Vec<Ipv4Addr> {
    plan_expansion(scope, sink).iter().collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
