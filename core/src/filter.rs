//! Validation of addresses that were known before reconnaissance started.

use std::net::Ipv4Addr;

use scopr_common::error::ScopeError;
use scopr_common::network::prefix::parse_dotted_quad;
use scopr_common::network::scope::ScopeList;

use crate::classifier::{Verdict, classify};
use crate::events::{EventSink, ScopeEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownPartition {
    pub in_scope: Vec<Ipv4Addr>,
    pub out_of_scope: Vec<Ipv4Addr>,
}

/// Splits `known` by scope membership, keeping input order on both sides.
pub fn partition_known(known: &[Ipv4Addr], scope: &ScopeList) -> KnownPartition {
    let mut partition = KnownPartition::default();
    for ip in known {
        match classify("", std::slice::from_ref(ip), scope).verdict {
            Verdict::InScope { .. } => partition.in_scope.push(*ip),
            _ => partition.out_of_scope.push(*ip),
        }
    }
    partition
}

/// Like [`partition_known`], reporting every rejected address to `sink`.
pub fn partition_known_reported(
    known: &[Ipv4Addr],
    scope: &ScopeList,
    sink: &mut dyn EventSink,
) -> KnownPartition {
    let partition = partition_known(known, scope);
    for addr in &partition.out_of_scope {
        sink.emit(ScopeEvent::KnownOutOfScope { addr: *addr });
    }
    partition
}

/// Parses a list of addresses, one per line. Blank lines are skipped and
/// anything else that is not a dotted-quad is an error.
pub fn parse_address_list(text: &str) -> Result<Vec<Ipv4Addr>, ScopeError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| parse_dotted_quad(line, line))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
