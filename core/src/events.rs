//! Structured events.
//!
//! The core never writes to a terminal or a global logger. Callers pass an
//! [`EventSink`] and decide themselves how (and whether) to surface what
//! happened.

use std::net::Ipv4Addr;

use scopr_common::network::prefix::NetworkPrefix;

use crate::classifier::Classification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeEvent {
    /// A hostname received its verdict.
    Classified(Classification),
    /// A hostname resolved to more than one address.
    MultipleAddresses {
        hostname: String,
        addresses: Vec<Ipv4Addr>,
    },
    /// A prefix was expanded into individual addresses.
    Expanded { prefix: NetworkPrefix, count: u64 },
    /// A prefix expanded to more addresses than downstream tools handle well.
    /// Advisory only.
    LargeExpansion { prefix: NetworkPrefix, count: u64 },
    /// A wildcard entry was left out of an expansion.
    WildcardSkipped,
    /// A known address turned out to lie outside the scope.
    KnownOutOfScope { addr: Ipv4Addr },
}

pub trait EventSink {
    fn emit(&mut self, event: ScopeEvent);
}

impl EventSink for Vec<ScopeEvent> {
    fn emit(&mut self, event: ScopeEvent) {
        self.push(event);
    }
}
