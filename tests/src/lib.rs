//! Shared fixtures for the end-to-end scope tests.

use std::net::Ipv4Addr;

use scopr_common::network::prefix::NetworkPrefix;
use scopr_common::network::scope::ScopeList;

/// Parses an inline scope list. Panics on malformed input.
pub fn scope(text: &str) -> ScopeList {
    ScopeList::parse(text, "fixture").unwrap_or_else(|err| panic!("bad fixture scope: {err}"))
}

pub fn prefix(expr: &str) -> NetworkPrefix {
    expr.parse()
        .unwrap_or_else(|err| panic!("bad fixture prefix {expr}: {err}"))
}

pub fn ip(expr: &str) -> Ipv4Addr {
    expr.parse()
        .unwrap_or_else(|err| panic!("bad fixture address {expr}: {err}"))
}

/// Prefixes covering short, long and odd lengths, including both ends of the address space.
pub const SAMPLE_PREFIXES: &[&str] = &[
    "0.0.0.0/0",
    "10.0.0.0/8",
    "10.1.0.0/16",
    "10.1.2.0/23",
    "10.1.2.0/24",
    "10.1.2.128/25",
    "10.1.2.200/31",
    "10.1.2.201",
    "172.16.0.0/12",
    "192.168.0.0/16",
    "192.168.1.1",
    "255.255.255.255",
];
