use std::net::Ipv4Addr;

use colored::*;
use scopr_common::network::prefix::NetworkPrefix;
use scopr_common::{debug, success, warn};
use scopr_core::classifier::{Classification, Verdict};
use scopr_core::events::{EventSink, ScopeEvent};

use crate::terminal::colors;

/// Turns core events into terminal log lines.
pub struct TerminalSink;

impl EventSink for TerminalSink {
    fn emit(&mut self, event: ScopeEvent) {
        match event {
            ScopeEvent::Classified(classification) => log_classification(&classification),
            ScopeEvent::MultipleAddresses { hostname, addresses } => {
                let joined: Vec<String> = addresses.iter().map(|ip| ip_str(ip).to_string()).collect();
                debug!("{} resolves to multiple IPs: {}", hostname.yellow(), joined.join(", "));
            }
            ScopeEvent::Expanded { prefix, count } => {
                debug!("Adding {} IPs for CIDR {}", count_str(count), prefix_str(&prefix));
            }
            ScopeEvent::LargeExpansion { prefix, count } => {
                warn!("CIDR {} amounts to {} IP addresses", prefix_str(&prefix), count_str(count));
            }
            ScopeEvent::WildcardSkipped => {
                warn!("Wildcard scope entry cannot be expanded into addresses, skipping it");
            }
            ScopeEvent::KnownOutOfScope { addr } => {
                warn!("IP {} does not fall within the given scope, removing it", ip_str(&addr));
            }
        }
    }
}

fn log_classification(classification: &Classification) {
    let hostname = &classification.hostname;
    match &classification.verdict {
        Verdict::Unresolved => {
            debug!("{} could not be resolved", hostname.yellow());
        }
        Verdict::InScope { representative, entry } => {
            success!("{}\t{}", ip_str(representative), hostname);
            debug!("{} matched scope entry {}", representative, entry);
        }
        Verdict::OutOfScope => {
            for ip in &classification.evaluated {
                debug!("Domain {} not in scope (IP: {})", hostname.red(), ip_str(ip));
            }
        }
    }
}

fn ip_str(ip: &Ipv4Addr) -> ColoredString {
    ip.to_string().color(colors::IPV4_ADDR)
}

fn prefix_str(prefix: &NetworkPrefix) -> String {
    format!(
        "{}/{}",
        prefix.addr().to_string().color(colors::IPV4_ADDR),
        prefix.prefix_len().to_string().color(colors::IPV4_PREFIX)
    )
}

fn count_str(count: u64) -> ColoredString {
    count.to_string().color(colors::ACCENT).bold()
}
