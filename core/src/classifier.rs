//! # Scope Classifier
//!
//! Decides whether a resolved hostname lies inside the authorized scope.
//!
//! Classification is a pure function of its inputs: no I/O, no logging. The
//! returned [`Classification`] carries everything the caller needs to report
//! and persist the outcome.
//!
//! By default only the first resolved address is checked
//! ([`RepresentativePolicy::FirstAddress`]). That assumes every address of a
//! hostname has the same network owner, which is a heuristic: CDN-fronted
//! hosts routinely break it. [`RepresentativePolicy::AnyAddress`] checks all
//! of them instead.

use std::fmt;
use std::net::Ipv4Addr;

use rayon::prelude::*;
use scopr_common::config::RepresentativePolicy;
use scopr_common::network::prefix::NetworkPrefix;
use scopr_common::network::resolution::ResolutionResult;
use scopr_common::network::scope::{ScopeEntry, ScopeList};

use crate::events::{EventSink, ScopeEvent};
use crate::matcher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The hostname resolved to no address. Terminal, not an error.
    Unresolved,
    /// `representative` lies inside `entry`, the first matching scope entry.
    InScope {
        representative: Ipv4Addr,
        entry: ScopeEntry,
    },
    OutOfScope,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub hostname: String,
    pub verdict: Verdict,
    /// Every address the hostname resolved to, in resolver order.
    pub resolved: Vec<Ipv4Addr>,
    /// The addresses that were matched against the scope.
    pub evaluated: Vec<Ipv4Addr>,
}

impl Classification {
    pub fn is_in_scope(&self) -> bool {
        matches!(self.verdict, Verdict::InScope { .. })
    }

    /// The address the verdict is based on.
    ///
    /// For an out-of-scope host this is the first evaluated address.
    pub fn representative(&self) -> Option<Ipv4Addr> {
        match &self.verdict {
            Verdict::Unresolved => None,
            Verdict::InScope { representative, .. } => Some(*representative),
            Verdict::OutOfScope => self.evaluated.first().copied(),
        }
    }

    /// Records to persist: the representative of an in-scope host, or every
    /// evaluated address of an out-of-scope one.
    pub fn records(&self) -> Vec<ClassificationRecord> {
        match &self.verdict {
            Verdict::Unresolved => Vec::new(),
            Verdict::InScope { representative, .. } => {
                vec![ClassificationRecord::new(&self.hostname, *representative, true)]
            }
            Verdict::OutOfScope => self
                .evaluated
                .iter()
                .map(|ip| ClassificationRecord::new(&self.hostname, *ip, false))
                .collect(),
        }
    }
}

/// One line of the keep or discard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRecord {
    pub hostname: String,
    pub ip: Ipv4Addr,
    pub matched: bool,
    pub organization: Option<String>,
    pub registrar: Option<String>,
}

impl ClassificationRecord {
    pub fn new(hostname: &str, ip: Ipv4Addr, matched: bool) -> Self {
        Self {
            hostname: hostname.to_string(),
            ip,
            matched,
            organization: None,
            registrar: None,
        }
    }

    /// Attaches ownership metadata obtained from an external lookup.
    pub fn with_registration(mut self, organization: Option<String>, registrar: Option<String>) -> Self {
        self.organization = organization;
        self.registrar = registrar;
        self
    }
}

impl fmt::Display for ClassificationRecord {
    /// `ip,hostname`, followed by `,organization,registrar` when either is known.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.ip, self.hostname)?;
        if self.organization.is_some() || self.registrar.is_some() {
            write!(
                f,
                ",{},{}",
                self.organization.as_deref().unwrap_or_default(),
                self.registrar.as_deref().unwrap_or_default()
            )?;
        }
        Ok(())
    }
}

/// Classifies with the default first-address policy.
pub fn classify(hostname: &str, resolved: &[Ipv4Addr], scope: &ScopeList) -> Classification {
    classify_with(hostname, resolved, scope, RepresentativePolicy::default())
}

pub fn classify_with(
    hostname: &str,
    resolved: &[Ipv4Addr],
    scope: &ScopeList,
    policy: RepresentativePolicy,
) -> Classification {
    let hostname = hostname.trim().to_string();

    if resolved.is_empty() {
        return Classification {
            hostname,
            verdict: Verdict::Unresolved,
            resolved: Vec::new(),
            evaluated: Vec::new(),
        };
    }

    let candidates: &[Ipv4Addr] = match policy {
        RepresentativePolicy::FirstAddress => &resolved[..1],
        RepresentativePolicy::AnyAddress => resolved,
    };

    for (idx, ip) in candidates.iter().enumerate() {
        if let Some(entry) = first_match(scope, *ip) {
            return Classification {
                hostname,
                verdict: Verdict::InScope {
                    representative: *ip,
                    entry,
                },
                resolved: resolved.to_vec(),
                evaluated: candidates[..=idx].to_vec(),
            };
        }
    }

    Classification {
        hostname,
        verdict: Verdict::OutOfScope,
        resolved: resolved.to_vec(),
        evaluated: candidates.to_vec(),
    }
}

pub fn classify_resolution(
    resolution: &ResolutionResult,
    scope: &ScopeList,
    policy: RepresentativePolicy,
) -> Classification {
    classify_with(&resolution.hostname, &resolution.addresses, scope, policy)
}

/// Classifies independent resolutions in parallel. Output order follows input order.
pub fn classify_batch(
    resolutions: &[ResolutionResult],
    scope: &ScopeList,
    policy: RepresentativePolicy,
) -> Vec<Classification> {
    resolutions
        .par_iter()
        .map(|resolution| classify_resolution(resolution, scope, policy))
        .collect()
}

/// Hands a classification to `sink`, flagging multi-address hostnames first.
pub fn report(classification: &Classification, sink: &mut dyn EventSink) {
    if classification.resolved.len() > 1 {
        sink.emit(ScopeEvent::MultipleAddresses {
            hostname: classification.hostname.clone(),
            addresses: classification.resolved.clone(),
        });
    }
    sink.emit(ScopeEvent::Classified(classification.clone()));
}

fn first_match(scope: &ScopeList, ip: Ipv4Addr) -> Option<ScopeEntry> {
    let query = ScopeEntry::Prefix(NetworkPrefix::host(ip));
    scope
        .iter()
        .find(|entry| matcher::matches(entry, &query))
        .copied()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
