//! Prefix containment.
//!
//! Two prefixes match when the shorter one is a leading part of the longer
//! one, i.e. one range is a sub-range of (or equal to) the other. The test is
//! symmetric, so a /32 query address can be checked against a wider scope
//! entry in either argument order.

use scopr_common::error::ScopeError;
use scopr_common::network::prefix::{NetworkPrefix, mask_for};
use scopr_common::network::scope::ScopeEntry;

/// True when either entry's range contains the other's.
///
/// A wildcard on either side always matches.
pub fn matches(a: &ScopeEntry, b: &ScopeEntry) -> bool {
    match (a, b) {
        (ScopeEntry::Any, _) | (_, ScopeEntry::Any) => true,
        (ScopeEntry::Prefix(a), ScopeEntry::Prefix(b)) => prefixes_overlap(a, b),
    }
}

/// Compares both addresses on the bits covered by the shorter prefix.
pub fn prefixes_overlap(a: &NetworkPrefix, b: &NetworkPrefix) -> bool {
    let mask = mask_for(a.prefix_len().min(b.prefix_len()));
    (a.value() ^ b.value()) & mask == 0
}

/// Parses both expressions and matches them.
pub fn matches_expr(a: &str, b: &str) -> Result<bool, ScopeError> {
    let a: ScopeEntry = a.parse()?;
    let b: ScopeEntry = b.parse()?;
    Ok(matches(&a, &b))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
