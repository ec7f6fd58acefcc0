use std::net::Ipv4Addr;

use crate::error::ScopeError;
use crate::network::prefix::parse_dotted_quad;

/// A hostname together with the addresses it resolved to.
///
/// No addresses means the name could not be resolved, which is a valid
/// outcome rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub hostname: String,
    pub addresses: Vec<Ipv4Addr>,
}

impl ResolutionResult {
    pub fn new(hostname: &str, addresses: Vec<Ipv4Addr>) -> Self {
        Self {
            hostname: hostname.trim().to_string(),
            addresses,
        }
    }

    pub fn unresolved(hostname: &str) -> Self {
        Self::new(hostname, Vec::new())
    }

    /// Parses resolver output: one dotted-quad per line, blank lines ignored.
    /// An empty string yields an unresolved result.
    pub fn parse(hostname: &str, raw: &str) -> Result<Self, ScopeError> {
        if raw.trim().is_empty() {
            return Ok(Self::unresolved(hostname));
        }

        let addresses = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| parse_dotted_quad(line, line))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(hostname, addresses))
    }

    pub fn is_resolved(&self) -> bool {
        !self.addresses.is_empty()
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
