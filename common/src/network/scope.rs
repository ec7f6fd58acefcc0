//! # Scope Model
//!
//! Defines the authorized address space of an assessment.
//!
//! A scope file holds one entry per line, each of which can be:
//! * A single IPv4 address (`10.0.0.5`, a /32).
//! * A CIDR block (`192.168.1.0/24`).
//! * The wildcard `*`, which puts every address in scope.
//!
//! Blank lines are skipped. Any other line aborts loading.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::ScopeError;
use crate::network::prefix::NetworkPrefix;

pub const WILDCARD: &str = "*";

/// One authorized range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeEntry {
    /// Matches every address.
    Any,
    Prefix(NetworkPrefix),
}

impl ScopeEntry {
    pub fn as_prefix(&self) -> Option<&NetworkPrefix> {
        match self {
            ScopeEntry::Any => None,
            ScopeEntry::Prefix(prefix) => Some(prefix),
        }
    }
}

impl FromStr for ScopeEntry {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            WILDCARD => Ok(ScopeEntry::Any),
            expr => expr.parse().map(ScopeEntry::Prefix),
        }
    }
}

impl fmt::Display for ScopeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeEntry::Any => f.write_str(WILDCARD),
            ScopeEntry::Prefix(prefix) => prefix.fmt(f),
        }
    }
}

impl From<NetworkPrefix> for ScopeEntry {
    fn from(prefix: NetworkPrefix) -> Self {
        ScopeEntry::Prefix(prefix)
    }
}

/// Ordered, read-only list of scope entries.
///
/// An in-memory list may be empty and then matches nothing. Lists read from
/// text are rejected when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeList {
    entries: Vec<ScopeEntry>,
}

impl ScopeList {
    pub fn new(entries: Vec<ScopeEntry>) -> Self {
        Self { entries }
    }

    /// Parses scope file contents. `source_name` only appears in errors.
    pub fn parse(text: &str, source_name: &str) -> Result<Self, ScopeError> {
        let entries: Vec<ScopeEntry> = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| parse_line(line, idx + 1, source_name))
            .collect::<Result<_, _>>()?;

        if entries.is_empty() {
            return Err(ScopeError::EmptyScopeList {
                source_name: source_name.to_string(),
            });
        }

        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, ScopeError> {
        let text = fs::read_to_string(path).map_err(|source| ScopeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScopeEntry> {
        self.entries.iter()
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &NetworkPrefix> {
        self.entries.iter().filter_map(ScopeEntry::as_prefix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ScopeEntry> for ScopeList {
    fn from_iter<I: IntoIterator<Item = ScopeEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ScopeList {
    type Item = &'a ScopeEntry;
    type IntoIter = std::slice::Iter<'a, ScopeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn parse_line(line: &str, line_no: usize, source_name: &str) -> Result<ScopeEntry, ScopeError> {
    line.parse().map_err(|err| match err {
        ScopeError::MalformedNetworkExpression { expression, reason } => {
            ScopeError::MalformedNetworkExpression {
                expression,
                reason: format!("{reason} ({source_name}, line {line_no})"),
            }
        }
        other => other,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::Ipv4Addr;
    use tempfile::NamedTempFile;

    #[test]
    fn test_entry_from_str() {
        assert!(matches!(ScopeEntry::from_str("*"), Ok(ScopeEntry::Any)));
        assert!(matches!(ScopeEntry::from_str(" * "), Ok(ScopeEntry::Any)));
        assert!(matches!(
            ScopeEntry::from_str("10.0.0.0/8"),
            Ok(ScopeEntry::Prefix(_))
        ));
        assert!(matches!(
            ScopeEntry::from_str("10.0.0.1"),
            Ok(ScopeEntry::Prefix(p)) if p.prefix_len() == 32
        ));

        assert!(ScopeEntry::from_str("**").is_err());
        assert!(ScopeEntry::from_str("lan").is_err());
        assert!(ScopeEntry::from_str("10.0.0.0/33").is_err());
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(ScopeEntry::Any.to_string(), "*");
        assert_eq!(
            ScopeEntry::from_str("10.0.0.1").unwrap().to_string(),
            "10.0.0.1/32"
        );
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = "192.168.1.0/24\n\n   \n10.0.0.5\r\n*\n";
        let scope = ScopeList::parse(text, "inline").unwrap();

        assert_eq!(scope.len(), 3);
        assert_eq!(scope.prefixes().count(), 2);
        assert_eq!(
            scope.iter().nth(1).and_then(ScopeEntry::as_prefix).map(|p| p.addr()),
            Some(Ipv4Addr::new(10, 0, 0, 5))
        );
        assert_eq!(scope.iter().last(), Some(&ScopeEntry::Any));
    }

    #[test]
    fn test_parse_fails_fast_on_malformed_line() {
        let text = "192.168.1.0/24\n999.1.1.1/24\n10.0.0.0/8\n";
        let err = ScopeList::parse(text, "cidr.txt").unwrap_err();

        match err {
            ScopeError::MalformedNetworkExpression { expression, reason } => {
                assert_eq!(expression, "999.1.1.1/24");
                assert!(reason.contains("line 2"), "unexpected reason: {reason}");
                assert!(reason.contains("cidr.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_source() {
        for text in ["", "\n\n", "   \n\t\n"] {
            let result = ScopeList::parse(text, "empty.txt");
            assert!(matches!(result, Err(ScopeError::EmptyScopeList { .. })));
        }
    }

    #[test]
    fn test_in_memory_list_may_be_empty() {
        let scope = ScopeList::new(Vec::new());
        assert!(scope.is_empty());
        assert_eq!(scope.prefixes().count(), 0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "10.10.0.0/16").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "172.16.5.4").unwrap();

        let scope = ScopeList::load(file.path()).unwrap();
        assert_eq!(scope.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ScopeList::load(Path::new("/nonexistent/scopr/cidr.txt"));
        assert!(matches!(result, Err(ScopeError::Io { .. })));
    }
}
