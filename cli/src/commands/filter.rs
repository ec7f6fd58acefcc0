use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use scopr_common::network::scope::ScopeList;
use scopr_common::success;
use scopr_core::filter::{KnownPartition, parse_address_list, partition_known_reported};

use crate::project;
use crate::terminal::events::TerminalSink;

/// Prints the known addresses that lie in scope to stdout.
pub fn filter(known_ips: &Path, cidr_file: &Path) -> anyhow::Result<()> {
    let scope = ScopeList::load(cidr_file)
        .with_context(|| format!("loading scope from {}", cidr_file.display()))?;
    let partition = partition_file(known_ips, &scope)?;

    project::write_addresses_to(io::stdout().lock(), partition.in_scope.iter().copied())
        .context("writing addresses to stdout")?;
    success!(
        "{} known IPs in scope, {} removed",
        partition.in_scope.len(),
        partition.out_of_scope.len()
    );
    Ok(())
}

/// Reads a known-address file and splits it by scope, reporting rejects.
pub fn partition_file(known_ips: &Path, scope: &ScopeList) -> anyhow::Result<KnownPartition> {
    let text = fs::read_to_string(known_ips)
        .with_context(|| format!("reading known IPs from {}", known_ips.display()))?;
    let known = parse_address_list(&text)
        .with_context(|| format!("parsing known IPs from {}", known_ips.display()))?;

    Ok(partition_known_reported(&known, scope, &mut TerminalSink))
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
    use std::net::Ipv4Addr;
    use tempfile::tempdir;

    #[test]
    fn partition_file_splits_known_addresses() {
        let dir = tempdir().unwrap();
        let known = dir.path().join("known.txt");
        fs::write(&known, "10.0.0.1\n\n8.8.4.4\n").unwrap();
        let scope = ScopeList::parse("10.0.0.0/8", "inline").unwrap();

        let partition = partition_file(&known, &scope).unwrap();

        assert_eq!(partition.in_scope, vec![Ipv4Addr::new(10, 0, 0, 1)]);
        assert_eq!(partition.out_of_scope, vec![Ipv4Addr::new(8, 8, 4, 4)]);
    }

    #[test]
    fn partition_file_missing() {
        let scope = ScopeList::parse("10.0.0.0/8", "inline").unwrap();
        assert!(partition_file(Path::new("/nonexistent/known.txt"), &scope).is_err());
    }
}
