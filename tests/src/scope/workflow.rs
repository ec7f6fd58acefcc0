#![cfg(test)]
use std::fs;

use scopr_common::network::scope::ScopeList;
use scopr_core::classifier::{self, Verdict};
use scopr_core::enumerate;
use scopr_core::events::ScopeEvent;
use scopr_core::filter;
use scopr_integration_tests::ip;
use tempfile::tempdir;

/// Scope file on disk, through expansion, known-address filtering and
/// classification of a resolved hostname.
#[test]
fn scope_file_end_to_end() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let cidr = dir.path().join("cidr.txt");
    fs::write(&cidr, "\n198.51.100.0/29\n\n203.0.113.10\n")?;

    let scope = ScopeList::load(&cidr)?;
    assert_eq!(scope.len(), 2);

    let mut events: Vec<ScopeEvent> = Vec::new();
    let addresses = enumerate::expand_scope(&scope, &mut events);
    assert_eq!(addresses.len(), 6 + 1);
    assert_eq!(addresses.last(), Some(&ip("203.0.113.10")));

    let known = filter::parse_address_list("198.51.100.3\n198.51.100.7\n203.0.113.10\n")?;
    let mut rejected: Vec<ScopeEvent> = Vec::new();
    let partition = filter::partition_known_reported(&known, &scope, &mut rejected);
    assert_eq!(partition.in_scope, vec![ip("198.51.100.3"), ip("198.51.100.7"), ip("203.0.113.10")]);
    assert!(rejected.is_empty());

    let classification = classifier::classify("www.example", &[ip("198.51.100.5")], &scope);
    match classification.verdict {
        Verdict::InScope { representative, entry } => {
            assert_eq!(representative, ip("198.51.100.5"));
            assert_eq!(entry.to_string(), "198.51.100.0/29");
        }
        other => panic!("unexpected verdict {other:?}"),
    }
    assert_eq!(classification.records()[0].to_string(), "198.51.100.5,www.example");
    Ok(())
}

#[test]
fn malformed_line_reports_location() {
    let dir = tempdir().unwrap();
    let cidr = dir.path().join("cidr.txt");
    fs::write(&cidr, "10.0.0.0/8\n10.0.0.256\n").unwrap();

    let err = ScopeList::load(&cidr).unwrap_err();
    assert!(err.is_malformed());
    assert!(err.to_string().contains("10.0.0.256"));
}

#[test]
fn empty_scope_file_is_rejected() {
    let dir = tempdir().unwrap();
    let cidr = dir.path().join("cidr.txt");
    fs::write(&cidr, "\n\n").unwrap();

    assert!(ScopeList::load(&cidr).is_err());
}

#[test]
fn out_of_scope_known_addresses_are_reported() {
    let scope = scopr_integration_tests::scope("10.0.0.0/24\n");
    let known = [ip("10.0.0.9"), ip("10.0.1.9")];
    let mut events: Vec<ScopeEvent> = Vec::new();

    let partition = filter::partition_known_reported(&known, &scope, &mut events);

    assert_eq!(partition.out_of_scope, vec![ip("10.0.1.9")]);
    assert_eq!(events, vec![ScopeEvent::KnownOutOfScope { addr: ip("10.0.1.9") }]);
}

#[test]
fn out_of_range_octet_halts_loading() {
    let dir = tempdir().unwrap();
    let cidr = dir.path().join("cidr.txt");
    fs::write(&cidr, "192.168.1.0/24\n999.1.1.1/24\n172.16.0.0/12\n").unwrap();

    let err = ScopeList::load(&cidr).unwrap_err();
    assert!(err.is_malformed());
    assert!(err.to_string().contains("999.1.1.1/24"));
}
