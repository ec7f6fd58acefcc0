#![cfg(test)]
use scopr_common::config::RepresentativePolicy;
use scopr_common::network::resolution::ResolutionResult;
use scopr_common::network::scope::ScopeEntry;
use scopr_core::classifier::{self, Verdict};
use scopr_core::enumerate::{self, LARGE_EXPANSION_THRESHOLD};
use scopr_core::events::ScopeEvent;
use scopr_core::matcher;
use scopr_integration_tests::{SAMPLE_PREFIXES, ip, prefix, scope};

fn entry(expr: &str) -> ScopeEntry {
    ScopeEntry::Prefix(prefix(expr))
}

/// Every prefix covers itself, and the relation reads the same both ways.
#[test]
fn matcher_is_reflexive_and_symmetric() {
    for a in SAMPLE_PREFIXES {
        assert!(matcher::matches(&entry(a), &entry(a)), "{a} does not match itself");
        for b in SAMPLE_PREFIXES {
            assert_eq!(
                matcher::matches(&entry(a), &entry(b)),
                matcher::matches(&entry(b), &entry(a)),
                "asymmetric result for {a} / {b}"
            );
        }
    }
}

/// Each address enumerated from a prefix matches that prefix as a host entry.
#[test]
fn enumerated_addresses_match_their_prefix() {
    for expr in ["10.1.2.0/24", "10.1.2.128/25", "10.1.2.200/31", "10.1.2.201", "10.1.2.0/23"] {
        let source = entry(expr);
        let enumeration = enumerate::enumerate(&prefix(expr));
        for addr in &enumeration {
            let host = ScopeEntry::Prefix(addr.into());
            assert!(matcher::matches(&host, &source), "{addr} escaped {expr}");
        }
    }
}

#[test]
fn enumeration_sizes() {
    assert_eq!(enumerate::enumerate(&prefix("10.0.0.0/24")).len(), 254);
    assert_eq!(enumerate::enumerate(&prefix("10.0.0.0/23")).len(), 510);
    assert_eq!(enumerate::enumerate(&prefix("10.0.0.0/31")).len(), 2);
    assert_eq!(enumerate::enumerate(&prefix("10.0.0.7")).len(), 1);
    assert_eq!(enumerate::enumerate(&prefix("0.0.0.0/0")).len(), (1u64 << 32) - 2);
}

/// A wildcard covers everything, including addresses no prefix list would.
#[test]
fn wildcard_scope_accepts_everything() {
    let scope = scope("*\n");
    for addr in ["0.0.0.0", "8.8.8.8", "255.255.255.255"] {
        let classification = classifier::classify("host.example", &[ip(addr)], &scope);
        assert!(classification.is_in_scope(), "{addr} rejected by wildcard");
    }
}

#[test]
fn classification_uses_first_address_by_default() {
    let scope = scope("10.0.0.0/8\n");
    let resolved = [ip("8.8.8.8"), ip("10.0.0.1")];

    let first = classifier::classify("mixed.example", &resolved, &scope);
    assert_eq!(first.verdict, Verdict::OutOfScope);
    assert_eq!(first.representative(), Some(ip("8.8.8.8")));

    let any = classifier::classify_with(
        "mixed.example",
        &resolved,
        &scope,
        RepresentativePolicy::AnyAddress,
    );
    assert!(any.is_in_scope());
    assert_eq!(any.representative(), Some(ip("10.0.0.1")));
}

#[test]
fn unresolved_hostname_is_not_classified_against_scope() {
    let resolution = ResolutionResult::parse("ghost.example", "").unwrap();
    let classification = classifier::classify_resolution(
        &resolution,
        &scope("*\n"),
        RepresentativePolicy::default(),
    );

    assert_eq!(classification.verdict, Verdict::Unresolved);
    assert!(classification.records().is_empty());
}

#[test]
fn batch_preserves_input_order() {
    let scope = scope("192.168.0.0/16\n");
    let resolutions: Vec<ResolutionResult> = (0..64u8)
        .map(|n| {
            let addr = if n % 2 == 0 {
                format!("192.168.0.{n}")
            } else {
                format!("203.0.113.{n}")
            };
            ResolutionResult::parse(&format!("h{n}.example"), &addr).unwrap()
        })
        .collect();

    let results = classifier::classify_batch(&resolutions, &scope, RepresentativePolicy::default());

    assert_eq!(results.len(), resolutions.len());
    for (n, classification) in results.iter().enumerate() {
        assert_eq!(classification.hostname, format!("h{n}.example"));
        assert_eq!(classification.is_in_scope(), n % 2 == 0);
    }
}

#[test]
fn expansion_reports_large_prefixes_and_wildcards() {
    let scope = scope("10.0.0.0/30\n*\n10.1.0.0/23\n");
    let mut events: Vec<ScopeEvent> = Vec::new();

    let addresses = enumerate::expand_scope(&scope, &mut events);

    assert_eq!(addresses.len(), 2 + 510);
    assert_eq!(addresses[0], ip("10.0.0.1"));
    assert_eq!(addresses[2], ip("10.1.0.1"));

    let large: Vec<u64> = events
        .iter()
        .filter_map(|event| match event {
            ScopeEvent::LargeExpansion { count, .. } => Some(*count),
            _ => None,
        })
        .collect();
    assert_eq!(large, vec![510]);
    assert!(510 > LARGE_EXPANSION_THRESHOLD);
    assert!(events.contains(&ScopeEvent::WildcardSkipped));
}
