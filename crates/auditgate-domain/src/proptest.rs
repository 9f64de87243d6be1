//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Verdict consistency with the categorized lists
//! - Severity gating and expiry boundaries
//! - Ordering determinism

use crate::engine::analyze;
use crate::policy::EffectiveConfig;
use crate::test_support::entry;
use auditgate_types::{Advisory, AllowlistEntry, Severity, VulnerabilityStatus};
use proptest::prelude::*;
use std::collections::BTreeSet;
use time::{Date, Duration};
use time::macros::date;

const BASE: Date = date!(2025 - 01 - 01);

// Small id/package alphabets so that allowlist entries collide with advisories often.
fn arb_id() -> impl Strategy<Value = String> {
    (1000u32..1012).prop_map(|n| n.to_string())
}

fn arb_package() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["lodash", "minimist", "qs", "axios", "ws"]).prop_map(String::from)
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(vec![
        Severity::Info,
        Severity::Low,
        Severity::Moderate,
        Severity::High,
        Severity::Critical,
    ])
}

fn arb_date() -> impl Strategy<Value = Date> {
    (-400i64..400).prop_map(|offset| BASE + Duration::days(offset))
}

fn arb_advisory() -> impl Strategy<Value = Advisory> {
    (arb_id(), arb_package(), arb_severity()).prop_map(|(id, package, severity)| Advisory {
        title: format!("{package} issue"),
        url: format!("https://github.com/advisories/{id}"),
        id,
        package,
        severity,
    })
}

fn arb_entry() -> impl Strategy<Value = AllowlistEntry> {
    (arb_id(), arb_package(), prop::option::of(arb_date()))
        .prop_map(|(id, package, expires)| entry(&id, &package, "accepted", expires))
}

/// Advisories unique by key, as the audit parser guarantees.
fn arb_advisories() -> impl Strategy<Value = Vec<Advisory>> {
    prop::collection::vec(arb_advisory(), 0..24).prop_map(|list| {
        let mut seen = BTreeSet::new();
        list.into_iter().filter(|a| seen.insert(a.key())).collect()
    })
}

fn arb_config() -> impl Strategy<Value = EffectiveConfig> {
    (1u32..=365).prop_map(|expiring_window_days| EffectiveConfig {
        expiring_window_days,
    })
}

proptest! {
    #[test]
    fn success_iff_no_new_and_no_expired(
        advisories in arb_advisories(),
        entries in prop::collection::vec(arb_entry(), 0..12),
        reference in arb_date(),
        cfg in arb_config(),
    ) {
        let report = analyze(&advisories, &entries, reference, &cfg);
        let result = &report.result;
        prop_assert_eq!(
            result.is_successful,
            result.vulnerabilities.is_empty() && result.expired_allowlist_entries.is_empty()
        );
    }

    #[test]
    fn expiring_is_subset_of_allowed(
        advisories in arb_advisories(),
        entries in prop::collection::vec(arb_entry(), 0..12),
        reference in arb_date(),
        cfg in arb_config(),
    ) {
        let report = analyze(&advisories, &entries, reference, &cfg);
        for info in &report.result.expiring_entries {
            prop_assert_eq!(info.status, VulnerabilityStatus::Allowed);
            prop_assert!(report.result.allowed_vulnerabilities.contains(info));
        }
    }

    #[test]
    fn low_severities_never_appear(
        advisories in arb_advisories(),
        entries in prop::collection::vec(arb_entry(), 0..12),
        reference in arb_date(),
    ) {
        let report = analyze(&advisories, &entries, reference, &EffectiveConfig::default());
        let result = &report.result;
        let all = result
            .vulnerabilities
            .iter()
            .chain(&result.allowed_vulnerabilities)
            .chain(&result.expired_allowlist_entries)
            .chain(&result.expiring_entries);
        for info in all {
            prop_assert!(info.severity.is_gated(), "{} leaked into output", info.severity);
        }

        let gated = advisories.iter().filter(|a| a.severity.is_gated()).count();
        prop_assert_eq!(
            result.vulnerabilities.len()
                + result.allowed_vulnerabilities.len()
                + result.expired_allowlist_entries.len(),
            gated
        );
        prop_assert_eq!(report.counts.filtered_out as usize, advisories.len() - gated);
    }

    #[test]
    fn entries_without_expiry_always_allow(
        advisories in arb_advisories(),
        reference in arb_date(),
    ) {
        let entries: Vec<AllowlistEntry> = advisories
            .iter()
            .map(|a| entry(&a.id, &a.package, "permanent", None))
            .collect();
        let report = analyze(&advisories, &entries, reference, &EffectiveConfig::default());
        prop_assert!(report.result.vulnerabilities.is_empty());
        prop_assert!(report.result.expired_allowlist_entries.is_empty());
        prop_assert!(report.result.expiring_entries.is_empty());
        prop_assert!(report.result.is_successful);
    }

    #[test]
    fn analysis_is_idempotent_and_order_independent(
        advisories in arb_advisories(),
        entries in prop::collection::vec(arb_entry(), 0..12),
        reference in arb_date(),
    ) {
        let cfg = EffectiveConfig::default();
        let first = analyze(&advisories, &entries, reference, &cfg);
        let second = analyze(&advisories, &entries, reference, &cfg);
        prop_assert_eq!(&first, &second);

        let a = serde_json::to_string(&first.result).unwrap();
        let b = serde_json::to_string(&second.result).unwrap();
        prop_assert_eq!(a, b);

        let reversed: Vec<Advisory> = advisories.iter().rev().cloned().collect();
        let third = analyze(&reversed, &entries, reference, &cfg);
        prop_assert_eq!(&first.result, &third.result);
    }
}
