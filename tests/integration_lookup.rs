// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the environment lookup facade.
//!
//! Exercises `EnvReader` and `Snapshot` against the live process
//! environment, staging variables through `VarGuard`. Every test uses
//! its own variable names so concurrently running tests never observe
//! each other's mutations.

use envatlas::env::{CaseRule, EnvReader, Scope, Snapshot, VarGuard};
use envatlas::error::EnvError;

// =============================================================================
// Single-Key Lookup
// =============================================================================

#[test]
fn lookup_set_variable_round_trip() {
    let _guard = VarGuard::set("ATLASIT_ROUND_TRIP", "live-value");
    let reader = EnvReader::from_host();
    let value = reader.get("ATLASIT_ROUND_TRIP", Scope::Process).unwrap();
    assert_eq!(value.as_deref(), Some("live-value"));
}

#[test]
fn lookup_absent_variable_is_none_not_error() {
    let _guard = VarGuard::unset("ATLASIT_NEVER_SET");
    let reader = EnvReader::from_host();
    let value = reader.get("ATLASIT_NEVER_SET", Scope::Process).unwrap();
    assert!(value.is_none());
}

#[test]
fn lookup_empty_name_is_programmer_error() {
    let reader = EnvReader::from_host();
    let err = reader.get("", Scope::Process).unwrap_err();
    assert!(matches!(err, EnvError::EmptyName));
}

#[test]
fn lookup_repeated_reads_are_stable() {
    let _guard = VarGuard::set("ATLASIT_STABLE", "same");
    let reader = EnvReader::from_host();
    let first = reader.get("ATLASIT_STABLE", Scope::Process).unwrap();
    let second = reader.get("ATLASIT_STABLE", Scope::Process).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Scope Degradation
// =============================================================================

#[test]
#[cfg(not(windows))]
fn lookup_user_scope_degrades_to_process() {
    let _guard = VarGuard::set("ATLASIT_SCOPED", "fallback");
    let reader = EnvReader::from_host();
    let value = reader.get("ATLASIT_SCOPED", Scope::User).unwrap();
    assert_eq!(value.as_deref(), Some("fallback"));
}

#[test]
#[cfg(not(windows))]
fn lookup_machine_scope_degrades_to_process() {
    let _guard = VarGuard::set("ATLASIT_MACHINE", "fallback");
    let reader = EnvReader::from_host();
    let value = reader.get("ATLASIT_MACHINE", Scope::Machine).unwrap();
    assert_eq!(value.as_deref(), Some("fallback"));
}

// =============================================================================
// Prefix Filtering
// =============================================================================

#[test]
fn prefix_filter_returns_matching_subset() {
    let _a = VarGuard::set("ATLASIT_FAM_ONE", "1");
    let _b = VarGuard::set("ATLASIT_FAM_TWO", "2");
    let _c = VarGuard::set("ATLASIT_OTHER", "3");

    let reader = EnvReader::new(CaseRule::Sensitive);
    let vars = reader.by_prefix(Some("ATLASIT_FAM_"), Scope::Process);

    assert_eq!(vars.len(), 2);
    assert_eq!(vars.get("ATLASIT_FAM_ONE").map(String::as_str), Some("1"));
    assert_eq!(vars.get("ATLASIT_FAM_TWO").map(String::as_str), Some("2"));
    assert!(!vars.contains_key("ATLASIT_OTHER"));
}

#[test]
fn prefix_filter_insensitive_rule_matches_differing_case() {
    let _guard = VarGuard::set("ATLASIT_CASED_KEY", "x");
    let reader = EnvReader::new(CaseRule::Insensitive);
    let vars = reader.by_prefix(Some("atlasit_cased_"), Scope::Process);
    assert_eq!(vars.get("ATLASIT_CASED_KEY").map(String::as_str), Some("x"));
}

#[test]
fn prefix_filter_sensitive_rule_rejects_differing_case() {
    let _guard = VarGuard::set("ATLASIT_STRICT_KEY", "x");
    let reader = EnvReader::new(CaseRule::Sensitive);
    let vars = reader.by_prefix(Some("atlasit_strict_"), Scope::Process);
    assert!(vars.is_empty());
}

#[test]
fn prefix_filter_no_match_yields_empty_map() {
    let reader = EnvReader::from_host();
    let vars = reader.by_prefix(Some("ATLASIT_NOBODY_USES_THIS_"), Scope::Process);
    assert!(vars.is_empty());
}

#[test]
fn prefix_filter_none_returns_whole_environment() {
    let _guard = VarGuard::set("ATLASIT_WHOLE_ENV", "present");
    let reader = EnvReader::from_host();
    let vars = reader.by_prefix(None, Scope::Process);
    assert_eq!(
        vars.get("ATLASIT_WHOLE_ENV").map(String::as_str),
        Some("present")
    );
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn snapshot_is_immune_to_later_mutation() {
    let guard = VarGuard::set("ATLASIT_FROZEN", "before");
    let snapshot = Snapshot::capture(CaseRule::Sensitive);
    drop(guard);
    let _guard = VarGuard::set("ATLASIT_FROZEN", "after");
    assert_eq!(snapshot.get("ATLASIT_FROZEN"), Some("before"));
}

#[test]
fn snapshot_keys_are_sorted() {
    let snapshot = Snapshot::capture(CaseRule::Sensitive);
    let keys: Vec<_> = snapshot.iter().map(|(k, _)| k.to_string()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

// =============================================================================
// Guard Restoration
// =============================================================================

#[test]
fn guard_restores_previous_value() {
    let outer = VarGuard::set("ATLASIT_RESTORE", "outer");
    {
        let _inner = VarGuard::set("ATLASIT_RESTORE", "inner");
        assert_eq!(std::env::var("ATLASIT_RESTORE").as_deref(), Ok("inner"));
    }
    assert_eq!(std::env::var("ATLASIT_RESTORE").as_deref(), Ok("outer"));
    drop(outer);
    assert!(std::env::var("ATLASIT_RESTORE").is_err());
}
