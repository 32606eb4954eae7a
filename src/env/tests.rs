// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment lookup facade.

use std::collections::BTreeMap;

use super::guard::VarGuard;
use super::reader::EnvReader;
use super::scope::Scope;
use super::snapshot::Snapshot;
use super::types::CaseRule;
use crate::error::EnvError;

fn sample_snapshot(rule: CaseRule) -> Snapshot {
    let mut vars = BTreeMap::new();
    vars.insert("PORT".to_string(), "8080".to_string());
    vars.insert("AWS_REGION".to_string(), "us-east-1".to_string());
    vars.insert("AWS_DEFAULT_REGION".to_string(), "us-west-2".to_string());
    vars.insert("HOME".to_string(), "/home/user".to_string());
    Snapshot::from_map(vars, rule)
}

#[test]
fn test_snapshot_get_exact() {
    let snap = sample_snapshot(CaseRule::Sensitive);
    assert_eq!(snap.get("PORT"), Some("8080"));
    assert_eq!(snap.get("port"), None);
    assert_eq!(snap.get("MISSING"), None);
}

#[test]
fn test_snapshot_get_insensitive() {
    let snap = sample_snapshot(CaseRule::Insensitive);
    assert_eq!(snap.get("port"), Some("8080"));
    assert_eq!(snap.get("Aws_Region"), Some("us-east-1"));
}

#[test]
fn test_by_prefix_subset() {
    let snap = sample_snapshot(CaseRule::Sensitive);
    let aws = snap.by_prefix(Some("AWS_"));
    assert_eq!(aws.len(), 2);
    assert_eq!(aws.get("AWS_REGION").map(String::as_str), Some("us-east-1"));
    assert_eq!(
        aws.get("AWS_DEFAULT_REGION").map(String::as_str),
        Some("us-west-2")
    );
    assert!(!aws.contains_key("PORT"));
}

#[test]
fn test_by_prefix_case_rule_symmetry() {
    // Insensitive: lowercase prefix matches uppercase keys.
    let snap = sample_snapshot(CaseRule::Insensitive);
    assert_eq!(snap.by_prefix(Some("aws_")), snap.by_prefix(Some("AWS_")));

    // Sensitive: lowercase prefix matches nothing when real keys are uppercase.
    let snap = sample_snapshot(CaseRule::Sensitive);
    assert!(snap.by_prefix(Some("aws_")).is_empty());
    assert_eq!(snap.by_prefix(Some("AWS_")).len(), 2);
}

#[test]
fn test_by_prefix_none_returns_all() {
    let snap = sample_snapshot(CaseRule::Sensitive);
    let all = snap.by_prefix(None);
    assert_eq!(all.len(), snap.len());
}

#[test]
fn test_by_prefix_empty_prefix_matches_all() {
    let snap = sample_snapshot(CaseRule::Sensitive);
    assert_eq!(snap.by_prefix(Some("")).len(), snap.len());
}

#[test]
fn test_by_prefix_no_match_is_empty_not_error() {
    let snap = sample_snapshot(CaseRule::Sensitive);
    assert!(snap.by_prefix(Some("NO_SUCH_PREFIX_")).is_empty());
}

#[test]
fn test_by_prefix_non_ascii_prefix_boundary() {
    let mut vars = BTreeMap::new();
    vars.insert("ÜBER_VAR".to_string(), "1".to_string());
    let snap = Snapshot::from_map(vars, CaseRule::Insensitive);
    // A prefix length that lands inside a multi-byte char simply fails
    // to match instead of panicking.
    assert!(snap.by_prefix(Some("\u{dc}")).len() <= 1);
    assert!(snap.by_prefix(Some("X")).is_empty());
}

#[test]
fn test_reader_empty_name_is_error() {
    let reader = EnvReader::from_host();
    let err = reader.get("", Scope::Process).unwrap_err();
    assert!(matches!(err, EnvError::EmptyName));
}

#[test]
fn test_reader_live_roundtrip() {
    let reader = EnvReader::from_host();
    let _guard = VarGuard::set("ATLAS_TEST_LIVE", "42");
    assert_eq!(
        reader.get("ATLAS_TEST_LIVE", Scope::Process).unwrap(),
        Some("42".to_string())
    );
}

#[test]
fn test_reader_absent_is_none_not_empty() {
    let reader = EnvReader::from_host();
    let _guard = VarGuard::unset("ATLAS_TEST_ABSENT");
    assert_eq!(
        reader.get("ATLAS_TEST_ABSENT", Scope::Process).unwrap(),
        None
    );
}

#[test]
fn test_reader_idempotent_reads() {
    let reader = EnvReader::from_host();
    let _guard = VarGuard::set("ATLAS_TEST_IDEMPOTENT", "same");
    let first = reader.get("ATLAS_TEST_IDEMPOTENT", Scope::Process).unwrap();
    let second = reader.get("ATLAS_TEST_IDEMPOTENT", Scope::Process).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_reader_by_prefix_live() {
    let reader = EnvReader::new(CaseRule::Sensitive);
    let _guard = VarGuard::set("ATLAS_PFX_ONE", "1");
    let _guard2 = VarGuard::set("ATLAS_PFX_TWO", "2");
    let vars = reader.by_prefix(Some("ATLAS_PFX_"), Scope::Process);
    assert_eq!(vars.len(), 2);
    assert_eq!(vars.get("ATLAS_PFX_ONE").map(String::as_str), Some("1"));
}

#[test]
fn test_scope_degrades_off_windows() {
    if cfg!(windows) {
        assert_eq!(Scope::User.effective(), Scope::User);
    } else {
        assert_eq!(Scope::User.effective(), Scope::Process);
        assert_eq!(Scope::Machine.effective(), Scope::Process);
    }
    assert_eq!(Scope::Process.effective(), Scope::Process);
}

#[test]
fn test_case_rule_parsing() {
    assert_eq!("sensitive".parse::<CaseRule>().unwrap(), CaseRule::Sensitive);
    assert_eq!(
        "INSENSITIVE".parse::<CaseRule>().unwrap(),
        CaseRule::Insensitive
    );
    assert_eq!("host".parse::<CaseRule>().unwrap(), CaseRule::from_host());
    assert!("bogus".parse::<CaseRule>().is_err());
}

#[test]
fn test_scope_parsing_and_display() {
    assert_eq!("machine".parse::<Scope>().unwrap(), Scope::Machine);
    assert!("global".parse::<Scope>().is_err());
    insta::assert_snapshot!(Scope::User.to_string(), @"user");
    insta::assert_snapshot!(CaseRule::Insensitive.to_string(), @"insensitive");
}

#[test]
fn test_key_starts_with() {
    assert!(CaseRule::Insensitive.key_starts_with("AWS_REGION", "aws_"));
    assert!(!CaseRule::Sensitive.key_starts_with("AWS_REGION", "aws_"));
    assert!(CaseRule::Sensitive.key_starts_with("AWS_REGION", "AWS_"));
    assert!(CaseRule::Sensitive.key_starts_with("AWS_REGION", ""));
}

#[test]
fn test_guard_restores_previous_value() {
    let _outer = VarGuard::set("ATLAS_TEST_RESTORE", "outer");
    {
        let _inner = VarGuard::set("ATLAS_TEST_RESTORE", "inner");
        assert_eq!(
            std::env::var("ATLAS_TEST_RESTORE").as_deref(),
            Ok("inner")
        );
    }
    assert_eq!(
        std::env::var("ATLAS_TEST_RESTORE").as_deref(),
        Ok("outer")
    );
}
