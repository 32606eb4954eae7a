// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the catalog registry and table integrity.

use std::collections::BTreeSet;

use super::{all, ci, find, find_var, os};
use crate::env::{CaseRule, EnvReader, VarGuard};
use crate::error::AtlasError;

#[test]
fn test_registry_is_complete() {
    assert_eq!(all().len(), 50);

    let total_vars: usize = all().iter().map(|c| c.vars.len()).sum();
    let total_prefixes: usize = all().iter().map(|c| c.prefixes.len()).sum();
    assert_eq!(total_vars, 871);
    assert_eq!(total_prefixes, 25);
}

#[test]
fn test_catalog_names_are_unique() {
    let names: BTreeSet<&str> = all().iter().map(|c| c.name).collect();
    assert_eq!(names.len(), all().len());
}

#[test]
fn test_keys_unique_within_catalog() {
    for catalog in all() {
        let keys: BTreeSet<&str> = catalog.vars.iter().map(|v| v.key).collect();
        assert_eq!(
            keys.len(),
            catalog.vars.len(),
            "duplicate raw key in catalog '{}'",
            catalog.name
        );
    }
}

#[test]
fn test_no_empty_table_fields() {
    for catalog in all() {
        assert!(!catalog.name.is_empty());
        assert!(!catalog.title.is_empty());
        for v in catalog.vars {
            assert!(!v.name.is_empty(), "empty name in '{}'", catalog.name);
            assert!(!v.key.is_empty(), "empty key for '{}'", v.name);
        }
        for p in catalog.prefixes {
            assert!(!p.name.is_empty() && !p.prefix.is_empty());
        }
    }
}

#[test]
fn test_find_is_case_insensitive() {
    assert!(find("github-actions").is_some());
    assert!(find("GitHub-Actions").is_some());
    assert!(find("no-such-platform").is_none());
}

#[test]
fn test_var_lookup_by_symbolic_name_or_raw_key() {
    let github = find("github-actions").unwrap();
    let by_name = github.var("GitHubRef").unwrap();
    let by_key = github.var("GITHUB_REF").unwrap();
    assert_eq!(by_name.key, "GITHUB_REF");
    assert_eq!(by_name, by_key);
    assert!(github.var("NoSuchVariable").is_none());
}

#[test]
fn test_find_var_across_catalogs() {
    let (catalog, spec) = find_var("AWSRegion").unwrap();
    assert_eq!(catalog.name, "aws");
    assert_eq!(spec.key, "AWS_REGION");
    assert!(find_var("CompletelyUnknownName").is_none());
}

#[test]
fn test_deprecated_flags_survive() {
    let gitlab = find("gitlab").unwrap();
    assert!(gitlab.var("CIJobJwt").unwrap().deprecated);
    assert!(!gitlab.var("CIJobId").unwrap().deprecated);
}

#[test]
fn test_catalog_read_live_value() {
    let reader = EnvReader::from_host();
    let _guard = VarGuard::set("GITHUB_REF", "refs/heads/main");
    let value = ci::github_actions::GITHUB_ACTIONS
        .read(&reader, "GitHubRef")
        .unwrap();
    assert_eq!(value.as_deref(), Some("refs/heads/main"));
}

#[test]
fn test_catalog_read_absent_is_none() {
    let reader = EnvReader::from_host();
    let _guard = VarGuard::unset("APPVEYOR_BUILD_ID");
    let value = ci::appveyor::APPVEYOR
        .read(&reader, "AppVeyorBuildId")
        .unwrap();
    assert_eq!(value, None);
}

#[test]
fn test_catalog_read_unknown_variable_errors() {
    let reader = EnvReader::from_host();
    let err = ci::jenkins::JENKINS
        .read(&reader, "NotAVariable")
        .unwrap_err();
    assert!(matches!(err, AtlasError::Catalog(_)));
}

#[test]
fn test_prefix_accessor_read() {
    let reader = EnvReader::new(CaseRule::Sensitive);
    let _guard = VarGuard::set("AWS_ENVATLAS_TEST", "x");
    let aws = find("aws").unwrap();
    let vars = aws.read_prefix(&reader, "AWSVariables").unwrap();
    assert_eq!(vars.get("AWS_ENVATLAS_TEST").map(String::as_str), Some("x"));

    let err = aws.read_prefix(&reader, "NoSuchPrefix").unwrap_err();
    assert!(matches!(err, AtlasError::Catalog(_)));
}

#[test]
fn test_read_all_covers_every_var() {
    let reader = EnvReader::from_host();
    let rows = os::LINUX.read_all(&reader).unwrap();
    assert_eq!(rows.len(), os::LINUX.vars.len());
}

#[test]
fn test_home_accessor_absent_not_empty() {
    let reader = EnvReader::from_host();
    let _guard = VarGuard::unset("HOME");
    let value = os::LINUX.read(&reader, "Home").unwrap();
    assert_eq!(value, None);
}
