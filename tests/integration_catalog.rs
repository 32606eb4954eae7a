// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for catalog resolution and live reads.
//!
//! Exercises the public catalog registry end to end: name resolution,
//! reads through `EnvReader`, and the error cases for unknown names.

use envatlas::catalog;
use envatlas::env::{CaseRule, EnvReader, VarGuard};
use envatlas::error::AtlasError;

// =============================================================================
// Registry Resolution
// =============================================================================

#[test]
fn registry_exposes_known_platforms() {
    for name in ["aws", "github-actions", "azure-pipelines", "linux"] {
        assert!(catalog::find(name).is_some(), "missing catalog {name}");
    }
}

#[test]
fn registry_lookup_is_case_insensitive() {
    let lower = catalog::find("github-actions").unwrap();
    let upper = catalog::find("GITHUB-ACTIONS").unwrap();
    assert_eq!(lower.name, upper.name);
}

#[test]
fn registry_unknown_catalog_is_none() {
    assert!(catalog::find("commodore-64").is_none());
}

#[test]
fn var_resolves_by_symbolic_name_and_raw_key() {
    let cat = catalog::find("github-actions").unwrap();
    let by_name = cat.var("GitHubRef").unwrap();
    let by_key = cat.var("GITHUB_REF").unwrap();
    assert_eq!(by_name.key, by_key.key);
}

#[test]
fn find_var_reports_owning_catalog() {
    let (cat, spec) = catalog::find_var("AWSRegion").unwrap();
    assert_eq!(cat.name, "aws");
    assert_eq!(spec.key, "AWS_REGION");
}

// =============================================================================
// Live Reads
// =============================================================================

#[test]
fn catalog_read_reflects_live_environment() {
    let _guard = VarGuard::set("GITHUB_REF", "refs/heads/main");
    let reader = EnvReader::new(CaseRule::Sensitive);
    let cat = catalog::find("github-actions").unwrap();
    let value = cat.read(&reader, "GitHubRef").unwrap();
    assert_eq!(value.as_deref(), Some("refs/heads/main"));
}

#[test]
fn catalog_read_unset_variable_is_none() {
    let _guard = VarGuard::unset("APPVEYOR_JOB_NUMBER");
    let reader = EnvReader::new(CaseRule::Sensitive);
    let cat = catalog::find("appveyor").unwrap();
    let value = cat.read(&reader, "AppVeyorJobNumber").unwrap();
    assert!(value.is_none());
}

#[test]
fn catalog_read_all_covers_every_documented_variable() {
    let reader = EnvReader::new(CaseRule::Sensitive);
    let cat = catalog::find("linux").unwrap();
    let values = cat.read_all(&reader).unwrap();
    assert_eq!(values.len(), cat.vars.len());
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn catalog_read_unknown_variable_errors() {
    let reader = EnvReader::new(CaseRule::Sensitive);
    let cat = catalog::find("aws").unwrap();
    let err = cat.read(&reader, "NoSuchAccessor").unwrap_err();
    assert!(matches!(err, AtlasError::Catalog(_)));
}

#[test]
fn catalog_read_unknown_prefix_errors() {
    let reader = EnvReader::new(CaseRule::Sensitive);
    let cat = catalog::find("aws").unwrap();
    let err = cat.read_prefix(&reader, "NoSuchFamily").unwrap_err();
    assert!(matches!(err, AtlasError::Catalog(_)));
}
