// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::AtlasConfig;
use crate::env::{CaseRule, Scope, VarGuard};

#[test]
fn test_default_config() {
    let config = AtlasConfig::default();
    assert_eq!(config.lookup.rule, CaseRule::from_host());
    assert_eq!(config.lookup.scope, Scope::Process);
    assert!(!config.output.json);
}

#[test]
fn test_config_parse() {
    let toml = r#"
[lookup]
rule = "insensitive"
scope = "machine"

[output]
json = true
"#;
    let config = AtlasConfig::from_str(toml).unwrap();
    assert_eq!(config.lookup.rule, CaseRule::Insensitive);
    assert_eq!(config.lookup.scope, Scope::Machine);
    assert!(config.output.json);
}

#[test]
fn test_config_host_rule_resolves_at_load() {
    let config = AtlasConfig::from_str("[lookup]\nrule = \"host\"\n").unwrap();
    assert_eq!(config.lookup.rule, CaseRule::from_host());
}

#[test]
fn test_config_rejects_invalid_rule() {
    assert!(AtlasConfig::from_str("[lookup]\nrule = \"fuzzy\"\n").is_err());
}

#[test]
fn test_config_rejects_unknown_fields() {
    assert!(AtlasConfig::from_str("[lookup]\ncase = \"host\"\n").is_err());
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = AtlasConfig::from_str("[output]\njson = true\n").unwrap();
    assert!(config.output.json);
    assert_eq!(config.lookup.scope, Scope::Process);
}

#[test]
fn test_env_override() {
    let _guard = VarGuard::set("ENVATLAS_LOOKUP_SCOPE", "user");
    let config = AtlasConfig::builder()
        .with_env_prefix("ENVATLAS")
        .build()
        .unwrap();
    assert_eq!(config.lookup.scope, Scope::User);
}

#[test]
fn test_loader_set_override() {
    let config = AtlasConfig::builder()
        .set("output.json", true)
        .unwrap()
        .build()
        .unwrap();
    assert!(config.output.json);
}
