// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{AtlasError, AtlasResult, CatalogError, ConfigError, EnvError};

#[test]
fn test_env_error_display() {
    let err = EnvError::EmptyName;
    insta::assert_snapshot!(err.to_string(), @"environment variable name must not be empty");
}

#[test]
fn test_catalog_error_display() {
    let err = CatalogError::UnknownVariable {
        catalog: "aws".to_string(),
        name: "Port".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"catalog 'aws' has no variable named 'Port'");
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        key: "lookup.case_rule".to_string(),
        message: "expected one of host, sensitive, insensitive".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'lookup.case_rule': expected one of host, sensitive, insensitive"
    );
}

#[test]
fn test_atlas_error_size() {
    // AtlasError should be reasonably small
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<AtlasError>();
    assert!(size <= 24, "AtlasError is {size} bytes, expected <= 24");
}

#[test]
fn test_atlas_result_size() {
    let size = std::mem::size_of::<AtlasResult<()>>();
    assert!(size <= 24, "AtlasResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_boxed_conversion() {
    let err: AtlasError = EnvError::EmptyName.into();
    assert!(matches!(err, AtlasError::Env(_)));

    let err: AtlasError = CatalogError::UnknownCatalog("nope".to_string()).into();
    assert!(matches!(err, AtlasError::Catalog(_)));
}
