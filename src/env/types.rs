// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for the environment lookup facade.
//!
//! # Architecture
//!
//! ```text
//! CaseRule: Sensitive | Insensitive
//!   from_host(): Insensitive on Windows, Sensitive elsewhere
//!   applied to key equality and prefix matching alike
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name comparison rule for environment variable keys.
///
/// The rule is resolved once at startup and passed into the lookup
/// facade instead of being re-detected on every call, so it can be
/// overridden in configuration and exercised in tests independent of
/// the real host OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseRule {
    /// Byte-wise ordinal comparison (Unix-family hosts).
    #[default]
    Sensitive,
    /// ASCII case-insensitive ordinal comparison (Windows-family hosts).
    Insensitive,
}

impl CaseRule {
    /// Resolves the rule appropriate for the executing host platform.
    #[must_use]
    pub const fn from_host() -> Self {
        if cfg!(windows) {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }

    /// Compares two keys for equality under this rule.
    #[must_use]
    pub fn keys_equal(self, a: &str, b: &str) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => a.eq_ignore_ascii_case(b),
        }
    }

    /// Tests whether `key` starts with `prefix` under this rule.
    ///
    /// Prefix matching is not an OS-native primitive, so this is the one
    /// place where the rule is applied explicitly rather than delegated.
    #[must_use]
    pub fn key_starts_with(self, key: &str, prefix: &str) -> bool {
        match self {
            Self::Sensitive => key.starts_with(prefix),
            // get() returns None on a non-char-boundary slice, which can
            // only happen when the candidate cannot match anyway.
            Self::Insensitive => key
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix)),
        }
    }

    /// Config/CLI spelling of the rule.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sensitive => "sensitive",
            Self::Insensitive => "insensitive",
        }
    }
}

impl std::fmt::Display for CaseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CaseRule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sensitive" => Ok(Self::Sensitive),
            "insensitive" => Ok(Self::Insensitive),
            "host" => Ok(Self::from_host()),
            other => Err(format!(
                "invalid case rule '{other}', expected one of host, sensitive, insensitive"
            )),
        }
    }
}

impl Serialize for CaseRule {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CaseRule {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
