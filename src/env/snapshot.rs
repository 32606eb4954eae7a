// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Owned capture of an environment's name/value pairs.
//!
//! # Architecture
//!
//! ```text
//! Snapshot
//!   vars: BTreeMap<String, String> (deterministic order)
//!   rule: CaseRule (fixed at capture)
//!
//! Sources: capture() from the live process environment,
//!          from_map() for pure in-memory queries
//! ```

use std::collections::BTreeMap;

use super::scope::Scope;
use super::types::CaseRule;

/// A point-in-time capture of name/value pairs with an attached
/// comparison rule.
///
/// Queries over a snapshot are pure functions over owned data, which is
/// what makes the prefix semantics unit-testable without touching the
/// real process environment.
#[derive(Debug, Clone)]
pub struct Snapshot {
    vars: BTreeMap<String, String>,
    rule: CaseRule,
}

impl Snapshot {
    /// Captures the current process environment.
    ///
    /// Entries whose name or value is not valid Unicode are skipped, so
    /// a snapshot never contains placeholder or empty-string stand-ins.
    #[must_use]
    pub fn capture(rule: CaseRule) -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars, rule }
    }

    /// Captures the environment of the given scope.
    ///
    /// Registry-backed scopes that cannot be read produce an empty
    /// snapshot; bulk queries are defined to never fail.
    #[must_use]
    pub(crate) fn capture_scope(rule: CaseRule, scope: Scope) -> Self {
        match scope.effective() {
            Scope::Process => Self::capture(rule),
            #[cfg(windows)]
            tier @ (Scope::User | Scope::Machine) => {
                let vars = super::scope::registry::enumerate(tier).unwrap_or_else(|e| {
                    tracing::warn!("failed to enumerate {tier} environment: {e}");
                    BTreeMap::new()
                });
                Self { vars, rule }
            }
            #[cfg(not(windows))]
            _ => Self::capture(rule),
        }
    }

    /// Builds a snapshot from an explicit map.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>, rule: CaseRule) -> Self {
        Self { vars, rule }
    }

    /// The comparison rule the snapshot was captured under.
    #[must_use]
    pub const fn rule(&self) -> CaseRule {
        self.rule
    }

    /// Looks up a single variable under the snapshot's rule.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.rule {
            CaseRule::Sensitive => self.vars.get(name).map(String::as_str),
            CaseRule::Insensitive => self
                .vars
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
        }
    }

    /// Returns every entry whose name starts with `prefix` under the
    /// snapshot's rule, or all entries when `prefix` is `None`.
    ///
    /// The result is a fresh map owned by the caller; no match yields an
    /// empty map, never an error.
    #[must_use]
    pub fn by_prefix(&self, prefix: Option<&str>) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .filter(|(key, _)| match prefix {
                Some(p) => self.rule.key_starts_with(key, p),
                None => true,
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Iterates over the captured entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if the capture holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}
