// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Live lookup facade over the ambient process environment.
//!
//! # Architecture
//!
//! ```text
//! EnvReader { rule: CaseRule }
//!   get:       single key, delegated to the OS facility
//!              (std::env for Process, registry for User/Machine)
//!   by_prefix: capture Snapshot, filter under rule
//!
//! Stateless pure-read pair; nothing is cached between calls.
//! ```

use std::collections::BTreeMap;
use std::env::VarError;

use super::scope::Scope;
use super::snapshot::Snapshot;
use super::types::CaseRule;
use crate::error::EnvError;

/// Stateless reader over the ambient environment.
///
/// The comparison rule is fixed at construction; see
/// [`CaseRule::from_host`] for the host default.
#[derive(Debug, Clone, Copy)]
pub struct EnvReader {
    rule: CaseRule,
}

impl Default for EnvReader {
    fn default() -> Self {
        Self::from_host()
    }
}

impl EnvReader {
    /// Creates a reader with an explicit comparison rule.
    #[must_use]
    pub const fn new(rule: CaseRule) -> Self {
        Self { rule }
    }

    /// Creates a reader using the executing host's comparison rule.
    #[must_use]
    pub const fn from_host() -> Self {
        Self::new(CaseRule::from_host())
    }

    /// The comparison rule this reader applies to prefix matching.
    #[must_use]
    pub const fn rule(&self) -> CaseRule {
        self.rule
    }

    /// Reads the current value of `name`, or `None` when unset.
    ///
    /// Single-key equality is delegated to the underlying OS facility,
    /// which already implements platform-correct key semantics. An
    /// unsupported scope degrades silently to [`Scope::Process`].
    ///
    /// # Errors
    ///
    /// [`EnvError::EmptyName`] for an empty name (programmer error),
    /// [`EnvError::NotUnicode`] when a present value cannot be
    /// represented as UTF-8, and registry errors on Windows for the
    /// user/machine tiers. Absence is never an error.
    pub fn get(&self, name: &str, scope: Scope) -> Result<Option<String>, EnvError> {
        if name.is_empty() {
            return Err(EnvError::EmptyName);
        }

        match scope.effective() {
            Scope::Process => match std::env::var(name) {
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode {
                    name: name.to_string(),
                }),
            },
            #[cfg(windows)]
            tier @ (Scope::User | Scope::Machine) => super::scope::registry::read_value(tier, name),
            #[cfg(not(windows))]
            _ => unreachable!("effective() pins non-Windows scopes to Process"),
        }
    }

    /// Returns every variable whose name starts with `prefix` under the
    /// reader's rule, or the full environment when `prefix` is `None`.
    ///
    /// The mapping is produced fresh per call and owned by the caller;
    /// when nothing matches it is empty, never an error.
    #[must_use]
    pub fn by_prefix(&self, prefix: Option<&str>, scope: Scope) -> BTreeMap<String, String> {
        Snapshot::capture_scope(self.rule, scope).by_prefix(prefix)
    }

    /// Captures the environment of `scope` as an owned snapshot.
    #[must_use]
    pub fn snapshot(&self, scope: Scope) -> Snapshot {
        Snapshot::capture_scope(self.rule, scope)
    }
}
