// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable lookup facade.
//!
//! # Architecture
//!
//! ```text
//! EnvReader (CaseRule resolved once at construction)
//!   get(name, scope)       -> Result<Option<String>>
//!   by_prefix(pfx?, scope) -> BTreeMap<String, String>
//!
//! Snapshot: captured name/value map + CaseRule
//!   same queries, purely in memory
//!
//! Scope: Process | User | Machine
//!   User/Machine read the registry on Windows,
//!   degrade silently to Process elsewhere
//! ```
//!
//! - **Case-insensitive prefix matching on Windows**, case-sensitive otherwise
//! - **Read-only**: the library never mutates the process environment
//! - **Fresh per call**: values are re-read on every access, never cached

pub mod guard;
pub mod reader;
pub mod scope;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod tests;

pub use guard::VarGuard;
pub use reader::EnvReader;
pub use scope::Scope;
pub use snapshot::Snapshot;
pub use types::CaseRule;

/// Captures the current process environment under the host case rule.
#[must_use]
pub fn current_snapshot() -> Snapshot {
    Snapshot::capture(CaseRule::from_host())
}
