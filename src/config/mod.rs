// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (host case rule, process scope)
//! 2. envatlas.toml (cwd, optional)
//! 3. --config FILE
//! 4. ENVATLAS_* env vars
//! 5. CLI flags (--case-rule, --scope)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVATLAS_LOOKUP_RULE=insensitive → lookup.rule
//! ENVATLAS_LOOKUP_SCOPE=user      → lookup.scope
//! ENVATLAS_OUTPUT_JSON=true       → output.json
//! ```
//!
//! The case rule is resolved here, once, at startup; the lookup facade
//! receives it as a plain value and never re-detects the host platform.

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::env::{CaseRule, Scope};
use crate::error::Result;

use loader::ConfigLoader;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AtlasConfig {
    /// Lookup behaviour.
    pub lookup: LookupConfig,
    /// Output formatting.
    pub output: OutputConfig,
}

/// Lookup behaviour options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
    /// Name comparison rule; `"host"` resolves to the executing host's
    /// rule at load time.
    pub rule: CaseRule,
    /// Default storage tier for lookups.
    pub scope: Scope,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            rule: CaseRule::from_host(),
            scope: Scope::Process,
        }
    }
}

/// Output formatting options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Emit machine-readable JSON instead of text.
    pub json: bool,
}

impl AtlasConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envatlas::config::AtlasConfig;
    ///
    /// let config = AtlasConfig::builder()
    ///     .add_toml_file_optional("envatlas.toml")
    ///     .with_env_prefix("ENVATLAS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid
    /// TOML, or does not match the `AtlasConfig` structure.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not
    /// match the `AtlasConfig` structure.
    pub fn from_str(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }
}
