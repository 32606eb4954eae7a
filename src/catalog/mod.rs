// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Platform catalogs: declarative tables of documented variables.
//!
//! # Architecture
//!
//! ```text
//! Catalog { name, title, docs_url, vars, prefixes }
//!     vars:     &[VarSpec { name, key, desc, deprecated }]
//!     prefixes: &[PrefixSpec { name, prefix, desc }]
//!
//! aws / azure (app_services, oryx, pipelines) / ci / google / os
//!
//! Catalogs hold no state and perform no validation, parsing or
//! caching; every read delegates live to env::EnvReader.
//! ```

pub mod aws;
pub mod azure;
pub mod ci;
pub mod google;
pub mod os;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::env::{EnvReader, Scope};
use crate::error::{AtlasResult, CatalogError, EnvError};

/// One documented environment variable: a symbolic name bound to a raw
/// key, defined at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarSpec {
    /// Symbolic accessor name, e.g. `AWSRegion`.
    pub name: &'static str,
    /// Raw environment variable key, e.g. `AWS_REGION`.
    pub key: &'static str,
    /// One-line description from the platform's documentation.
    pub desc: &'static str,
    /// Whether the platform has deprecated the variable.
    pub deprecated: bool,
}

impl VarSpec {
    /// Reads the live value of the variable, or `None` when unset.
    ///
    /// # Errors
    ///
    /// Propagates [`EnvError`] from the reader; absence is `Ok(None)`.
    pub fn read(&self, reader: &EnvReader) -> Result<Option<String>, EnvError> {
        reader.get(self.key, Scope::Process)
    }
}

/// A bulk accessor returning every variable under a name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixSpec {
    /// Accessor name, e.g. `AWSVariables`.
    pub name: &'static str,
    /// Raw key prefix, e.g. `AWS_`.
    pub prefix: &'static str,
    /// One-line description of the variable family.
    pub desc: &'static str,
}

impl PrefixSpec {
    /// Reads every matching variable from the live environment.
    #[must_use]
    pub fn read(&self, reader: &EnvReader) -> BTreeMap<String, String> {
        reader.by_prefix(Some(self.prefix), Scope::Process)
    }
}

/// A named, fixed registry of variable descriptors documenting one
/// platform's environment-variable contract.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    /// Stable kebab-case identifier, e.g. `github-actions`.
    pub name: &'static str,
    /// Human-readable title, e.g. `GitHub Actions`.
    pub title: &'static str,
    /// Upstream documentation for the variable contract.
    pub docs_url: &'static str,
    /// Documented variables, one entry per raw key.
    pub vars: &'static [VarSpec],
    /// Bulk prefix accessors declared by the platform.
    pub prefixes: &'static [PrefixSpec],
}

impl Catalog {
    /// Finds a variable descriptor by symbolic name or raw key.
    ///
    /// Symbolic names are matched ASCII case-insensitively for CLI
    /// friendliness; the raw key must match exactly.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&'static VarSpec> {
        self.vars
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name) || v.key == name)
    }

    /// Finds a bulk prefix accessor by name.
    #[must_use]
    pub fn prefix(&self, name: &str) -> Option<&'static PrefixSpec> {
        self.prefixes
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Reads one variable by symbolic name or raw key.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownVariable`] when the catalog does not
    /// document the name; environment errors propagate from the reader.
    pub fn read(&self, reader: &EnvReader, name: &str) -> AtlasResult<Option<String>> {
        let spec = self.var(name).ok_or_else(|| CatalogError::UnknownVariable {
            catalog: self.name.to_string(),
            name: name.to_string(),
        })?;
        Ok(spec.read(reader)?)
    }

    /// Reads a declared bulk prefix accessor by name.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownPrefix`] when no accessor exists under the
    /// name.
    pub fn read_prefix(
        &self,
        reader: &EnvReader,
        name: &str,
    ) -> AtlasResult<BTreeMap<String, String>> {
        let spec = self.prefix(name).ok_or_else(|| CatalogError::UnknownPrefix {
            catalog: self.name.to_string(),
            name: name.to_string(),
        })?;
        Ok(spec.read(reader))
    }

    /// Reads the live value of every documented variable.
    ///
    /// # Errors
    ///
    /// Propagates the first [`EnvError`] encountered.
    pub fn read_all(
        &self,
        reader: &EnvReader,
    ) -> Result<Vec<(&'static VarSpec, Option<String>)>, EnvError> {
        self.vars
            .iter()
            .map(|spec| Ok((spec, spec.read(reader)?)))
            .collect()
    }
}

/// Shorthand constructor for table entries.
pub(crate) const fn var(
    name: &'static str,
    key: &'static str,
    desc: &'static str,
) -> VarSpec {
    VarSpec {
        name,
        key,
        desc,
        deprecated: false,
    }
}

/// Shorthand constructor for entries the platform has deprecated.
pub(crate) const fn deprecated(
    name: &'static str,
    key: &'static str,
    desc: &'static str,
) -> VarSpec {
    VarSpec {
        name,
        key,
        desc,
        deprecated: true,
    }
}

/// Shorthand constructor for bulk prefix accessors.
pub(crate) const fn prefix(
    name: &'static str,
    prefix: &'static str,
    desc: &'static str,
) -> PrefixSpec {
    PrefixSpec { name, prefix, desc }
}

/// Every catalog shipped with the crate, in display order.
static ALL: &[&Catalog] = &[
    &aws::AWS,
    &aws::AWS_LAMBDA,
    &aws::AWS_XRAY,
    &azure::app_services::WEB_APP,
    &azure::app_services::WEB_APP_AUTH,
    &azure::app_services::WEB_APP_KEY_VAULT_REFS,
    &azure::app_services::WEB_APP_KUDU,
    &azure::app_services::WEB_APP_LOGGING,
    &azure::app_services::WEB_APP_MANAGED_IDENTITY,
    &azure::app_services::WEB_APP_NETWORKING,
    &azure::app_services::WEB_APP_PERF_COUNTERS,
    &azure::app_services::WEB_APP_PUSH_NOTIFICATIONS,
    &azure::app_services::WEB_APP_SCALING,
    &azure::app_services::WEB_APP_TLS_SSL,
    &azure::app_services::WEB_APP_WEB_JOBS,
    &azure::app_services::CACHING,
    &azure::app_services::CORS,
    &azure::app_services::CUSTOM_CONTAINERS,
    &azure::app_services::DEPLOYMENT,
    &azure::app_services::DEPLOYMENT_SLOTS,
    &azure::app_services::DNS,
    &azure::app_services::HEALTH_CHECK,
    &azure::app_services::DOTNET_WEB_APP,
    &azure::app_services::JAVA_WEB_APP,
    &azure::app_services::NODE_WEB_APP,
    &azure::app_services::PHP_WEB_APP,
    &azure::app_services::PYTHON_WEB_APP,
    &azure::app_services::RUBY_WEB_APP,
    &azure::app_services::WORDPRESS_WEB_APP,
    &azure::oryx::ORYX_BUILD_AUTOMATION,
    &azure::oryx::ORYX_DOTNET,
    &azure::oryx::ORYX_GOLANG,
    &azure::oryx::ORYX_HUGO,
    &azure::oryx::ORYX_JAVA,
    &azure::oryx::ORYX_NODE,
    &azure::oryx::ORYX_PHP,
    &azure::oryx::ORYX_PYTHON,
    &azure::oryx::ORYX_RUBY,
    &azure::pipelines::AZURE_PIPELINES,
    &ci::appveyor::APPVEYOR,
    &ci::circleci::CIRCLE_CI,
    &ci::github_actions::GITHUB_ACTIONS,
    &ci::gitlab::GITLAB,
    &ci::jenkins::JENKINS,
    &ci::travis::TRAVIS_CI,
    &google::CLOUD_RUN,
    &google::CLOUD_RUN_FUNCTIONS,
    &google::CLOUD_RUN_JOBS,
    &os::WINDOWS,
    &os::LINUX,
];

/// Returns every catalog shipped with the crate.
#[must_use]
pub fn all() -> &'static [&'static Catalog] {
    ALL
}

/// Finds a catalog by its kebab-case identifier (case-insensitive).
#[must_use]
pub fn find(name: &str) -> Option<&'static Catalog> {
    ALL.iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Finds a variable by symbolic name or raw key across every catalog.
///
/// Returns the owning catalog alongside the descriptor. The first match
/// in display order wins; raw keys shared by several platforms (e.g.
/// `CI`) resolve to the first catalog documenting them.
#[must_use]
pub fn find_var(name: &str) -> Option<(&'static Catalog, &'static VarSpec)> {
    ALL.iter()
        .find_map(|c| c.var(name).map(|spec| (*c, spec)))
}
