// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            AtlasError (~16 bytes)
//!                   |
//!      +------+-----+-----+------+
//!      |      |     |     |      |
//!      v      v     v     v      v
//!    Bail   Env   Cfg  Catalog  Io/Other
//!           Box   Box    Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Env     EmptyName, NotUnicode, Registry* (Windows)
//!   Config  ReadError, ParseError, InvalidValue
//!   Catalog UnknownCatalog, UnknownVariable, UnknownPrefix
//!
//! Absent environment variables are never errors; lookups
//! report absence as Ok(None).
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`AtlasError`].
pub type AtlasResult<T> = std::result::Result<T, AtlasError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Environment lookup failed.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Catalog resolution error.
    #[error("catalog error: {0}")]
    Catalog(#[from] Box<CatalogError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`AtlasError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> AtlasError {
    AtlasError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for AtlasError {
                fn from(err: $error) -> Self {
                    AtlasError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvError => Env,
    ConfigError => Config,
    CatalogError => Catalog,
    std::io::Error => Io,
}

// --- Environment Errors ---

/// Environment lookup errors.
///
/// An unset variable is an expected outcome and reported as `Ok(None)`
/// by the lookup facade, never through this enum.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Empty variable name passed to a lookup (programmer error).
    #[error("environment variable name must not be empty")]
    EmptyName,

    /// The value stored under the name is not valid Unicode.
    #[error("value of environment variable '{name}' is not valid unicode")]
    NotUnicode { name: String },

    /// Failed to open a registry key backing a user/machine scope (Windows).
    #[error("failed to open registry key '{key}': {source}")]
    RegistryOpen {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a registry value backing a user/machine scope (Windows).
    #[error("failed to read registry value '{name}' under '{key}': {source}")]
    RegistryRead {
        key: String,
        name: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Catalog Errors ---

/// Catalog resolution errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No catalog registered under the given name.
    #[error("unknown catalog '{0}'")]
    UnknownCatalog(String),

    /// The catalog does not document a variable under the symbolic name.
    #[error("catalog '{catalog}' has no variable named '{name}'")]
    UnknownVariable { catalog: String, name: String },

    /// The catalog does not declare a bulk prefix accessor under the name.
    #[error("catalog '{catalog}' has no prefix accessor named '{name}'")]
    UnknownPrefix { catalog: String, name: String },
}

#[cfg(test)]
mod tests;
