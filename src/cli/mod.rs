// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envatlas [global options] <command>
//! list [catalog]
//! show <catalog>
//! get <name>
//! prefix [PREFIX]
//! version
//! ```

pub mod get;
pub mod global;
pub mod list;
pub mod prefix;
pub mod show;

#[cfg(test)]
mod tests;

use crate::cli::get::GetArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::list::ListArgs;
use crate::cli::prefix::PrefixArgs;
use crate::cli::show::ShowArgs;
use clap::{Parser, Subcommand};

/// Typed catalog of well-known platform environment variables.
#[derive(Debug, Parser)]
#[command(
    name = "envatlas",
    author,
    version,
    about = "Typed catalog of platform environment variables",
    long_about = "envatlas documents the environment-variable contracts of\n\
                  cloud hosts, CI services and operating systems, and reads\n\
                  their live values from the current process environment.\n\n\
                  `envatlas list` shows the known catalogs, `envatlas show\n\
                  github-actions` prints every documented GitHub Actions\n\
                  variable with its current value, and `envatlas prefix AWS_`\n\
                  dumps everything under a raw key prefix.",
    after_help = "CONFIG FILES:\n\n\
                  envatlas reads an optional `envatlas.toml` from the current\n\
                  directory, followed by the file given with --config and\n\
                  ENVATLAS_* environment overrides. CLI flags take precedence\n\
                  over every file setting."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists catalogs, or the variables of one catalog.
    List(ListArgs),

    /// Shows every variable of a catalog with its live value.
    Show(ShowArgs),

    /// Reads a single variable by symbolic name or raw key.
    Get(GetArgs),

    /// Dumps all variables matching a raw key prefix.
    Prefix(PrefixArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if
/// help/version information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
