// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config file
//! --case-rule RULE  ← Key comparison rule (host/sensitive/insensitive)
//! --scope SCOPE     ← Storage tier (process/user/machine)
//! --log-level N     ← Console verbosity (0-5)
//! --log-file FILE   ← Verbose log destination
//!
//! Precedence: CLI flags > ENVATLAS_* env > --config > envatlas.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::env::{CaseRule, Scope};

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to an additional TOML configuration file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Key comparison rule, overriding configuration.
    /// `host` picks the executing platform's rule.
    #[arg(long = "case-rule", value_name = "RULE")]
    pub case_rule: Option<CaseRule>,

    /// Storage tier to read from (user/machine need Windows; elsewhere
    /// they fall back to process).
    #[arg(long = "scope", value_name = "SCOPE")]
    pub scope: Option<Scope>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL",
          value_parser = clap::value_parser!(u8).range(0..=5))]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
