// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Prefix command implementation for envatlas.

use crate::cli::prefix::PrefixArgs;
use crate::env::{EnvReader, Scope};
use crate::error::Result;

/// Main handler for the prefix command.
///
/// Dumps every variable whose raw key matches the prefix under the
/// configured comparison rule, sorted by key. Without a prefix the whole
/// environment of the scope is printed.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn run_prefix_command(args: &PrefixArgs, reader: &EnvReader, scope: Scope) -> Result<()> {
    let vars = reader.by_prefix(args.prefix.as_deref(), scope);
    tracing::debug!(
        prefix = args.prefix.as_deref().unwrap_or(""),
        matched = vars.len(),
        "prefix lookup"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&vars)?);
        return Ok(());
    }

    for (key, value) in &vars {
        println!("{key}={value}");
    }

    Ok(())
}
