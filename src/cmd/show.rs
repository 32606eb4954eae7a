// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show command implementation for envatlas.

use serde_json::json;

use crate::catalog;
use crate::cli::show::ShowArgs;
use crate::env::EnvReader;
use crate::error::{AtlasError, CatalogError, Result};

/// Main handler for the show command.
///
/// Reads every documented variable of a catalog and prints the results,
/// `<unset>` marking absent variables in text mode.
///
/// # Errors
///
/// Returns an error when the catalog does not exist or a lookup fails.
pub fn run_show_command(args: &ShowArgs, reader: &EnvReader) -> Result<()> {
    let cat = catalog::find(&args.catalog)
        .ok_or_else(|| AtlasError::from(CatalogError::UnknownCatalog(args.catalog.clone())))?;

    tracing::debug!(catalog = cat.name, vars = cat.vars.len(), "reading catalog");
    let values = cat.read_all(reader).map_err(AtlasError::from)?;

    if args.json {
        let entries: Vec<_> = values
            .iter()
            .filter(|(_, value)| !args.set_only || value.is_some())
            .map(|(spec, value)| {
                json!({
                    "name": spec.name,
                    "key": spec.key,
                    "value": value,
                    "deprecated": spec.deprecated,
                })
            })
            .collect();
        let doc = json!({ "catalog": cat.name, "vars": entries });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{} ({})", cat.title, cat.name);
    println!();
    for (spec, value) in &values {
        match value {
            Some(v) => println!("{:<44} {:<40} {v}", spec.name, spec.key),
            None if !args.set_only => {
                println!("{:<44} {:<40} <unset>", spec.name, spec.key);
            }
            None => {}
        }
    }

    Ok(())
}
