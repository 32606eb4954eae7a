// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for envatlas.

use crate::catalog;
use crate::cli::list::ListArgs;
use crate::error::{AtlasError, CatalogError, Result};

/// Main handler for the list command.
///
/// Without a catalog argument, prints every catalog identifier with its
/// title and variable count. With one, prints the catalog's documented
/// variables (and prefix accessors with `--prefixes`).
///
/// # Errors
///
/// Returns an error when the named catalog does not exist.
pub fn run_list_command(args: &ListArgs) -> Result<()> {
    let Some(name) = &args.catalog else {
        for cat in catalog::all() {
            println!(
                "{:<32} {:<40} {} vars",
                cat.name,
                cat.title,
                cat.vars.len()
            );
        }
        return Ok(());
    };

    let cat = catalog::find(name)
        .ok_or_else(|| AtlasError::from(CatalogError::UnknownCatalog(name.clone())))?;

    println!("{} ({})", cat.title, cat.name);
    if !cat.docs_url.is_empty() {
        println!("{}", cat.docs_url);
    }
    println!();
    for spec in cat.vars {
        let marker = if spec.deprecated { " [deprecated]" } else { "" };
        println!("{:<44} {}{}", spec.name, spec.key, marker);
    }

    if args.prefixes && !cat.prefixes.is_empty() {
        println!();
        for spec in cat.prefixes {
            println!("{:<44} {}*", spec.name, spec.prefix);
        }
    }

    Ok(())
}
