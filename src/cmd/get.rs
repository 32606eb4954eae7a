// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Get command implementation for envatlas.

use crate::catalog;
use crate::cli::get::GetArgs;
use crate::env::{EnvReader, Scope};
use crate::error::{AtlasError, CatalogError, Result, bail_out};

/// Main handler for the get command.
///
/// Resolves the name through the catalogs (or treats it as a raw key
/// with `--raw`) and prints the value when set. Returns whether the
/// variable was found so the caller can signal absence via exit code.
///
/// # Errors
///
/// Returns an error when the name resolves to no documented variable or
/// the lookup itself fails. Absence of a value is not an error.
pub fn run_get_command(args: &GetArgs, reader: &EnvReader, scope: Scope) -> Result<bool> {
    let value = if args.raw {
        reader.get(&args.name, scope).map_err(AtlasError::from)?
    } else {
        let (cat, spec) = resolve_var(args)?;
        tracing::debug!(catalog = cat.name, key = spec.key, "resolved accessor");
        if spec.deprecated {
            tracing::warn!(key = spec.key, "variable is deprecated by its platform");
        }
        reader.get(spec.key, scope).map_err(AtlasError::from)?
    };

    match value {
        Some(v) => {
            println!("{v}");
            Ok(true)
        }
        None => Ok(false),
    }
}

fn resolve_var(
    args: &GetArgs,
) -> Result<(&'static catalog::Catalog, &'static catalog::VarSpec)> {
    if let Some(name) = &args.catalog {
        let cat = catalog::find(name)
            .ok_or_else(|| AtlasError::from(CatalogError::UnknownCatalog(name.clone())))?;
        let spec = cat.var(&args.name).ok_or_else(|| {
            AtlasError::from(CatalogError::UnknownVariable {
                catalog: cat.name.to_string(),
                name: args.name.clone(),
            })
        })?;
        return Ok((cat, spec));
    }

    catalog::find_var(&args.name).ok_or_else(|| {
        bail_out(format!(
            "no catalog documents a variable named '{}'",
            args.name
        ))
        .into()
    })
}
