// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `list` command.

use clap::Args;

/// Arguments for listing catalogs or their variables.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Catalog to list the variables of; lists all catalogs when omitted.
    pub catalog: Option<String>,

    /// Also list the catalog's bulk prefix accessors.
    #[arg(short = 'p', long = "prefixes")]
    pub prefixes: bool,
}
