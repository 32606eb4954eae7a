// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `get` command.

use clap::Args;

/// Arguments for reading a single variable.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Symbolic accessor name (e.g. `AWSRegion`) or raw key with --raw.
    pub name: String,

    /// Restrict the symbolic lookup to one catalog.
    #[arg(long, value_name = "CATALOG", conflicts_with = "raw")]
    pub catalog: Option<String>,

    /// Treat NAME as a raw environment key, bypassing the catalogs.
    #[arg(short = 'r', long)]
    pub raw: bool,
}
