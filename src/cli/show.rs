// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `show` command.

use clap::Args;

/// Arguments for showing a catalog's live values.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Catalog identifier, e.g. `github-actions`.
    pub catalog: String,

    /// Only print variables that are currently set.
    #[arg(short = 's', long = "set-only")]
    pub set_only: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
