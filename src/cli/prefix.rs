// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `prefix` command.

use clap::Args;

/// Arguments for bulk prefix lookups.
#[derive(Debug, Clone, Default, Args)]
pub struct PrefixArgs {
    /// Raw key prefix; the full environment when omitted.
    pub prefix: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
