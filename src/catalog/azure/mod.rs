// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Microsoft Azure catalogs.
//!
//! App Service variables are split the way the platform documents them:
//! the core web app contract, per-feature groups, the Oryx build
//! platform, and Azure Pipelines.

pub mod app_services;
pub mod oryx;
pub mod pipelines;
