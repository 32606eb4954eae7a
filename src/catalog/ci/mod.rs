// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Continuous-integration service catalogs, one module per vendor.

pub mod appveyor;
pub mod circleci;
pub mod github_actions;
pub mod gitlab;
pub mod jenkins;
pub mod travis;
