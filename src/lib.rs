// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          list / show / get / prefix
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          catalog          |
//!              |  static VarSpec tables    |
//!              |  aws / azure / ci / ...   |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |            env            |
//!              | reader, snapshot, scope   |
//!              '---------------------------'
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, config    |
//!   +-----------------------------------------+
//! ```

pub mod catalog;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
