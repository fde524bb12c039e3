// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
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
//!                |            define / env-files
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, [[plugins]] entries|
//!              '-------------+-------------'
//!                            v
//!              host   Plugin, Enforce, apply_config_hooks
//!                            |
//!                            v
//!              plugin EnvironmentPlugin
//!                 |          |           |
//!                 v          v           v
//!               env        spec       resolve
//!            .env files  VariableSpec  DefineMap
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod host;
pub mod logging;
pub mod plugin;
pub mod resolve;
pub mod spec;
