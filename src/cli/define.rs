// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Define command arguments.

use clap::{Args, ValueEnum};

/// Arguments for the `define` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DefineArgs {
    /// Output format of the define map.
    #[arg(short = 'f', long = "format", value_enum, default_value_t)]
    pub format: DefineFormat,
}

/// How `define` prints the resolved map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DefineFormat {
    /// Pretty-printed JSON object.
    #[default]
    Json,
    /// One `KEY=LITERAL` per line.
    Lines,
}

impl std::fmt::Display for DefineFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Lines => write!(f, "lines"),
        }
    }
}

/// Arguments for the `env-files` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvFilesArgs {
    /// Also list candidate files that do not exist.
    #[arg(short = 'a', long = "all")]
    pub all: bool,
}
