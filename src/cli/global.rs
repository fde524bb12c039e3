// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --root DIR        ← build.root override
//! --mode MODE       ← build.mode override
//! --env-dir DIR     ← build.env_dir override
//! --no-env-files    ← options.load_env_files = false
//! --set KEY=VAL     ← Direct config override
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//!
//! Precedence: CLI flags > --set > ENVDEFINE_* > --config > envdefine.toml
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogFormat;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Project root; `envdefine.toml` and env files are looked up here.
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Build mode, selects `.env.<mode>` files.
    #[arg(short = 'm', long = "mode", value_name = "MODE")]
    pub mode: Option<String>,

    /// Directory holding env files, relative to the root.
    #[arg(long = "env-dir", value_name = "DIR")]
    pub env_dir: Option<PathBuf>,

    /// Only read the process environment, skip env files.
    #[arg(long = "no-env-files")]
    pub no_env_files: bool,

    /// Sets an option, such as 'options.prefix=VITE_'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables loading `envdefine.toml` from the root, only uses --config.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Line format of the log file.
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormatArg,
}

/// CLI mirror of [`LogFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormatArg {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for LogFormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", LogFormat::from(*self))
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => Self::Text,
            LogFormatArg::Json => Self::Json,
        }
    }
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// `--set` entries come first so dedicated flags win over them.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if a `--set` entry has no `=`.
    pub fn to_config_overrides(&self) -> Result<Vec<(String, String)>, ConfigError> {
        let mut overrides = self
            .options
            .iter()
            .map(|option| {
                option
                    .split_once('=')
                    .map(|(key, value)| (key.trim().to_string(), value.to_string()))
                    .ok_or_else(|| ConfigError::InvalidValue {
                        section: "cli".to_string(),
                        key: "set".to_string(),
                        message: format!("expected KEY=VALUE, got '{option}'"),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(ref root) = self.root {
            overrides.push(("build.root".to_string(), root.display().to_string()));
        }

        if let Some(ref mode) = self.mode {
            overrides.push(("build.mode".to_string(), mode.clone()));
        }

        if let Some(ref env_dir) = self.env_dir {
            overrides.push(("build.env_dir".to_string(), env_dir.display().to_string()));
        }

        if self.no_env_files {
            overrides.push(("options.load_env_files".to_string(), "false".to_string()));
        }

        Ok(overrides)
    }
}
