// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for envdefine.

use std::path::Path;

use crate::cli::define::EnvFilesArgs;
use crate::config::Config;
use crate::env::env_files;
use crate::error::{EnvDefineError, Result};

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration files.
pub fn run_configs_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}

/// Display the env files read for the configured mode, lowest priority first.
///
/// # Errors
///
/// Returns an error if the configured mode is reserved.
pub fn run_env_files_command(args: &EnvFilesArgs, config: &Config, cwd: &Path) -> Result<()> {
    for line in list_env_files(args, config, cwd)? {
        println!("{line}");
    }
    Ok(())
}

/// Lines printed by the `env-files` command.
///
/// # Errors
///
/// Returns an error if the configured mode is reserved.
pub fn list_env_files(args: &EnvFilesArgs, config: &Config, cwd: &Path) -> Result<Vec<String>> {
    let env = config.config_env(cwd);
    let files = env_files(env.mode(), &env.env_dir()).map_err(EnvDefineError::from)?;

    Ok(files
        .iter()
        .filter_map(|path| match (path.is_file(), args.all) {
            (true, _) => Some(path.display().to_string()),
            (false, true) => Some(format!("{} (missing)", path.display())),
            (false, false) => None,
        })
        .collect())
}
