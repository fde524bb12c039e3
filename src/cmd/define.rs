// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `define` command.
//!
//! ```text
//! Config --> plugins() --> apply_config_hooks(ConfigEnv, process env)
//!                                |
//!                                v
//!                   DefineMap --> stdout (json | lines)
//! ```

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use crate::cli::define::{DefineArgs, DefineFormat};
use crate::config::Config;
use crate::env::EnvSnapshot;
use crate::error::{Result, bail_out};
use crate::host::{Plugin, apply_config_hooks};
use crate::resolve::DefineMap;

/// Run the define command against the current process environment.
///
/// # Errors
///
/// Returns an error if no plugin is configured, an env file cannot be
/// loaded, or a required variable is missing. Nothing is printed then.
pub fn run_define_command(args: &DefineArgs, config: &Config, cwd: &Path) -> Result<()> {
    let define = resolve_defines(config, cwd, &EnvSnapshot::from_process())?;
    print!("{}", format_define_map(&define, args.format)?);
    Ok(())
}

/// Run every configured plugin and merge their defines.
///
/// # Errors
///
/// Returns an error if no plugin is configured or any config hook fails.
pub fn resolve_defines(config: &Config, cwd: &Path, process_env: &EnvSnapshot) -> Result<DefineMap> {
    let plugins = config.plugins()?;
    if plugins.is_empty() {
        return Err(bail_out("no plugins configured; add a [[plugins]] entry to envdefine.toml").into());
    }

    let env = config.config_env(cwd);
    info!(
        mode = env.mode(),
        root = %env.root().display(),
        plugins = plugins.len(),
        "resolving defines"
    );

    let hooks: Vec<&dyn Plugin> = plugins.iter().map(|plugin| plugin as &dyn Plugin).collect();
    apply_config_hooks(&hooks, &env, process_env)
}

/// Render a define map, newline terminated.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_define_map(define: &DefineMap, format: DefineFormat) -> Result<String> {
    match format {
        DefineFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(define)?)),
        DefineFormat::Lines => Ok(define.iter().fold(String::new(), |mut out, (key, literal)| {
            let _ = writeln!(out, "{key}={literal}");
            out
        })),
    }
}
