// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contract between plugins and the host build tool.
//!
//! # Config Pass
//!
//! ```text
//! plugins --stable sort by Enforce--> Pre.. Normal.. Post..
//!    |
//!    v  plugin.config(&ConfigEnv, &EnvSnapshot)
//! UserConfig { define } per plugin
//!    |
//!    v  merge, later wins
//! DefineMap handed to static replacement
//! ```
//!
//! `Post` plugins merge last, so their defines take precedence over
//! anything configured earlier.

use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::debug;

use crate::env::EnvSnapshot;
use crate::error::Result;
use crate::resolve::DefineMap;

/// Default build mode.
pub const DEFAULT_MODE: &str = "production";

/// Ordering slot of a plugin within a config pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Enforce {
    Pre,
    #[default]
    Normal,
    Post,
}

impl std::fmt::Display for Enforce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pre => write!(f, "pre"),
            Self::Normal => write!(f, "normal"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// Values the host supplies to every config hook.
#[derive(Debug, Clone, Builder)]
pub struct ConfigEnv {
    /// Project root; relative env directories are resolved against it.
    #[builder(into)]
    root: PathBuf,
    /// Build mode, e.g. `production` or `development`.
    #[builder(into, default = DEFAULT_MODE.to_string())]
    mode: String,
    /// Directory holding env files, relative to `root` unless absolute.
    #[builder(into)]
    env_dir: Option<PathBuf>,
}

impl ConfigEnv {
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Effective env file directory.
    #[must_use]
    pub fn env_dir(&self) -> PathBuf {
        self.env_dir
            .as_ref()
            .map_or_else(|| self.root.clone(), |dir| self.root.join(dir))
    }
}

/// Partial configuration returned by a config hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserConfig {
    /// Static replacements: source expression to literal.
    pub define: DefineMap,
}

/// A host plugin participating in the config pass.
pub trait Plugin {
    /// Plugin name, used in logs.
    fn name(&self) -> &str;

    /// Ordering slot (default: [`Enforce::Normal`]).
    fn enforce(&self) -> Enforce {
        Enforce::Normal
    }

    /// Produce this plugin's partial configuration.
    ///
    /// # Errors
    ///
    /// Any error aborts the whole config pass.
    fn config(&self, env: &ConfigEnv, process_env: &EnvSnapshot) -> Result<UserConfig>;
}

/// Run every plugin's config hook in enforcement order and merge the
/// resulting defines.
///
/// # Errors
///
/// Returns the first hook error; no partial map is produced.
pub fn apply_config_hooks(
    plugins: &[&dyn Plugin],
    env: &ConfigEnv,
    process_env: &EnvSnapshot,
) -> Result<DefineMap> {
    let mut ordered: Vec<&dyn Plugin> = plugins.to_vec();
    ordered.sort_by_key(|plugin| plugin.enforce());

    let mut define = DefineMap::new();
    for plugin in ordered {
        let config = plugin.config(env, process_env)?;
        debug!(
            plugin = plugin.name(),
            enforce = %plugin.enforce(),
            defines = config.define.len(),
            "applied config hook"
        );
        define.extend(config.define);
    }
    Ok(define)
}

#[cfg(test)]
mod tests;
