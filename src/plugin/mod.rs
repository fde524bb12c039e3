// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment plugin: exposes environment variables as defines.
//!
//! ```text
//! config(&ConfigEnv, process_env)
//!   load_env_files? --yes--> env::load_env(mode, env_dir, prefix)
//!        | no
//!        v
//!   process_env
//!        |
//!        v
//!   VariableSpec::normalize --> resolve() --> UserConfig { define }
//! ```

use bon::Builder;
use tracing::debug;

use crate::env::{EnvSnapshot, load_env};
use crate::error::{EnvDefineError, Result};
use crate::host::{ConfigEnv, Enforce, Plugin, UserConfig};
use crate::resolve::{DEFAULT_DEFINE_ON, resolve};
use crate::spec::VariableSpec;

/// Name reported to the host.
pub const PLUGIN_NAME: &str = "process-env-variables";

/// Options accepted by [`EnvironmentPlugin`].
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct PluginOptions {
    /// Load mode-scoped env files before resolving.
    #[builder(setters(name = with_load_env_files), default = true)]
    load_env_files: bool,
    /// Only variables starting with this prefix are loaded, and `All`
    /// exposes exactly those.
    #[builder(setters(name = with_prefix), into, default)]
    prefix: String,
    /// Namespace of the generated define keys.
    #[builder(setters(name = with_define_on), into, default = DEFAULT_DEFINE_ON.to_string())]
    define_on: String,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PluginOptions {
    #[must_use]
    pub const fn load_env_files(&self) -> bool {
        self.load_env_files
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn define_on(&self) -> &str {
        &self.define_on
    }
}

/// Exposes selected environment variables to client code.
#[derive(Debug, Clone)]
pub struct EnvironmentPlugin {
    vars: VariableSpec,
    options: PluginOptions,
}

impl EnvironmentPlugin {
    #[must_use]
    pub const fn new(vars: VariableSpec, options: PluginOptions) -> Self {
        Self { vars, options }
    }

    #[must_use]
    pub const fn vars(&self) -> &VariableSpec {
        &self.vars
    }

    #[must_use]
    pub const fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// The environment this plugin resolves against for `env`.
    ///
    /// # Errors
    ///
    /// Returns an error if env files are enabled and cannot be loaded.
    pub fn effective_env(&self, env: &ConfigEnv, process_env: &EnvSnapshot) -> Result<EnvSnapshot> {
        if !self.options.load_env_files {
            return Ok(process_env.clone());
        }

        let env_dir = env.env_dir();
        debug!(
            mode = env.mode(),
            env_dir = %env_dir.display(),
            prefix = self.options.prefix.as_str(),
            "loading env files"
        );
        Ok(
            load_env(env.mode(), &env_dir, &self.options.prefix, process_env)
                .map_err(EnvDefineError::from)?,
        )
    }
}

impl Plugin for EnvironmentPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn enforce(&self) -> Enforce {
        Enforce::Post
    }

    fn config(&self, env: &ConfigEnv, process_env: &EnvSnapshot) -> Result<UserConfig> {
        let snapshot = self.effective_env(env, process_env)?;
        let normalized = self.vars.normalize(&snapshot, &self.options.prefix);
        let define = resolve(
            &snapshot,
            &normalized.names,
            &normalized.defaults,
            &self.options.define_on,
        )
        .map_err(EnvDefineError::from)?;
        Ok(UserConfig { define })
    }
}

#[cfg(test)]
mod tests;
