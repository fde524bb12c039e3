// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envdefine.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envdefine.toml (root)
//! 3. --config files
//! 4. ENVDEFINE_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVDEFINE_BUILD__MODE=staging         → build.mode = "staging"
//! ENVDEFINE_OPTIONS__DEFINE_ON=globalThis → options.define_on = "globalThis"
//! ```
//!
//! # Example
//!
//! ```toml
//! [build]
//! mode = "production"
//!
//! [[plugins]]
//! names = ["API_KEY"]
//!
//! [[plugins.defaults]]
//! name = "APP_VERSION"
//! value = "v2"
//!
//! [[plugins.defaults]]
//! name = "APP_RELEASE"
//! optional = true
//! ```

pub mod loader;
pub mod merge;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, EnvDefineResult, Result};
use crate::host::ConfigEnv;
use crate::plugin::EnvironmentPlugin;

use loader::ConfigLoader;
use types::{BuildConfig, OptionsConfig, PluginEntry};

/// Default configuration file name, looked up in the project root.
pub const CONFIG_FILE: &str = "envdefine.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ENVDEFINE";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Build invocation settings.
    pub build: BuildConfig,
    /// Shared plugin options.
    pub options: OptionsConfig,
    /// Plugin instances, in registration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginEntry>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envdefine::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("envdefine.toml")
    ///     .add_toml_file_optional("envdefine.local.toml")
    ///     .with_env_prefix("ENVDEFINE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check option values and every plugin entry.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty mode or namespace, or a plugin entry
    /// that does not describe a valid variable specification.
    pub fn validate(&self) -> EnvDefineResult<()> {
        if self.build.mode.is_empty() {
            return Err(empty_value("build", "mode").into());
        }
        if self.options.define_on.is_empty() {
            return Err(empty_value("options", "define_on").into());
        }
        for (index, entry) in self.plugins.iter().enumerate() {
            if entry.define_on.as_deref() == Some("") {
                return Err(empty_value(&format!("plugins.{index}"), "define_on").into());
            }
            merge::entry_spec(index, entry)?;
        }
        Ok(())
    }

    /// Instantiate one [`EnvironmentPlugin`] per `[[plugins]]` entry.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry does not describe a valid specification.
    pub fn plugins(&self) -> EnvDefineResult<Vec<EnvironmentPlugin>> {
        self.plugins
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Ok(EnvironmentPlugin::new(
                    merge::entry_spec(index, entry)?,
                    merge::merge_plugin_options(&self.options, entry),
                ))
            })
            .collect()
    }

    /// The host values for a config pass.
    ///
    /// `build.root` wins over `fallback_root`.
    #[must_use]
    pub fn config_env(&self, fallback_root: &Path) -> ConfigEnv {
        ConfigEnv::builder()
            .root(
                self.build
                    .root
                    .clone()
                    .unwrap_or_else(|| fallback_root.to_path_buf()),
            )
            .mode(self.build.mode.clone())
            .maybe_env_dir(self.build.env_dir.clone())
            .build()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_build_options(&mut options);
        self.format_shared_options(&mut options);
        self.format_plugin_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_build_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert("build.mode".into(), self.build.mode.clone());
        options.insert("build.root".into(), fmt(&self.build.root));
        options.insert("build.env_dir".into(), fmt(&self.build.env_dir));
    }

    fn format_shared_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "options.load_env_files".into(),
            self.options.load_env_files.to_string(),
        );
        options.insert("options.prefix".into(), self.options.prefix.clone());
        options.insert("options.define_on".into(), self.options.define_on.clone());
    }

    fn format_plugin_options(&self, options: &mut BTreeMap<String, String>) {
        for (index, entry) in self.plugins.iter().enumerate() {
            let key = |field: &str| format!("plugins.{index}.{field}");

            if entry.all {
                options.insert(key("all"), "true".into());
            }
            if !entry.names.is_empty() {
                options.insert(key("names"), entry.names.join(", "));
            }
            for default in &entry.defaults {
                let shown = match (&default.value, default.optional) {
                    (Some(value), _) => format!("{value:?}"),
                    (None, true) => "null".into(),
                    (None, false) => "required".into(),
                };
                options.insert(key(&format!("defaults.{}", default.name)), shown);
            }
            if let Some(load) = entry.load_env_files {
                options.insert(key("load_env_files"), load.to_string());
            }
            if let Some(prefix) = &entry.prefix {
                options.insert(key("prefix"), prefix.clone());
            }
            if let Some(define_on) = &entry.define_on {
                options.insert(key("define_on"), define_on.clone());
            }
        }
    }
}

fn empty_value(section: &str, key: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: "must not be empty".to_string(),
    }
}
