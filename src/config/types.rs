// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for envdefine.
//!
//! # Config Structure
//!
//! ```text
//! Config: BuildConfig, OptionsConfig, [PluginEntry]
//! PluginEntry: all | names + [DefaultEntry]
//! DefaultEntry: value | optional | required (default)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::host::DEFAULT_MODE;
use crate::resolve::DEFAULT_DEFINE_ON;
use crate::spec::DeclaredDefault;

/// Build invocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Build mode; selects `.env.<mode>` files.
    pub mode: String,
    /// Project root (defaults to the current directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Env file directory, relative to the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_dir: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            root: None,
            env_dir: None,
        }
    }
}

/// Plugin options shared by every `[[plugins]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsConfig {
    /// Load mode-scoped env files before resolving.
    pub load_env_files: bool,
    /// Variable name prefix filter.
    pub prefix: String,
    /// Namespace of the generated define keys.
    pub define_on: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            load_env_files: true,
            prefix: String::new(),
            define_on: DEFAULT_DEFINE_ON.to_string(),
        }
    }
}

/// One plugin instance.
///
/// Unset option fields fall back to `[options]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginEntry {
    /// Expose every variable matching the prefix.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub all: bool,
    /// Required variable names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    /// Variables with a declared default.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub defaults: Vec<DefaultEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_env_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub define_on: Option<String>,
}

/// A variable with its fallback.
///
/// At most one of `value`, `optional` and `required` may be set; an entry
/// with none of them is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl DefaultEntry {
    /// Convert into the declared default it describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingDefault`] if more than one of
    /// `value`, `optional` and `required` is set.
    pub fn to_declared(&self) -> Result<DeclaredDefault, ConfigError> {
        match (&self.value, self.optional, self.required) {
            (Some(value), false, false) => Ok(DeclaredDefault::Value(value.clone())),
            (None, true, false) => Ok(DeclaredDefault::Optional),
            (None, false, _) => Ok(DeclaredDefault::Required),
            _ => Err(ConfigError::ConflictingDefault {
                name: self.name.clone(),
                message: "set only one of `value`, `optional` or `required`".to_string(),
            }),
        }
    }
}
