// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plugin entry merging.
//!
//! ```text
//! OptionsConfig + PluginEntry --> field-by-field merge --> PluginOptions
//! PluginEntry { all, names, defaults } --> VariableSpec
//! ```
//!
//! Only explicitly set fields (`Some`) in an entry replace `[options]` values.

use super::types::{OptionsConfig, PluginEntry};
use crate::error::{ConfigError, EnvDefineResult};
use crate::plugin::PluginOptions;
use crate::spec::{DeclaredDefault, VariableSpec};

/// Merge an entry's option overrides over the shared options.
pub(super) fn merge_plugin_options(base: &OptionsConfig, entry: &PluginEntry) -> PluginOptions {
    PluginOptions::builder()
        .with_load_env_files(entry.load_env_files.unwrap_or(base.load_env_files))
        .with_prefix(
            entry
                .prefix
                .clone()
                .unwrap_or_else(|| base.prefix.clone()),
        )
        .with_define_on(
            entry
                .define_on
                .clone()
                .unwrap_or_else(|| base.define_on.clone()),
        )
        .build()
}

/// Build the variable specification an entry declares.
///
/// `names` alone yields a list spec. With `defaults` present, every listed
/// name becomes a required default ahead of the declared ones.
pub(super) fn entry_spec(index: usize, entry: &PluginEntry) -> EnvDefineResult<VariableSpec> {
    let declares_names = !entry.names.is_empty() || !entry.defaults.is_empty();

    if entry.all {
        if declares_names {
            return Err(invalid(
                index,
                "all",
                "cannot be combined with `names` or `defaults`",
            )
            .into());
        }
        return Ok(VariableSpec::All);
    }

    if !declares_names {
        return Err(invalid(
            index,
            "names",
            "entry declares no variables; set `names`, `defaults` or `all = true`",
        )
        .into());
    }

    if entry.defaults.is_empty() {
        return Ok(VariableSpec::names(entry.names.iter().cloned())?);
    }

    let mut entries: Vec<(String, DeclaredDefault)> = entry
        .names
        .iter()
        .map(|name| (name.clone(), DeclaredDefault::Required))
        .collect();
    for default in &entry.defaults {
        entries.push((default.name.clone(), default.to_declared()?));
    }
    Ok(VariableSpec::defaults(entries)?)
}

fn invalid(index: usize, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: format!("plugins.{index}"),
        key: key.to_string(),
        message: message.to_string(),
    }
}
