// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment snapshots and mode-scoped env file loading.
//!
//! # File Priority
//!
//! ```text
//! Priority (low → high)
//! 1. .env
//! 2. .env.local
//! 3. .env.<mode>
//! 4. .env.<mode>.local
//! 5. process environment
//! ```
//!
//! Only keys starting with the prefix survive; an empty prefix keeps
//! everything.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::error::EnvFileError;

/// Base name shared by all env files.
pub const ENV_FILE: &str = ".env";

/// Suffix marking machine-local env files.
pub const LOCAL_SUFFIX: &str = "local";

/// Read-only mapping from variable name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot(BTreeMap<String, String>);

impl EnvSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Variable names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of the variables whose name starts with `prefix`.
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        self.iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for EnvSnapshot {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// Candidate env files for `mode`, lowest priority first.
///
/// # Errors
///
/// Returns [`EnvFileError::ReservedMode`] for the mode `local`.
pub fn env_files(mode: &str, env_dir: &Path) -> Result<Vec<PathBuf>, EnvFileError> {
    if mode == LOCAL_SUFFIX {
        return Err(EnvFileError::ReservedMode);
    }

    Ok([
        ENV_FILE.to_string(),
        format!("{ENV_FILE}.{LOCAL_SUFFIX}"),
        format!("{ENV_FILE}.{mode}"),
        format!("{ENV_FILE}.{mode}.{LOCAL_SUFFIX}"),
    ]
    .into_iter()
    .map(|name| env_dir.join(name))
    .collect())
}

/// Candidate env files for `mode` that exist as regular files.
///
/// # Errors
///
/// Returns [`EnvFileError::ReservedMode`] for the mode `local`.
pub fn existing_env_files(mode: &str, env_dir: &Path) -> Result<Vec<PathBuf>, EnvFileError> {
    Ok(env_files(mode, env_dir)?
        .into_iter()
        .filter(|path| path.is_file())
        .collect())
}

/// Build the effective environment for `mode`.
///
/// Env files in `env_dir` are layered by priority, then every process
/// variable overrides them. Only keys starting with `prefix` are kept.
///
/// `${VAR}` references inside a file are expanded while it is parsed, from
/// the real process environment (`std::env`) or else from keys defined
/// earlier in the same file. `process_env` only takes part in the override
/// step, so a variable present solely in an injected snapshot expands to an
/// empty string.
///
/// # Errors
///
/// Returns an [`EnvFileError`] if the mode is reserved or an existing env
/// file cannot be read or parsed.
pub fn load_env(
    mode: &str,
    env_dir: &Path,
    prefix: &str,
    process_env: &EnvSnapshot,
) -> Result<EnvSnapshot, EnvFileError> {
    let files = existing_env_files(mode, env_dir)?;

    let mut parsed = EnvSnapshot::new();
    for path in &files {
        let entries = parse_env_file(path)?;
        debug!(path = %path.display(), entries = entries.len(), "loaded env file");
        parsed.extend(entries);
    }

    let mut env = parsed.with_prefix(prefix);
    for (key, value) in process_env.iter().filter(|(key, _)| key.starts_with(prefix)) {
        if parsed.contains(key) {
            trace!(key, "process environment overrides env file");
        }
        env.insert(key, value);
    }

    info!(
        mode,
        files = files.len(),
        variables = env.len(),
        "environment loaded"
    );
    Ok(env)
}

fn parse_env_file(path: &Path) -> Result<Vec<(String, String)>, EnvFileError> {
    let display = path.display().to_string();
    let iter = dotenvy::from_path_iter(path).map_err(|e| file_error(&display, e))?;
    iter.map(|item| item.map_err(|e| file_error(&display, e)))
        .collect()
}

fn file_error(path: &str, err: dotenvy::Error) -> EnvFileError {
    match err {
        dotenvy::Error::Io(source) => EnvFileError::Io {
            path: path.to_string(),
            source,
        },
        other => EnvFileError::Parse {
            path: path.to_string(),
            message: other.to_string(),
        },
    }
}
