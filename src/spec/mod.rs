// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Variable specifications: which names to expose and their fallbacks.
//!
//! ```text
//! VariableSpec
//!   All                 every env key starting with prefix
//!   Names([..])         listed names, all required
//!   Defaults([(k, d)])  listed names with a DeclaredDefault each
//!        |
//!        v  normalize(env, prefix)
//!   Normalized { names, defaults }  --> resolve()
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::env::EnvSnapshot;
use crate::error::SpecError;

/// Fallback used when a variable is absent from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredDefault {
    /// Concrete string default.
    Value(String),
    /// Absence is allowed and collapses to the `null` literal.
    Optional,
    /// Absence is an error even though a default slot exists.
    Required,
}

impl DeclaredDefault {
    /// Shorthand for [`DeclaredDefault::Value`].
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for DeclaredDefault {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for DeclaredDefault {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

/// Name to declared default lookup table.
pub type Defaults = BTreeMap<String, DeclaredDefault>;

/// The variables a plugin instance exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableSpec {
    /// Every variable of the effective environment matching the prefix.
    All,
    /// Listed names without defaults; every one is required.
    Names(Vec<String>),
    /// Listed names with a declared default each, in declaration order.
    Defaults(Vec<(String, DeclaredDefault)>),
}

/// A specification flattened into the resolver's inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub names: Vec<String>,
    pub defaults: Defaults,
}

impl VariableSpec {
    /// Build a list specification.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] if a name is empty or appears twice.
    pub fn names<I, S>(names: I) -> Result<Self, SpecError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        check_names(names.iter().map(String::as_str))?;
        Ok(Self::Names(names))
    }

    /// Build a defaults specification.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] if a name is empty or appears twice.
    pub fn defaults<I, K, D>(entries: I) -> Result<Self, SpecError>
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: Into<DeclaredDefault>,
    {
        let entries: Vec<(String, DeclaredDefault)> = entries
            .into_iter()
            .map(|(name, default)| (name.into(), default.into()))
            .collect();
        check_names(entries.iter().map(|(name, _)| name.as_str()))?;
        Ok(Self::Defaults(entries))
    }

    /// Flatten into the name list and defaults table the resolver consumes.
    ///
    /// `All` selects the keys of `env` that start with `prefix`, in key order.
    #[must_use]
    pub fn normalize(&self, env: &EnvSnapshot, prefix: &str) -> Normalized {
        match self {
            Self::All => Normalized {
                names: env
                    .keys()
                    .filter(|key| key.starts_with(prefix))
                    .cloned()
                    .collect(),
                defaults: Defaults::new(),
            },
            Self::Names(names) => Normalized {
                names: names.clone(),
                defaults: Defaults::new(),
            },
            Self::Defaults(entries) => Normalized {
                names: entries.iter().map(|(name, _)| name.clone()).collect(),
                defaults: entries.iter().cloned().collect(),
            },
        }
    }
}

fn check_names<'a>(names: impl Iterator<Item = &'a str>) -> Result<(), SpecError> {
    let mut seen = BTreeSet::new();
    for name in names {
        if name.is_empty() {
            return Err(SpecError::EmptyName);
        }
        if !seen.insert(name) {
            return Err(SpecError::DuplicateName {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
