// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolution of variable names into define literals.
//!
//! ```text
//! name --> env value? ----yes----> "\"value\""
//!             | no
//!             v
//!          default?  Value(v) ---> "\"v\""
//!             |      Optional ---> null
//!             |      Required -+
//!             | none           |
//!             v                v
//!       ResolveError::MissingVariable
//! ```

use std::collections::BTreeMap;

use tracing::trace;

use crate::env::EnvSnapshot;
use crate::error::ResolveError;
use crate::spec::{DeclaredDefault, Defaults};

/// Namespace prefixed to every define key unless configured otherwise.
pub const DEFAULT_DEFINE_ON: &str = "process.env";

/// Literal emitted for optional variables that are absent.
pub const NULL_LITERAL: &str = "null";

/// Define key to JSON-encoded literal.
pub type DefineMap = BTreeMap<String, String>;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Environment,
    Default,
    Optional,
}

/// Resolve `names` against `env`, falling back to `defaults`.
///
/// Returns one `"{define_on}.{name}"` entry per name. Stops at the first
/// name that resolves to nothing, in `names` order.
///
/// # Errors
///
/// Returns [`ResolveError::MissingVariable`] if a name is absent from `env`
/// and has no default, or its default is [`DeclaredDefault::Required`].
pub fn resolve(
    env: &EnvSnapshot,
    names: &[String],
    defaults: &Defaults,
    define_on: &str,
) -> Result<DefineMap, ResolveError> {
    names
        .iter()
        .map(|name| {
            let (literal, source) = resolve_one(env, name, defaults)?;
            trace!(name = name.as_str(), source = ?source, "resolved variable");
            Ok((define_key(define_on, name), literal))
        })
        .collect()
}

fn resolve_one(
    env: &EnvSnapshot,
    name: &str,
    defaults: &Defaults,
) -> Result<(String, Source), ResolveError> {
    if let Some(value) = env.get(name) {
        return Ok((encode(value), Source::Environment));
    }

    match defaults.get(name) {
        Some(DeclaredDefault::Value(value)) => Ok((encode(value), Source::Default)),
        Some(DeclaredDefault::Optional) => Ok((NULL_LITERAL.to_string(), Source::Optional)),
        Some(DeclaredDefault::Required) | None => Err(ResolveError::MissingVariable {
            name: name.to_string(),
        }),
    }
}

/// Build the define key for `name` under the `define_on` namespace.
#[must_use]
pub fn define_key(define_on: &str, name: &str) -> String {
    format!("{define_on}.{name}")
}

fn encode(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

#[cfg(test)]
mod tests;
