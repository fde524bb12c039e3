// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            EnvDefineError (~24 bytes)
//!                     |
//!   +--------+--------+--------+--------+
//!   |        |        |        |        |
//!   v        v        v        v        v
//! Bail    Resolve   Spec   EnvFile   Config
//!           Box      Box     Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Resolve  MissingVariable
//!   Spec     EmptyName, DuplicateName
//!   EnvFile  ReservedMode, Parse, Io
//!   Config   InvalidValue, ConflictingDefault
//!
//! All variants boxed => EnvDefineError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvDefineError`].
pub type EnvDefineResult<T> = std::result::Result<T, EnvDefineError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
/// Each variant's message already embeds its sub-error, so none of them
/// reports a `source`; an `{:#}` chain prints the message once.
#[derive(Debug, Error)]
pub enum EnvDefineError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// A requested variable could not be resolved.
    #[error("resolve error: {0}")]
    Resolve(Box<ResolveError>),

    /// The variable specification is malformed.
    #[error("spec error: {0}")]
    Spec(Box<SpecError>),

    /// Loading an env file failed.
    #[error("env file error: {0}")]
    EnvFile(Box<EnvFileError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),
}

/// Create a fatal [`EnvDefineError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> EnvDefineError {
    EnvDefineError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvDefineError {
                fn from(err: $error) -> Self {
                    EnvDefineError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ResolveError => Resolve,
    SpecError => Spec,
    EnvFileError => EnvFile,
    ConfigError => Config,
}

// --- Resolve Errors ---

/// Variable resolution errors.
///
/// Resolution is all-or-nothing: any of these aborts the whole pass and no
/// define map is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A required variable has neither an environment value nor a default.
    #[error(
        "the `{name}` environment variable is undefined.\n\n\
         Declare a default value for it, or mark it optional, to suppress this error."
    )]
    MissingVariable { name: String },
}

impl ResolveError {
    /// Name of the variable that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::MissingVariable { name } => name,
        }
    }
}

// --- Spec Errors ---

/// Variable specification errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// A variable name was empty.
    #[error("variable names must not be empty")]
    EmptyName,

    /// The same variable name was declared twice.
    #[error("variable `{name}` is declared more than once")]
    DuplicateName { name: String },
}

// --- Env File Errors ---

/// Env file loading errors.
#[derive(Debug, Error)]
pub enum EnvFileError {
    /// `local` collides with the `.local` suffix of env files.
    #[error(
        "\"local\" cannot be used as a mode name because it conflicts with the .local postfix for .env files"
    )]
    ReservedMode,

    /// An env file exists but could not be parsed.
    #[error("failed to parse env file '{path}': {message}")]
    Parse { path: String, message: String },

    /// An env file exists but could not be read.
    #[error("failed to read env file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `[[plugins.defaults]]` entry sets more than one of `value`,
    /// `optional` and `required`.
    #[error("conflicting default for `{name}`: {message}")]
    ConflictingDefault { name: String, message: String },
}

#[cfg(test)]
mod tests;
