// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envdefine using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envdefine [global options] <command>
//! define [--format json|lines]
//! env-files [--all]
//! options
//! configs
//! version
//! ```

pub mod define;
pub mod global;


use crate::cli::define::{DefineArgs, EnvFilesArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Build-time environment variable inlining.
#[derive(Debug, Parser)]
#[command(
    name = "envdefine",
    author,
    version,
    about = "Inline environment variables into client code at build time",
    long_about = "Resolves the environment variables declared in envdefine.toml\n\
                  against the process environment and mode-scoped .env files, and\n\
                  prints the define map a bundler's static replacement consumes.\n\n\
                  A variable that is neither set nor given a default aborts with\n\
                  an error naming it.",
    after_help = "ENV FILES:\n\n\
                  For mode <mode>, envdefine reads .env, .env.local, .env.<mode>\n\
                  and .env.<mode>.local from the env directory (the root unless\n\
                  --env-dir is given), later files overriding earlier ones. Process\n\
                  environment variables override all of them. Use --no-env-files\n\
                  to read the process environment only."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Resolves the configured variables and prints the define map.
    Define(DefineArgs),

    /// Lists the env files read for the current mode.
    #[command(name = "env-files")]
    EnvFiles(EnvFilesArgs),

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Configs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
