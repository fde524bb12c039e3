// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   Version | Define | EnvFiles | Options | Configs
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use envdefine::cli::global::GlobalOptions;
use envdefine::cli::{self, Command};
use envdefine::cmd::config::{run_configs_command, run_env_files_command, run_options_command};
use envdefine::cmd::define::run_define_command;
use envdefine::config::loader::ConfigLoader;
use envdefine::config::{CONFIG_FILE, Config, ENV_PREFIX};
use envdefine::logging::init_logging;
use envdefine::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_file_format(global.log_format.into())
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let cwd = current_dir();
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global, &cwd).map(|config| run_options_command(&config))
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global, &cwd);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Define(args)) => load_config(&cli.global, &cwd)
            .and_then(|config| run_define_command(args, &config, &cwd)),
        Some(Command::EnvFiles(args)) => load_config(&cli.global, &cwd)
            .and_then(|config| run_env_files_command(args, &config, &cwd)),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn build_config_loader(global: &GlobalOptions, cwd: &Path) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        let root = global.root.as_deref().unwrap_or(cwd);
        loader = loader.add_toml_file_optional(root.join(CONFIG_FILE));
    }
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions, cwd: &Path) -> envdefine::error::Result<Config> {
    let mut loader = build_config_loader(global, cwd);
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }
    loader.build()
}
