// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use super::{EnvironmentPlugin, PLUGIN_NAME, PluginOptions};
use crate::env::EnvSnapshot;
use crate::error::{EnvDefineError, ResolveError};
use crate::host::{ConfigEnv, Enforce, Plugin};
use crate::spec::{DeclaredDefault, VariableSpec};

#[test]
fn test_default_options() {
    let options = PluginOptions::default();
    assert!(options.load_env_files());
    assert_eq!(options.prefix(), "");
    assert_eq!(options.define_on(), "process.env");
}

#[test]
fn test_plugin_identity() {
    let plugin = EnvironmentPlugin::new(VariableSpec::All, PluginOptions::default());
    assert_eq!(plugin.name(), PLUGIN_NAME);
    assert_eq!(plugin.enforce(), Enforce::Post);
}

#[test]
fn test_without_env_files_uses_process_env() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), "API_KEY=from_file\n").unwrap();

    let plugin = EnvironmentPlugin::new(
        VariableSpec::names(["API_KEY"]).unwrap(),
        PluginOptions::builder().with_load_env_files(false).build(),
    );
    let env = ConfigEnv::builder().root(dir.path()).build();
    let process: EnvSnapshot = [("API_KEY", "from_process")].into_iter().collect();

    let config = plugin.config(&env, &process).unwrap();
    assert_eq!(config.define["process.env.API_KEY"], "\"from_process\"");
}

#[test]
fn test_env_files_feed_resolution() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env.development"), "APP_VERSION=v3\n").unwrap();

    let plugin = EnvironmentPlugin::new(
        VariableSpec::defaults([
            ("APP_VERSION", DeclaredDefault::value("v2")),
            ("APP_RELEASE", DeclaredDefault::Optional),
        ])
        .unwrap(),
        PluginOptions::default(),
    );
    let env = ConfigEnv::builder()
        .root(dir.path())
        .mode("development")
        .build();

    let config = plugin.config(&env, &EnvSnapshot::new()).unwrap();
    assert_eq!(config.define["process.env.APP_VERSION"], "\"v3\"");
    assert_eq!(config.define["process.env.APP_RELEASE"], "null");
}

#[test]
fn test_missing_variable_surfaces_resolve_error() {
    let dir = tempfile::tempdir().unwrap();
    let plugin = EnvironmentPlugin::new(
        VariableSpec::defaults([("API_KEY", DeclaredDefault::Required)]).unwrap(),
        PluginOptions::default(),
    );
    let env = ConfigEnv::builder().root(dir.path()).mode("staging").build();

    let err = plugin.config(&env, &EnvSnapshot::new()).unwrap_err();
    match err.downcast_ref::<EnvDefineError>() {
        Some(EnvDefineError::Resolve(inner)) => {
            assert_eq!(
                **inner,
                ResolveError::MissingVariable {
                    name: "API_KEY".to_string()
                }
            );
        }
        other => panic!("expected resolve error, got {other:?}"),
    }
}

#[test]
fn test_all_with_prefix_and_namespace() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".env"),
        "VUE_APP_VERSION=v3\nAPI_KEY=secret\n",
    )
    .unwrap();

    let plugin = EnvironmentPlugin::new(
        VariableSpec::All,
        PluginOptions::builder()
            .with_prefix("VUE_APP")
            .with_define_on("import.meta.env")
            .build(),
    );
    let env = ConfigEnv::builder().root(dir.path()).build();

    let config = plugin.config(&env, &EnvSnapshot::new()).unwrap();
    let keys: Vec<_> = config.define.keys().cloned().collect();
    assert_eq!(keys, ["import.meta.env.VUE_APP_VERSION"]);
}

#[test]
fn test_reserved_mode_is_an_env_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let plugin = EnvironmentPlugin::new(VariableSpec::All, PluginOptions::default());
    let env = ConfigEnv::builder().root(dir.path()).mode("local").build();

    let err = plugin.config(&env, &EnvSnapshot::new()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EnvDefineError>(),
        Some(EnvDefineError::EnvFile(_))
    ));
}
