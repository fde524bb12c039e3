// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{ConfigEnv, DEFAULT_MODE, Enforce, Plugin, UserConfig, apply_config_hooks};
use crate::env::EnvSnapshot;
use crate::error::Result;

struct Fixed {
    name: &'static str,
    enforce: Enforce,
    value: &'static str,
}

impl Plugin for Fixed {
    fn name(&self) -> &str {
        self.name
    }

    fn enforce(&self) -> Enforce {
        self.enforce
    }

    fn config(&self, _env: &ConfigEnv, _process_env: &EnvSnapshot) -> Result<UserConfig> {
        let mut config = UserConfig::default();
        config
            .define
            .insert("process.env.MODE".to_string(), self.value.to_string());
        Ok(config)
    }
}

struct Failing;

impl Plugin for Failing {
    fn name(&self) -> &str {
        "failing"
    }

    fn config(&self, _env: &ConfigEnv, _process_env: &EnvSnapshot) -> Result<UserConfig> {
        anyhow::bail!("hook failed")
    }
}

fn config_env() -> ConfigEnv {
    ConfigEnv::builder().root("/project").build()
}

#[test]
fn test_config_env_defaults() {
    let env = config_env();
    assert_eq!(env.mode(), DEFAULT_MODE);
    assert_eq!(env.env_dir(), PathBuf::from("/project"));
}

#[test]
fn test_config_env_relative_env_dir() {
    let env = ConfigEnv::builder()
        .root("/project")
        .mode("development")
        .env_dir("alt")
        .build();
    assert_eq!(env.mode(), "development");
    assert_eq!(env.env_dir(), PathBuf::from("/project").join("alt"));
}

#[test]
fn test_post_plugin_wins_regardless_of_registration_order() {
    let post = Fixed {
        name: "post",
        enforce: Enforce::Post,
        value: "\"post\"",
    };
    let normal = Fixed {
        name: "normal",
        enforce: Enforce::Normal,
        value: "\"normal\"",
    };
    let pre = Fixed {
        name: "pre",
        enforce: Enforce::Pre,
        value: "\"pre\"",
    };

    let define =
        apply_config_hooks(&[&post, &normal, &pre], &config_env(), &EnvSnapshot::new()).unwrap();
    assert_eq!(define["process.env.MODE"], "\"post\"");
}

#[test]
fn test_same_slot_keeps_registration_order() {
    let first = Fixed {
        name: "first",
        enforce: Enforce::Normal,
        value: "\"first\"",
    };
    let second = Fixed {
        name: "second",
        enforce: Enforce::Normal,
        value: "\"second\"",
    };

    let define =
        apply_config_hooks(&[&first, &second], &config_env(), &EnvSnapshot::new()).unwrap();
    assert_eq!(define["process.env.MODE"], "\"second\"");
}

#[test]
fn test_hook_error_aborts_pass() {
    let ok = Fixed {
        name: "ok",
        enforce: Enforce::Pre,
        value: "\"ok\"",
    };
    let err = apply_config_hooks(&[&ok, &Failing], &config_env(), &EnvSnapshot::new()).unwrap_err();
    assert_eq!(err.to_string(), "hook failed");
}

#[test]
fn test_enforce_display() {
    let names: Vec<_> = [Enforce::Pre, Enforce::Normal, Enforce::Post]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, ["pre", "normal", "post"]);
}
