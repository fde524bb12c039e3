// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{DEFAULT_DEFINE_ON, define_key, resolve};
use crate::env::EnvSnapshot;
use crate::error::ResolveError;
use crate::spec::{DeclaredDefault, Defaults};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn defaults_b() -> Defaults {
    [
        ("APP_VERSION".to_string(), DeclaredDefault::value("v2")),
        ("APP_RELEASE".to_string(), DeclaredDefault::Optional),
        ("API_KEY".to_string(), DeclaredDefault::Required),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_list_form_reads_environment() {
    let env: EnvSnapshot = [("API_KEY", "k"), ("APP_VERSION", "2")].into_iter().collect();
    let map = resolve(
        &env,
        &names(&["API_KEY", "APP_VERSION"]),
        &Defaults::new(),
        DEFAULT_DEFINE_ON,
    )
    .unwrap();

    insta::assert_snapshot!(serde_json::to_string_pretty(&map).unwrap(), @r#"
    {
      "process.env.API_KEY": "\"k\"",
      "process.env.APP_VERSION": "\"2\""
    }
    "#);
}

#[test]
fn test_list_form_missing_variable() {
    let env: EnvSnapshot = [("APP_VERSION", "2")].into_iter().collect();
    let err = resolve(
        &env,
        &names(&["API_KEY", "APP_VERSION"]),
        &Defaults::new(),
        DEFAULT_DEFINE_ON,
    )
    .unwrap_err();
    assert_eq!(err.name(), "API_KEY");
}

#[test]
fn test_required_marker_fails_on_empty_env() {
    let err = resolve(
        &EnvSnapshot::new(),
        &names(&["APP_VERSION", "APP_RELEASE", "API_KEY"]),
        &defaults_b(),
        DEFAULT_DEFINE_ON,
    )
    .unwrap_err();
    assert_eq!(
        err,
        ResolveError::MissingVariable {
            name: "API_KEY".to_string()
        }
    );
    assert!(err.to_string().contains("API_KEY"));
}

#[test]
fn test_environment_overrides_default() {
    let env: EnvSnapshot = [("APP_VERSION", "v3"), ("API_KEY", "abc")]
        .into_iter()
        .collect();
    let map = resolve(
        &env,
        &names(&["APP_VERSION", "APP_RELEASE", "API_KEY"]),
        &defaults_b(),
        DEFAULT_DEFINE_ON,
    )
    .unwrap();

    assert_eq!(map["process.env.APP_VERSION"], "\"v3\"");
    assert_eq!(map["process.env.API_KEY"], "\"abc\"");
    assert_eq!(map["process.env.APP_RELEASE"], "null");
}

#[test]
fn test_default_used_when_absent() {
    let env: EnvSnapshot = [("API_KEY", "abc")].into_iter().collect();
    let map = resolve(
        &env,
        &names(&["APP_VERSION", "API_KEY"]),
        &defaults_b(),
        DEFAULT_DEFINE_ON,
    )
    .unwrap();
    assert_eq!(map["process.env.APP_VERSION"], "\"v2\"");
}

#[test]
fn test_string_null_is_not_the_null_literal() {
    let env: EnvSnapshot = [("APP_RELEASE", "null")].into_iter().collect();
    let map = resolve(
        &env,
        &names(&["APP_RELEASE"]),
        &defaults_b(),
        DEFAULT_DEFINE_ON,
    )
    .unwrap();
    assert_eq!(map["process.env.APP_RELEASE"], "\"null\"");
}

#[test]
fn test_values_are_json_escaped() {
    let env: EnvSnapshot = [("QUOTE", "say \"hi\"\n")].into_iter().collect();
    let map = resolve(&env, &names(&["QUOTE"]), &Defaults::new(), DEFAULT_DEFINE_ON).unwrap();
    assert_eq!(map["process.env.QUOTE"], r#""say \"hi\"\n""#);
}

#[test]
fn test_empty_value_is_defined() {
    let env: EnvSnapshot = [("EMPTY", "")].into_iter().collect();
    let map = resolve(&env, &names(&["EMPTY"]), &Defaults::new(), DEFAULT_DEFINE_ON).unwrap();
    assert_eq!(map["process.env.EMPTY"], "\"\"");
}

#[test]
fn test_custom_namespace() {
    let env: EnvSnapshot = [("VUE_APP_VERSION", "v3")].into_iter().collect();
    let map = resolve(
        &env,
        &names(&["VUE_APP_VERSION"]),
        &Defaults::new(),
        "import.meta.env",
    )
    .unwrap();
    assert_eq!(map["import.meta.env.VUE_APP_VERSION"], "\"v3\"");
    assert_eq!(define_key("import.meta.env", "X"), "import.meta.env.X");
}

#[test]
fn test_resolution_is_idempotent() {
    let env: EnvSnapshot = [("APP_VERSION", "v3"), ("API_KEY", "abc")]
        .into_iter()
        .collect();
    let list = names(&["APP_VERSION", "APP_RELEASE", "API_KEY"]);
    let first = resolve(&env, &list, &defaults_b(), DEFAULT_DEFINE_ON).unwrap();
    let second = resolve(&env, &list, &defaults_b(), DEFAULT_DEFINE_ON).unwrap();
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn test_no_names_yields_empty_map() {
    let map = resolve(&EnvSnapshot::new(), &[], &Defaults::new(), DEFAULT_DEFINE_ON).unwrap();
    assert!(map.is_empty());
}
