// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{DeclaredDefault, VariableSpec};
use crate::env::EnvSnapshot;
use crate::error::SpecError;

fn snapshot(pairs: &[(&str, &str)]) -> EnvSnapshot {
    pairs.iter().copied().collect()
}

#[test]
fn test_names_keep_declaration_order() {
    let spec = VariableSpec::names(["API_KEY", "APP_VERSION"]).unwrap();
    let normalized = spec.normalize(&EnvSnapshot::default(), "");
    assert_eq!(normalized.names, ["API_KEY", "APP_VERSION"]);
    assert!(normalized.defaults.is_empty());
}

#[test]
fn test_defaults_table() {
    let spec = VariableSpec::defaults([
        ("APP_VERSION", DeclaredDefault::value("v2")),
        ("APP_RELEASE", DeclaredDefault::Optional),
        ("API_KEY", DeclaredDefault::Required),
    ])
    .unwrap();
    let normalized = spec.normalize(&EnvSnapshot::default(), "");

    assert_eq!(normalized.names, ["APP_VERSION", "APP_RELEASE", "API_KEY"]);
    assert_eq!(
        normalized.defaults.get("APP_VERSION"),
        Some(&DeclaredDefault::Value("v2".to_string()))
    );
    assert_eq!(
        normalized.defaults.get("APP_RELEASE"),
        Some(&DeclaredDefault::Optional)
    );
    assert_eq!(
        normalized.defaults.get("API_KEY"),
        Some(&DeclaredDefault::Required)
    );
}

#[test]
fn test_all_filters_by_prefix() {
    let env = snapshot(&[
        ("VUE_APP_VERSION", "v3"),
        ("API_KEY", "abc"),
        ("VUE_APP_TITLE", "demo"),
    ]);
    let normalized = VariableSpec::All.normalize(&env, "VUE_APP");
    assert_eq!(normalized.names, ["VUE_APP_TITLE", "VUE_APP_VERSION"]);
}

#[test]
fn test_all_with_empty_prefix_takes_everything() {
    let env = snapshot(&[("B", "2"), ("A", "1")]);
    let normalized = VariableSpec::All.normalize(&env, "");
    assert_eq!(normalized.names, ["A", "B"]);
}

#[test]
fn test_duplicate_name_rejected() {
    let err = VariableSpec::names(["API_KEY", "API_KEY"]).unwrap_err();
    assert_eq!(
        err,
        SpecError::DuplicateName {
            name: "API_KEY".to_string()
        }
    );
}

#[test]
fn test_empty_name_rejected() {
    let err = VariableSpec::defaults([("", "x")]).unwrap_err();
    assert_eq!(err, SpecError::EmptyName);
}
