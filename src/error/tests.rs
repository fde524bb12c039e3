// envdefine: build-time environment variable inlining
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    ConfigError, EnvDefineError, EnvDefineResult, EnvFileError, ResolveError, SpecError, bail_out,
};

#[test]
fn test_missing_variable_display() {
    let err = ResolveError::MissingVariable {
        name: "API_KEY".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @r"
    the `API_KEY` environment variable is undefined.

    Declare a default value for it, or mark it optional, to suppress this error.
    ");
    assert_eq!(err.name(), "API_KEY");
}

#[test]
fn test_reserved_mode_display() {
    insta::assert_snapshot!(
        EnvFileError::ReservedMode.to_string(),
        @r#""local" cannot be used as a mode name because it conflicts with the .local postfix for .env files"#
    );
}

#[test]
fn test_spec_error_display() {
    let err = SpecError::DuplicateName {
        name: "APP_VERSION".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"variable `APP_VERSION` is declared more than once");
}

#[test]
fn test_boxed_conversion_keeps_message() {
    let err: EnvDefineError = ConfigError::InvalidValue {
        section: "options".to_string(),
        key: "define_on".to_string(),
        message: "must not be empty".to_string(),
    }
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"config error: invalid value for 'define_on' in section '[options]': must not be empty"
    );
}

#[test]
fn test_bail_out() {
    let err = bail_out("no plugins configured");
    assert!(matches!(err, EnvDefineError::Bailed(_)));
    assert_eq!(err.to_string(), "fatal error: no plugins configured");
}

#[test]
fn test_error_size() {
    // The Box<str> variant (Bailed) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<EnvDefineError>();
    assert!(size <= 24, "EnvDefineError is {size} bytes, expected <= 24");
}

#[test]
fn test_result_size() {
    let size = std::mem::size_of::<EnvDefineResult<()>>();
    assert!(size <= 24, "EnvDefineResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_alternate_chain_prints_message_once() {
    let err = anyhow::Error::from(EnvDefineError::from(ResolveError::MissingVariable {
        name: "API_KEY".to_string(),
    }));
    let rendered = format!("{err:#}");
    assert_eq!(
        rendered
            .matches("`API_KEY` environment variable is undefined")
            .count(),
        1,
        "{rendered}"
    );
    assert!(rendered.starts_with("resolve error: "));
}

#[test]
fn test_reserved_mode_has_no_source() {
    use std::error::Error as _;

    let err = EnvDefineError::from(EnvFileError::ReservedMode);
    assert!(err.source().is_none());
    assert_eq!(
        format!("{:#}", anyhow::Error::from(err))
            .matches("cannot be used as a mode name")
            .count(),
        1
    );
}
