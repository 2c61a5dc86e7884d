//! Build profile selection tests.
//!
//! Responsibilities:
//! - Test `BUILD_PROFILE` selection and builder precedence.
//! - Test that both literal optimizer variants pass through unchanged.
//! - Test that missing variables are reported ahead of an unknown profile.

use super::{full_snapshot, snapshot};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::loader::load;
use crate::types::BuildProfile;

#[test]
fn test_dev_profile_keeps_runs_with_optimizer_disabled() {
    let config = ConfigLoader::new()
        .with_profile(BuildProfile::Dev)
        .from_env(&full_snapshot())
        .unwrap()
        .build()
        .unwrap();

    assert!(!config.optimizer().enabled);
    assert_eq!(config.optimizer().runs, 500);
}

#[test]
fn test_production_profile_enables_optimizer() {
    let config = ConfigLoader::new()
        .with_profile(BuildProfile::Production)
        .from_env(&full_snapshot())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.profile(), BuildProfile::Production);
    assert!(config.optimizer().enabled);
    assert_eq!(config.optimizer().runs, 40_000);
    assert!(!config.optimizer().yul_details);
    assert_eq!(config.compiler_version(), "0.8.17");
}

#[test]
fn test_build_profile_env_selects_profile() {
    let mut env = full_snapshot();
    env.insert("BUILD_PROFILE".to_string(), "production".to_string());

    let config = load(&env).unwrap();
    assert_eq!(config.profile(), BuildProfile::Production);
    assert_eq!(config.optimizer().runs, 40_000);
}

#[test]
fn test_builder_profile_overrides_env() {
    let mut env = full_snapshot();
    env.insert("BUILD_PROFILE".to_string(), "production".to_string());

    let config = ConfigLoader::new()
        .with_profile(BuildProfile::Dev)
        .from_env(&env)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.profile(), BuildProfile::Dev);
}

#[test]
fn test_unknown_build_profile_is_rejected() {
    let mut env = full_snapshot();
    env.insert("BUILD_PROFILE".to_string(), "staging".to_string());

    match load(&env) {
        Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "BUILD_PROFILE"),
        other => panic!("expected InvalidValue for BUILD_PROFILE, got {other:?}"),
    }
}

#[test]
fn test_blank_build_profile_falls_back_to_dev() {
    let mut env = full_snapshot();
    env.insert("BUILD_PROFILE".to_string(), "  ".to_string());

    assert_eq!(load(&env).unwrap().profile(), BuildProfile::Dev);
}

#[test]
fn test_missing_vars_take_precedence_over_unknown_profile() {
    let env = snapshot(&[
        ("PRIVATE_KEY", "0xabc"),
        ("POLYGONSCAN_API_KEY", "key123"),
        ("BUILD_PROFILE", "staging"),
    ]);

    assert_eq!(
        load(&env).unwrap_err(),
        ConfigError::MissingEnvVars(vec!["TESTNET_RPC".to_string()])
    );
}

#[test]
fn test_builder_profile_ignores_unknown_env_profile() {
    let mut env = full_snapshot();
    env.insert("BUILD_PROFILE".to_string(), "staging".to_string());

    let config = ConfigLoader::new()
        .with_profile(BuildProfile::Production)
        .from_env(&env)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.profile(), BuildProfile::Production);
}
