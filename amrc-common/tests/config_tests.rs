//! Unit tests for configuration loading and graceful degradation
//!
//! Covers:
//! - Missing TOML files do not cause failure (defaults + warning)
//! - Malformed TOML is a configuration error
//! - Config path priority: CLI → ENV → platform default
//! - Log level priority: CLI → ENV → TOML → default
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate AMRC_CONFIG or AMRC_LOG_LEVEL are marked with #[serial].

use amrc_common::config::{
    load_toml_config, resolve_log_level, ConfigResolver, TomlConfig, CONFIG_ENV_VAR,
    LOG_LEVEL_ENV_VAR,
};
use amrc_common::Error;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.toml");

    let config = load_toml_config(&path).unwrap();
    assert_eq!(config, TomlConfig::default());
}

#[test]
fn test_full_file_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("amrc-classify.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "debug"

[output]
pretty = false
summary = true

[batch]
max_concurrency = 2
"#,
    )
    .unwrap();

    let config = load_toml_config(&path).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert!(!config.output.pretty);
    assert!(config.output.summary);
    assert_eq!(config.batch.max_concurrency, 2);
}

#[test]
fn test_malformed_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[logging\nlevel = ").unwrap();

    let result = load_toml_config(&path);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_zero_concurrency_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("zero.toml");
    fs::write(&path, "[batch]\nmax_concurrency = 0\n").unwrap();

    let err = load_toml_config(&path).unwrap_err();
    assert!(err.to_string().contains("max_concurrency"));
}

#[test]
#[serial]
fn test_resolver_cli_arg_wins_over_env() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/amrc-from-env.toml");

    let resolver = ConfigResolver::new("amrc-classify");
    let cli = PathBuf::from("/tmp/amrc-from-cli.toml");
    assert_eq!(resolver.resolve(Some(&cli)), Some(cli.clone()));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_resolver_env_var() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/amrc-from-env.toml");

    let resolver = ConfigResolver::new("amrc-classify");
    assert_eq!(
        resolver.resolve(None),
        Some(PathBuf::from("/tmp/amrc-from-env.toml"))
    );

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_resolver_load_from_env_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("env.toml");
    fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();
    env::set_var(CONFIG_ENV_VAR, &path);

    let config = ConfigResolver::new("amrc-classify").load(None).unwrap();
    assert_eq!(config.logging.level, "warn");

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_log_level_priority() {
    let mut config = TomlConfig::default();
    config.logging.level = "warn".to_string();

    env::remove_var(LOG_LEVEL_ENV_VAR);
    assert_eq!(resolve_log_level(None, &config), "warn");

    env::set_var(LOG_LEVEL_ENV_VAR, "trace");
    assert_eq!(resolve_log_level(None, &config), "trace");
    assert_eq!(resolve_log_level(Some("error"), &config), "error");

    env::remove_var(LOG_LEVEL_ENV_VAR);
}
