//! Unit tests for configuration resolution and graceful degradation
//!
//! Covers:
//! - Missing TOML files do not prevent startup
//! - Priority order: CLI → ENV → TOML → compiled default
//! - Invalid TOML and invalid ENV values are reported as config errors
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that read or write EWA_* / GEMINI_* / ML_* variables are marked
//! with #[serial] so they run sequentially.

use ewa_common::config::{
    load_toml_config, CompiledDefaults, ConfigOverrides, ServiceConfig, TomlConfig,
    ENV_CONFIG_PATH, ENV_GEMINI_API_KEY, ENV_GEMINI_MODEL, ENV_HOST, ENV_INFERENCE_URL, ENV_PORT,
};
use ewa_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;

fn clear_env() {
    for name in [
        ENV_CONFIG_PATH,
        ENV_HOST,
        ENV_PORT,
        ENV_INFERENCE_URL,
        ENV_GEMINI_API_KEY,
        ENV_GEMINI_MODEL,
    ] {
        env::remove_var(name);
    }
}

fn write_toml(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes()).expect("Should write TOML");
    file
}

#[test]
#[serial]
fn test_defaults_when_nothing_configured() {
    clear_env();

    let config = ServiceConfig::from_sources(
        &ConfigOverrides::default(),
        &TomlConfig::default(),
        &CompiledDefaults::default(),
    )
    .unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 5002);
    assert_eq!(config.inference_api_url, "http://127.0.0.1:8000");
    assert_eq!(config.gemini_model, "gemini-1.5-flash");
    assert!(config.gemini_api_key.is_none());
    assert_eq!(config.log_level, "info");
}

#[test]
#[serial]
fn test_missing_toml_file_is_not_an_error() {
    clear_env();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.toml");
    assert!(load_toml_config(&missing).unwrap().is_none());

    let overrides = ConfigOverrides {
        config_path: Some(missing),
        ..Default::default()
    };
    let config = ServiceConfig::resolve(&overrides).unwrap();
    assert_eq!(config.port, 5002);
}

#[test]
#[serial]
fn test_toml_values_are_used() {
    clear_env();

    let file = write_toml(
        r#"
host = "127.0.0.1"
port = 6000
inference_api_url = "http://ml.internal:9000/"
gemini_api_key = "toml-key"
gemini_model = "gemini-test"

[logging]
level = "debug"
"#,
    );

    let overrides = ConfigOverrides {
        config_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let config = ServiceConfig::resolve(&overrides).unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 6000);
    // Trailing slash trimmed so endpoint paths can be appended
    assert_eq!(config.inference_api_url, "http://ml.internal:9000");
    assert_eq!(config.gemini_api_key.as_deref(), Some("toml-key"));
    assert_eq!(config.gemini_model, "gemini-test");
    assert_eq!(config.log_level, "debug");
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    clear_env();
    env::set_var(ENV_PORT, "7000");
    env::set_var(ENV_INFERENCE_URL, "http://env-ml:8000");
    env::set_var(ENV_GEMINI_API_KEY, "env-key");

    let toml_config = TomlConfig {
        port: Some(6000),
        inference_api_url: Some("http://toml-ml:8000".to_string()),
        gemini_api_key: Some("toml-key".to_string()),
        ..Default::default()
    };
    let config = ServiceConfig::from_sources(
        &ConfigOverrides::default(),
        &toml_config,
        &CompiledDefaults::default(),
    )
    .unwrap();

    assert_eq!(config.port, 7000);
    assert_eq!(config.inference_api_url, "http://env-ml:8000");
    assert_eq!(config.gemini_api_key.as_deref(), Some("env-key"));

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var(ENV_PORT, "7000");
    env::set_var(ENV_HOST, "10.0.0.1");

    let overrides = ConfigOverrides {
        port: Some(8080),
        host: Some("127.0.0.1".to_string()),
        ..Default::default()
    };
    let config = ServiceConfig::from_sources(
        &overrides,
        &TomlConfig::default(),
        &CompiledDefaults::default(),
    )
    .unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");

    clear_env();
}

#[test]
#[serial]
fn test_blank_api_key_is_ignored() {
    clear_env();
    env::set_var(ENV_GEMINI_API_KEY, "   ");

    let toml_config = TomlConfig {
        gemini_api_key: Some("".to_string()),
        ..Default::default()
    };
    let config = ServiceConfig::from_sources(
        &ConfigOverrides::default(),
        &toml_config,
        &CompiledDefaults::default(),
    )
    .unwrap();

    assert!(config.gemini_api_key.is_none());

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_port_is_config_error() {
    clear_env();
    env::set_var(ENV_PORT, "not-a-port");

    let result = ServiceConfig::from_sources(
        &ConfigOverrides::default(),
        &TomlConfig::default(),
        &CompiledDefaults::default(),
    );
    assert!(matches!(result, Err(Error::Config(_))));

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_toml_is_config_error() {
    clear_env();

    let file = write_toml("port = \"five thousand\"");
    let result = load_toml_config(file.path());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_config_path_from_env() {
    clear_env();

    let file = write_toml("port = 6123\n");
    env::set_var(ENV_CONFIG_PATH, file.path());

    let config = ServiceConfig::resolve(&ConfigOverrides::default()).unwrap();
    assert_eq!(config.port, 6123);

    clear_env();
}

#[test]
fn test_invalid_bind_address() {
    let config = ServiceConfig {
        host: "not a host".to_string(),
        port: 5002,
        inference_api_url: String::new(),
        gemini_api_key: None,
        gemini_model: String::new(),
        log_level: "info".to_string(),
    };
    assert!(matches!(config.socket_addr(), Err(Error::Config(_))));
}
