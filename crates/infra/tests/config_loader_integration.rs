//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! feeding it to the transport.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use atrium_domain::AtriumError;
use atrium_infra::{config, TransportConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let path = write_config(
        r#"{
            "api": {
                "base_url": "https://bff.example.com/api",
                "timeout_ms": 4000,
                "with_credentials": true,
                "default_headers": { "X-Client": "atrium" }
            },
            "data_source": { "use_mock": false, "mock_delay_ms": 50 },
            "storage": { "token_path": "/tmp/atrium/token.json" }
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load config");
    config::validate(&config).expect("config should be valid");

    assert_eq!(config.api.base_url, "https://bff.example.com/api");
    assert!(!config.data_source.use_mock);
    assert_eq!(config.data_source.mock_delay(), Duration::from_millis(50));

    let transport = TransportConfig::from_api_config(&config.api).expect("valid transport config");
    assert_eq!(transport.timeout, Duration::from_millis(4000));
    assert!(transport.with_credentials);
    assert_eq!(transport.default_headers.get("x-client").unwrap(), "atrium");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let path = write_config(
        r#"
[api]
base_url = "http://localhost:8080/api"

[data_source]
use_mock = true
"#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load config");

    assert!(config.data_source.use_mock);
    assert!(config.storage.token_path.is_none());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_nonexistent_file() {
    let result = config::load_from_file(Some("/nonexistent/path/config.json".into()));

    match result {
        Err(AtriumError::Config(msg)) => {
            assert!(msg.contains("not found"), "Error message should mention 'not found'");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_load_config_with_invalid_format() {
    let path = write_config(r#"{ "this is": "not valid" "#, "json");

    match config::load_from_file(Some(path.clone())) {
        Err(AtriumError::Config(msg)) => {
            assert!(msg.contains("Invalid JSON"), "Error message should mention invalid JSON");
        }
        other => panic!("Expected Config error, got {other:?}"),
    }

    std::fs::remove_file(path).ok();
}

#[test]
fn test_invalid_base_url_fails_validation() {
    let path = write_config(r#"{ "api": { "base_url": "bff.example.com" } }"#, "json");

    let config = config::load_from_file(Some(path.clone())).expect("file parses");
    assert!(matches!(config::validate(&config), Err(AtriumError::Config(_))));

    std::fs::remove_file(path).ok();
}
