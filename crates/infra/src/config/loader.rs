//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `ATRIUM_API_BASE_URL` is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. Validates the result before returning it
//!
//! ## Environment Variables
//! - `ATRIUM_API_BASE_URL`: Base URL of the backing service (required)
//! - `ATRIUM_API_TIMEOUT_MS`: Request timeout in milliseconds
//! - `ATRIUM_WITH_CREDENTIALS`: Keep and replay service cookies (true/false)
//! - `ATRIUM_USE_MOCK`: Serve fixtures instead of calling the service
//!   (true/false)
//! - `ATRIUM_MOCK_DELAY_MS`: Simulated latency for fixture calls
//! - `ATRIUM_TOKEN_PATH`: File holding the credential token
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./atrium.json` or `./atrium.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use atrium_domain::{
    ApiConfig, AtriumError, Config, DataSourceConfig, Result, StorageConfig,
    DEFAULT_API_TIMEOUT_MS, DEFAULT_MOCK_DELAY_MS,
};
use url::Url;

use crate::errors::InfraError;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If that fails, falls
/// back to a config file.
///
/// # Errors
/// Returns `AtriumError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The loaded values fail [`validate`]
pub fn load() -> Result<Config> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)?
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `ATRIUM_API_BASE_URL` is required; everything else has a default.
///
/// # Errors
/// Returns `AtriumError::Config` if the base URL is missing or a numeric
/// variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("ATRIUM_API_BASE_URL")?;
    let timeout_ms = env_u64("ATRIUM_API_TIMEOUT_MS", DEFAULT_API_TIMEOUT_MS)?;
    let with_credentials = env_bool("ATRIUM_WITH_CREDENTIALS", false);

    let use_mock = env_bool("ATRIUM_USE_MOCK", false);
    let mock_delay_ms = env_u64("ATRIUM_MOCK_DELAY_MS", DEFAULT_MOCK_DELAY_MS)?;

    let token_path =
        std::env::var("ATRIUM_TOKEN_PATH").ok().filter(|s| !s.is_empty()).map(PathBuf::from);

    Ok(Config {
        api: ApiConfig { base_url, timeout_ms, with_credentials, ..ApiConfig::default() },
        data_source: DataSourceConfig { use_mock, mock_delay_ms },
        storage: StorageConfig { token_path },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `AtriumError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AtriumError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AtriumError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AtriumError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Check values that serde cannot
///
/// # Errors
/// Returns `AtriumError::Config` if the base URL is not an absolute http(s)
/// URL or the timeout is zero.
pub fn validate(config: &Config) -> Result<()> {
    let url = Url::parse(&config.api.base_url).map_err(|e| {
        AtriumError::Config(format!("Invalid base URL '{}': {e}", config.api.base_url))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AtriumError::Config(format!(
            "Unsupported base URL scheme '{}'",
            url.scheme()
        )));
    }

    if config.api.timeout_ms == 0 {
        return Err(AtriumError::Config("Request timeout must be greater than zero".to_string()));
    }

    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents).map_err(InfraError::from)?),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AtriumError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AtriumError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./atrium.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> [PathBuf; 8] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("atrium.json"),
        dir.join("atrium.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `AtriumError::Config` if the variable is not set or empty.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AtriumError::Config(format!("Missing required environment variable: {key}")))
}

/// Parse an optional unsigned integer environment variable
fn env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| AtriumError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
