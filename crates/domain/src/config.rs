//! Configuration structures
//!
//! Loaded once at startup (see `atrium_infra::config`) and never re-read per
//! call.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_MS, DEFAULT_MOCK_DELAY_MS};

/// Top-level client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub data_source: DataSourceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backing service connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to (e.g. "https://bff.example.com/api")
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Keep cookies set by the service and send them back on later calls
    #[serde(default)]
    pub with_credentials: bool,
    /// Extra headers sent with every request
    #[serde(default)]
    pub default_headers: BTreeMap<String, String>,
}

impl ApiConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: DEFAULT_API_TIMEOUT_MS,
            with_credentials: false,
            default_headers: BTreeMap::new(),
        }
    }
}

/// Selects between the live service and in-memory fixtures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    #[serde(default)]
    pub use_mock: bool,
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
}

impl DataSourceConfig {
    pub const fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self { use_mock: false, mock_delay_ms: DEFAULT_MOCK_DELAY_MS }
    }
}

/// Credential persistence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// File holding the credential token. `None` keeps it in memory only.
    #[serde(default)]
    pub token_path: Option<PathBuf>,
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_API_TIMEOUT_MS
}

const fn default_mock_delay_ms() -> u64 {
    DEFAULT_MOCK_DELAY_MS
}
