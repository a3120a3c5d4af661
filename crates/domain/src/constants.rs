//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! client.

// Credential storage
pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const BEARER_PREFIX: &str = "Bearer ";

// Transport defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

// Fixture data source
pub const DEFAULT_MOCK_DELAY_MS: u64 = 500;
pub const MOCK_TOKEN: &str = "mock-jwt-token";

// Navigation
pub const LOGIN_ROUTE: &str = "/login";
